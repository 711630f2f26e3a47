//! Writing rendered figures to disk
//!
//! Raster formats are rendered into memory, cropped to the bounding box of
//! everything that differs from the background (plus a small padding) and then
//! encoded with `image`. SVG output is written by the plotters SVG backend at
//! full figure size.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{imageops, DynamicImage, ImageFormat, Rgb, RgbImage};
use plotters::style::RGBColor;

use crate::error::{PlotError, PlotResult};

/// Output format, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
    Tiff,
    Svg,
}

impl OutputFormat {
    /// Pick the format for `path` from its extension (case-insensitive)
    ///
    /// # Errors
    ///
    /// [`PlotError::UnsupportedFormat`] if the extension is missing or unknown.
    pub fn from_path(path: &Path) -> PlotResult<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "bmp" => Ok(OutputFormat::Bmp),
            "gif" => Ok(OutputFormat::Gif),
            "tif" | "tiff" => Ok(OutputFormat::Tiff),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(PlotError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Encoder for raster formats, `None` for SVG
    pub fn image_format(self) -> Option<ImageFormat> {
        match self {
            OutputFormat::Png => Some(ImageFormat::Png),
            OutputFormat::Jpeg => Some(ImageFormat::Jpeg),
            OutputFormat::Bmp => Some(ImageFormat::Bmp),
            OutputFormat::Gif => Some(ImageFormat::Gif),
            OutputFormat::Tiff => Some(ImageFormat::Tiff),
            OutputFormat::Svg => None,
        }
    }
}

/// Bounding box `(x, y, width, height)` of pixels that differ from `background`
///
/// `None` when the image is blank.
pub fn content_bounds(image: &RgbImage, background: RGBColor) -> Option<(u32, u32, u32, u32)> {
    let bg = Rgb([background.0, background.1, background.2]);
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if *pixel == bg {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    bounds.map(|(x0, y0, x1, y1)| (x0, y0, x1 - x0 + 1, y1 - y0 + 1))
}

/// Crop `image` to its content plus `pad` pixels on every side
///
/// A blank image is returned unchanged.
pub fn crop_to_content(image: &RgbImage, background: RGBColor, pad: u32) -> RgbImage {
    let Some((x, y, w, h)) = content_bounds(image, background) else {
        return image.clone();
    };

    let x0 = x.saturating_sub(pad);
    let y0 = y.saturating_sub(pad);
    let x1 = (x + w + pad).min(image.width());
    let y1 = (y + h + pad).min(image.height());

    imageops::crop_imm(image, x0, y0, x1 - x0, y1 - y0).to_image()
}

/// Encode `image` to `path`
///
/// # Errors
///
/// - [`PlotError::Io`] if the file cannot be created or flushed
/// - [`PlotError::Encode`] if encoding fails
pub fn write_raster(path: &Path, image: RgbImage, format: ImageFormat) -> PlotResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    DynamicImage::ImageRgb8(image).write_to(&mut writer, format)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::style::WHITE;

    fn blank(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb([255, 255, 255]))
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a.png")).unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("a.JPG")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::from_path(Path::new("a.tiff")).unwrap(), OutputFormat::Tiff);
        assert_eq!(OutputFormat::from_path(Path::new("a.gif")).unwrap(), OutputFormat::Gif);
        assert_eq!(OutputFormat::from_path(Path::new("dir/a.svg")).unwrap(), OutputFormat::Svg);
    }

    #[test]
    fn test_format_unknown_or_missing() {
        assert!(matches!(
            OutputFormat::from_path(Path::new("plot.pdf")),
            Err(PlotError::UnsupportedFormat(_))
        ));
        assert!(OutputFormat::from_path(Path::new("plot")).is_err());
    }

    #[test]
    fn test_svg_has_no_raster_encoder() {
        assert_eq!(OutputFormat::Svg.image_format(), None);
        assert_eq!(OutputFormat::Png.image_format(), Some(ImageFormat::Png));
    }

    #[test]
    fn test_content_bounds() {
        let mut img = blank(20, 10);
        img.put_pixel(3, 2, Rgb([0, 0, 0]));
        img.put_pixel(12, 7, Rgb([10, 20, 30]));
        assert_eq!(content_bounds(&img, WHITE), Some((3, 2, 10, 6)));
    }

    #[test]
    fn test_content_bounds_blank() {
        assert_eq!(content_bounds(&blank(5, 5), WHITE), None);
    }

    #[test]
    fn test_crop_keeps_padding_within_image() {
        let mut img = blank(100, 50);
        img.put_pixel(50, 25, Rgb([0, 0, 0]));
        let cropped = crop_to_content(&img, WHITE, 10);
        assert_eq!(cropped.dimensions(), (21, 21));

        img.put_pixel(0, 0, Rgb([0, 0, 0]));
        let cropped = crop_to_content(&img, WHITE, 10);
        assert_eq!(cropped.dimensions(), (61, 36));
    }

    #[test]
    fn test_crop_blank_is_unchanged() {
        let img = blank(8, 4);
        assert_eq!(crop_to_content(&img, WHITE, 2).dimensions(), (8, 4));
    }

    #[test]
    fn test_write_raster_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        write_raster(&path, blank(4, 4), ImageFormat::Png).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_write_raster_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("pixel.png");
        let err = write_raster(&path, blank(4, 4), ImageFormat::Png).unwrap_err();
        assert!(matches!(err, PlotError::Io(_)));
    }
}
