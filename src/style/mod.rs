//! Style settings applied to a figure before anything is drawn
//!
//! - **palette**: the categorical colour cycle used for series
//! - [`FigureStyle`]: canvas size, resolution, fonts and stroke widths
//!
//! Sizes that a user would think of in typographic points (font sizes, line
//! widths, tick padding) are stored in points and converted to pixels with the
//! figure's DPI, so a larger DPI scales the whole chart uniformly.

pub mod palette;

pub use palette::{palette_color, PALETTE, PALETTE_SIZE};

use plotters::style::{RGBColor, WHITE};

/// Points per inch
const POINTS_PER_INCH: f64 = 72.0;

/// Style settings for one figure
///
/// The defaults describe a large, dense figure: 24 × 18 inches at 100 DPI
/// (2400 × 1800 px), 30 pt text and 5 pt data lines.
///
/// # Example
///
/// ```rust
/// use plotkit::style::FigureStyle;
///
/// let style = FigureStyle::default().with_size(1200, 900).with_line_width(2.0);
/// assert_eq!(style.width, 1200);
/// assert_eq!(style.line_width_px(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    /// Canvas width in pixels (default: 2400)
    pub width: u32,

    /// Canvas height in pixels (default: 1800)
    pub height: u32,

    /// Resolution used to convert points to pixels (default: 100)
    pub dpi: f64,

    /// Font family for all text (default: "sans-serif")
    pub font_family: String,

    /// Base font size in points (default: 30)
    pub font_size: f64,

    /// Legend font size in points (default: 25)
    pub legend_font_size: f64,

    /// Data line width in points (default: 5)
    pub line_width: f64,

    /// Stroke width of legend glyphs in points, independent of the data width (default: 2.5)
    pub legend_line_width: f64,

    /// Distance between tick marks and tick labels in points (default: 7)
    pub tick_pad: f64,

    /// Padding kept around the content when cropping a saved image, in inches (default: 0.1)
    pub crop_pad: f64,

    /// Canvas background (default: WHITE)
    pub background: RGBColor,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            width: 2400,
            height: 1800,
            dpi: 100.0,
            font_family: "sans-serif".to_string(),
            font_size: 30.0,
            legend_font_size: 25.0,
            line_width: 5.0,
            legend_line_width: 2.5,
            tick_pad: 7.0,
            crop_pad: 0.1,
            background: WHITE,
        }
    }
}

impl FigureStyle {
    /// Builder pattern: set canvas size in pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder pattern: set data line width in points
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    /// Builder pattern: set base font size in points
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Convert a length in points to whole pixels (at least 1)
    pub fn pt_to_px(&self, points: f64) -> u32 {
        ((points * self.dpi / POINTS_PER_INCH).round() as u32).max(1)
    }

    pub fn line_width_px(&self) -> u32 {
        self.pt_to_px(self.line_width)
    }

    pub fn legend_line_width_px(&self) -> u32 {
        self.pt_to_px(self.legend_line_width)
    }

    pub fn font_px(&self) -> u32 {
        self.pt_to_px(self.font_size)
    }

    /// Title is drawn at 1.2 × the base size
    pub fn title_font_px(&self) -> u32 {
        self.pt_to_px(self.font_size * 1.2)
    }

    pub fn legend_font_px(&self) -> u32 {
        self.pt_to_px(self.legend_font_size)
    }

    pub fn tick_pad_px(&self) -> u32 {
        self.pt_to_px(self.tick_pad)
    }

    /// Crop padding in pixels
    pub fn crop_pad_px(&self) -> u32 {
        (self.crop_pad * self.dpi).round().max(0.0) as u32
    }

    /// Marker radius in pixels for a scatter size given as an area in pt²
    pub fn marker_radius_px(&self, area: f64) -> u32 {
        self.pt_to_px(area.max(0.0).sqrt() / 2.0)
    }
}
