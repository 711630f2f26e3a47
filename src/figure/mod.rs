//! One in-progress chart
//!
//! A [`Figure`] owns everything a chart needs: style settings, traces, axis
//! limits and directions, labels, legend and tick formatters. Nothing is global;
//! the figure is built step by step, rendered on demand and released when it is
//! dropped.
//!
//! # Organization
//!
//! - **axis**: axis names, limits, direction and autoscaling
//! - **legend**: the legend strip drawn outside the axes
//! - **export**: output format selection, tight cropping and encoding
//!
//! # Example
//!
//! ```rust,ignore
//! use plotkit::figure::{AxisName, Figure};
//! use plotkit::render::{PlotKind, RenderOptions};
//! use plotkit::style::{palette_color, FigureStyle};
//! use plotkit::data::Series;
//!
//! let mut figure = Figure::new(FigureStyle::default());
//! let series = Series::from_y(vec![1.0, 4.0, 9.0]);
//! figure.plot(PlotKind::Lines, &series, palette_color(0), Some("squares"), &RenderOptions::default())?;
//! figure.set_title("Squares");
//! figure.show_legend();
//! figure.invert_axis(AxisName::Y);
//! figure.save("squares.png")?;
//! ```

pub mod axis;
pub mod export;
pub mod legend;

pub use axis::{AxisDirection, AxisName, AxisState};
pub use export::OutputFormat;
pub use legend::LegendEntry;

use std::fmt;
use std::path::Path;

use image::RgbImage;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{debug, trace};

use crate::data::Series;
use crate::error::{PlotError, PlotResult};
use crate::format::{default_tick_label, TickFormatter};
use crate::render::{PlotKind, RenderOptions, TraceStyle};
use crate::style::FigureStyle;

/// One drawn series with its resolved colour and label
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    kind: PlotKind,
    series: Series,
    color: RGBColor,
    label: Option<String>,
    options: RenderOptions,
}

impl Trace {
    pub fn kind(&self) -> PlotKind {
        self.kind
    }

    pub fn color(&self) -> RGBColor {
        self.color
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Number of points in the trace
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Extent of the y values, including vline origins
    fn y_bounds(&self) -> Option<(f64, f64)> {
        let data = self.series.y_bounds();
        match self.kind {
            PlotKind::VLines => axis::union_bounds(data, self.options.origin.bounds()),
            _ => data,
        }
    }
}

/// A chart under construction
///
/// Every setter mirrors one step of building a chart. Rendering happens only in
/// [`Figure::render_rgb`], [`Figure::render_svg`] and [`Figure::save`], so a
/// figure can be rendered any number of times.
pub struct Figure {
    style: FigureStyle,
    traces: Vec<Trace>,
    title: String,
    x_label: String,
    y_label: String,
    x_limits: Option<(f64, f64)>,
    y_limits: Option<(f64, f64)>,
    x_inverted: bool,
    y_inverted: bool,
    grid: bool,
    legend: bool,
    x_formatter: Option<TickFormatter>,
    y_formatter: Option<TickFormatter>,
}

impl Figure {
    /// Create an empty figure; style settings apply to everything drawn later
    pub fn new(style: FigureStyle) -> Self {
        debug!(
            width = style.width,
            height = style.height,
            line_width = style.line_width,
            "creating figure"
        );
        Self {
            style,
            traces: Vec::new(),
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            x_limits: None,
            y_limits: None,
            x_inverted: false,
            y_inverted: false,
            grid: false,
            legend: false,
            x_formatter: None,
            y_formatter: None,
        }
    }

    pub fn style(&self) -> &FigureStyle {
        &self.style
    }

    /// Pixel size of the full canvas
    pub fn size(&self) -> (u32, u32) {
        (self.style.width, self.style.height)
    }

    // =============================================================================================
    // Building
    // =============================================================================================

    /// Add one series, drawn with `kind`
    ///
    /// # Errors
    ///
    /// [`PlotError::InputShape`] if the series (or a per-point vline origin) has
    /// mismatched lengths. The error index is the position the trace would
    /// have taken.
    pub fn plot(
        &mut self,
        kind: PlotKind,
        series: &Series,
        color: RGBColor,
        label: Option<&str>,
        options: &RenderOptions,
    ) -> PlotResult<()> {
        let index = self.traces.len();
        if !series.is_well_formed() {
            return Err(PlotError::InputShape {
                index,
                x_len: series.x.len(),
                y_len: series.y.len(),
            });
        }
        if kind == PlotKind::VLines {
            options
                .validate_for(std::slice::from_ref(series))
                .map_err(|err| match err {
                    PlotError::InputShape { x_len, y_len, .. } => {
                        PlotError::InputShape { index, x_len, y_len }
                    }
                    other => other,
                })?;
        }

        trace!(index, kind = %kind, points = series.len(), label, "adding trace");
        self.traces.push(Trace {
            kind,
            series: series.clone(),
            color,
            label: label.map(str::to_string),
            options: options.clone(),
        });
        Ok(())
    }

    /// Fix the x range; `lower > upper` draws the axis reversed
    ///
    /// Equal bounds are widened around their value.
    ///
    /// # Errors
    ///
    /// [`PlotError::InvalidAxisLimits`] for non-finite or oversized bounds.
    pub fn set_xlim(&mut self, lower: f64, upper: f64) -> PlotResult<()> {
        self.x_limits = Some(axis::validate_limits(AxisName::X, (lower, upper))?);
        Ok(())
    }

    /// Fix the y range; `lower > upper` draws the axis reversed
    ///
    /// Equal bounds are widened around their value.
    ///
    /// # Errors
    ///
    /// [`PlotError::InvalidAxisLimits`] for non-finite or oversized bounds.
    pub fn set_ylim(&mut self, lower: f64, upper: f64) -> PlotResult<()> {
        self.y_limits = Some(axis::validate_limits(AxisName::Y, (lower, upper))?);
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_x_label(&mut self, label: impl Into<String>) {
        self.x_label = label.into();
    }

    pub fn set_y_label(&mut self, label: impl Into<String>) {
        self.y_label = label.into();
    }

    pub fn set_grid(&mut self, grid: bool) {
        self.grid = grid;
    }

    /// Draw a legend for every labelled trace
    pub fn show_legend(&mut self) {
        self.legend = true;
    }

    /// Flip the direction of `axis`; calling twice restores it
    pub fn invert_axis(&mut self, axis: AxisName) {
        match axis {
            AxisName::X => self.x_inverted = !self.x_inverted,
            AxisName::Y => self.y_inverted = !self.y_inverted,
        }
        debug!(%axis, "inverted axis");
    }

    /// Install the tick formatter for `axis`
    pub fn set_major_formatter(&mut self, axis: AxisName, formatter: TickFormatter) {
        match axis {
            AxisName::X => self.x_formatter = Some(formatter),
            AxisName::Y => self.y_formatter = Some(formatter),
        }
    }

    // =============================================================================================
    // Inspection
    // =============================================================================================

    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn grid(&self) -> bool {
        self.grid
    }

    pub fn has_legend(&self) -> bool {
        self.legend
    }

    /// Legend rows, in trace order; empty when no legend is shown
    pub fn legend_entries(&self) -> Vec<LegendEntry<'_>> {
        if !self.legend {
            return Vec::new();
        }
        self.traces
            .iter()
            .filter_map(|t| {
                t.label().map(|label| LegendEntry {
                    label,
                    color: t.color,
                    kind: t.kind,
                    marker: t.options.marker,
                })
            })
            .collect()
    }

    /// Resolved x extent and direction
    pub fn x_axis(&self) -> AxisState {
        let data = self
            .traces
            .iter()
            .map(|t| t.series.x_bounds())
            .fold(None, axis::union_bounds);
        resolve_axis(self.x_limits, data, self.x_inverted)
    }

    /// Resolved y extent and direction
    pub fn y_axis(&self) -> AxisState {
        let data = self
            .traces
            .iter()
            .map(Trace::y_bounds)
            .fold(None, axis::union_bounds);
        resolve_axis(self.y_limits, data, self.y_inverted)
    }

    /// Label drawn for the tick at `value` on `axis`
    pub fn tick_label(&self, axis: AxisName, value: f64) -> String {
        let formatter = match axis {
            AxisName::X => self.x_formatter.as_ref(),
            AxisName::Y => self.y_formatter.as_ref(),
        };
        match formatter {
            Some(f) => f(value, None),
            None => default_tick_label(value),
        }
    }

    // =============================================================================================
    // Rendering
    // =============================================================================================

    /// Render the full canvas into an RGB image
    ///
    /// # Errors
    ///
    /// [`PlotError::Backend`] if plotters fails to draw.
    pub fn render_rgb(&self) -> PlotResult<RgbImage> {
        let (width, height) = self.size();
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            self.render_on(root)?;
        }
        RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| PlotError::Backend("pixel buffer does not match figure size".into()))
    }

    /// Render the full canvas as an SVG document
    ///
    /// # Errors
    ///
    /// [`PlotError::Backend`] if plotters fails to draw.
    pub fn render_svg(&self) -> PlotResult<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size()).into_drawing_area();
            self.render_on(root)?;
        }
        Ok(svg)
    }

    /// Write the figure to `path`; the format follows the extension
    ///
    /// Raster output is cropped to its content bounding box. The file is
    /// overwritten if it exists.
    ///
    /// # Errors
    ///
    /// - [`PlotError::UnsupportedFormat`] for an unknown extension
    /// - [`PlotError::Io`] if the file cannot be written
    /// - [`PlotError::Encode`] / [`PlotError::Backend`] on rendering failures
    pub fn save(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let path = path.as_ref();
        let format = OutputFormat::from_path(path)?;
        debug!(path = %path.display(), ?format, "saving figure");

        match format.image_format() {
            Some(image_format) => {
                let full = self.render_rgb()?;
                let cropped = export::crop_to_content(
                    &full,
                    self.style.background,
                    self.style.crop_pad_px(),
                );
                trace!(
                    width = cropped.width(),
                    height = cropped.height(),
                    "cropped to content"
                );
                export::write_raster(path, cropped, image_format)
            }
            None => {
                let svg = self.render_svg()?;
                std::fs::write(path, svg)?;
                Ok(())
            }
        }
    }

    fn render_on<DB: DrawingBackend>(&self, root: DrawingArea<DB, Shift>) -> PlotResult<()> {
        let style = &self.style;
        root.fill(&style.background)?;

        let entries = self.legend_entries();
        let (plot_area, legend_area) = if entries.is_empty() {
            (root.clone(), None)
        } else {
            let legend_width = legend::legend_width(&root, &entries, style)?;
            let (plot, legend) = root.split_horizontally(style.width.saturating_sub(legend_width));
            (plot, Some(legend))
        };

        let x_axis = self.x_axis();
        let y_axis = self.y_axis();

        let font_px = style.font_px();
        let margin = font_px / 2;
        let family = style.font_family.as_str();

        // Tick labels plus, when present, the axis description
        let x_rows = if self.x_label.is_empty() { 2 } else { 3 };
        let y_cols = if self.y_label.is_empty() { 4 } else { 5 };

        let mut builder = ChartBuilder::on(&plot_area);
        builder
            .margin(margin)
            .x_label_area_size(font_px * x_rows + style.tick_pad_px())
            .y_label_area_size(font_px * y_cols + style.tick_pad_px());
        if !self.title.is_empty() {
            builder.caption(&self.title, (family, style.title_font_px()).into_font());
        }
        let mut chart = builder.build_cartesian_2d(x_axis.plot_range(), y_axis.plot_range())?;

        let x_fmt = |v: &f64| self.tick_label(AxisName::X, x_axis.from_plot(*v));
        let y_fmt = |v: &f64| self.tick_label(AxisName::Y, y_axis.from_plot(*v));
        {
            let label_font = (family, font_px).into_font();
            let mut mesh = chart.configure_mesh();
            mesh.x_label_formatter(&x_fmt)
                .y_label_formatter(&y_fmt)
                .label_style(label_font.clone())
                .axis_desc_style(label_font)
                .set_all_tick_mark_size(style.tick_pad_px());
            if !self.x_label.is_empty() {
                mesh.x_desc(self.x_label.as_str());
            }
            if !self.y_label.is_empty() {
                mesh.y_desc(self.y_label.as_str());
            }
            if !self.grid {
                mesh.disable_mesh();
            }
            mesh.draw()?;
        }

        let stroke_width = style.line_width_px();
        for (index, trace) in self.traces.iter().enumerate() {
            let x: Vec<f64> = trace.series.x.iter().map(|v| x_axis.to_plot(*v)).collect();
            let y: Vec<f64> = trace.series.y.iter().map(|v| y_axis.to_plot(*v)).collect();
            let origins: Vec<f64> = match trace.kind {
                PlotKind::VLines => trace
                    .options
                    .origin
                    .resolve(trace.series.x.len())
                    .into_iter()
                    .map(|o| y_axis.to_plot(o))
                    .collect(),
                _ => Vec::new(),
            };
            let trace_style = TraceStyle {
                color: trace.color,
                stroke_width,
                marker: trace.options.marker,
                marker_radius: style.marker_radius_px(trace.options.marker_size),
            };
            trace.kind.draw(&mut chart, index, &x, &y, &origins, &trace_style)?;
        }

        if let Some(area) = legend_area {
            let top = if self.title.is_empty() {
                margin
            } else {
                margin + style.title_font_px()
            };
            legend::draw_legend(&area, &entries, style, top as i32)?;
        }

        root.present()?;
        Ok(())
    }
}

impl fmt::Debug for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Figure")
            .field("size", &self.size())
            .field("traces", &self.traces.len())
            .field("title", &self.title)
            .field("x_axis", &self.x_axis())
            .field("y_axis", &self.y_axis())
            .field("grid", &self.grid)
            .field("legend", &self.legend)
            .finish_non_exhaustive()
    }
}

/// Combine explicit limits (or the autoscaled data extent) with the invert flag
fn resolve_axis(limits: Option<(f64, f64)>, data: Option<(f64, f64)>, inverted: bool) -> AxisState {
    match limits {
        Some((a, b)) => {
            let (lower, upper) = axis::limits_range((a, b));
            AxisState {
                lower,
                upper,
                inverted: (a > b) != inverted,
            }
        }
        None => {
            let (lower, upper) = axis::autoscale(data);
            AxisState { lower, upper, inverted }
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
