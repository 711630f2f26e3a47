//! Options consumed by [`plot_any`](crate::plot::plot_any)
//!
//! Every field has a documented default, so a config is usually built from
//! `PlotConfig::default()` plus a few builder calls, or from one of the preset
//! constructors.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::PlotResult;
use crate::figure::AxisName;
use crate::format::{ps_time, tick_formatter, TickFormatter};
use crate::render::{MarkerShape, PlotKind, RenderOptions, VLineOrigin};
use crate::style::FigureStyle;

/// Configuration for one [`plot_any`](crate::plot::plot_any) call
///
/// # Fields
///
/// - `plotcase`: how each series is drawn
/// - `labels`: one legend label per series; `None` means no legend
/// - `title`, `x_label`, `y_label`: chart text, empty means not drawn
/// - `xlims`, `ylims`: explicit axis limits, autoscaled when `None`
/// - `show`: keep the figure and hand it back to the caller
/// - `save`: write the figure to `savename`
/// - `linewidth`: data line width in points
/// - `formatfuncx`, `formatfuncy`: tick formatters
/// - `invert`: axes whose direction is flipped, one toggle per entry
/// - `render`: options forwarded to the points and vlines strategies
///
/// Formatters and the figure style are not serialised.
///
/// # Example
///
/// ```rust
/// use plotkit::plot::{AxisName, PlotConfig};
/// use plotkit::render::PlotKind;
///
/// let config = PlotConfig::default()
///     .plotcase(PlotKind::Points)
///     .title("Scatter")
///     .labels(["a", "b"])
///     .invert([AxisName::Y])
///     .show(false);
///
/// assert_eq!(config.labels.as_ref().map(Vec::len), Some(2));
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Plot kind (default: Lines)
    pub plotcase: PlotKind,

    /// Legend labels, matched to series by position (default: None)
    pub labels: Option<Vec<String>>,

    /// Chart title (default: "")
    pub title: String,

    /// X-axis description (default: "")
    pub x_label: String,

    /// Y-axis description (default: "")
    pub y_label: String,

    /// X limits; `lower > upper` reverses the axis (default: None)
    pub xlims: Option<(f64, f64)>,

    /// Y limits; `lower > upper` reverses the axis (default: None)
    pub ylims: Option<(f64, f64)>,

    /// Return the figure to the caller (default: true)
    pub show: bool,

    /// Write the figure to `savename` (default: false)
    pub save: bool,

    /// Draw grid lines (default: false)
    pub grid: bool,

    /// Output path; its extension selects the format (default: "plot.png")
    pub savename: PathBuf,

    /// Data line width in points (default: 5)
    pub linewidth: f64,

    /// X tick formatter (default: None)
    #[serde(skip)]
    pub formatfuncx: Option<TickFormatter>,

    /// Y tick formatter (default: None)
    #[serde(skip)]
    pub formatfuncy: Option<TickFormatter>,

    /// Axes to invert (default: empty)
    pub invert: Vec<AxisName>,

    /// Options forwarded to the render strategies
    pub render: RenderOptions,

    /// Canvas, font and stroke settings; `linewidth` overrides its line width
    #[serde(skip)]
    pub style: FigureStyle,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            plotcase: PlotKind::Lines,
            labels: None,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            xlims: None,
            ylims: None,
            show: true,
            save: false,
            grid: false,
            savename: PathBuf::from("plot.png"),
            linewidth: 5.0,
            formatfuncx: None,
            formatfuncy: None,
            invert: Vec::new(),
            render: RenderOptions::default(),
            style: FigureStyle::default(),
        }
    }
}

impl fmt::Debug for PlotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotConfig")
            .field("plotcase", &self.plotcase)
            .field("labels", &self.labels)
            .field("title", &self.title)
            .field("x_label", &self.x_label)
            .field("y_label", &self.y_label)
            .field("xlims", &self.xlims)
            .field("ylims", &self.ylims)
            .field("show", &self.show)
            .field("save", &self.save)
            .field("grid", &self.grid)
            .field("savename", &self.savename)
            .field("linewidth", &self.linewidth)
            .field("formatfuncx", &self.formatfuncx.is_some())
            .field("formatfuncy", &self.formatfuncy.is_some())
            .field("invert", &self.invert)
            .field("render", &self.render)
            .finish_non_exhaustive()
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// No title: the preset's default title is used
///
/// ```rust
/// use plotkit::plot::{PlotConfig, NO_TITLE};
///
/// let config = PlotConfig::timing(NO_TITLE);
/// assert_eq!(config.title, "Timing");
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Preset for time axes measured in picoseconds
    ///
    /// Sets `x_label` to "Time", installs [`ps_time`] on the x axis and uses
    /// `title`, or "Timing" when none is given.
    pub fn timing(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.x_label = "Time".to_string();
        config.formatfuncx = Some(tick_formatter(ps_time));
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Timing".to_string());
        config
    }

    /// Parse a config from JSON; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// [`PlotError::Config`](crate::PlotError::Config) for malformed JSON or
    /// unknown enum tags.
    pub fn from_json(json: &str) -> PlotResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialise the config to pretty JSON; formatters and style are left out
    ///
    /// # Errors
    ///
    /// [`PlotError::Config`](crate::PlotError::Config) if serialisation fails.
    pub fn to_json(&self) -> PlotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Figure style with `linewidth` applied
    pub fn figure_style(&self) -> FigureStyle {
        self.style.clone().with_line_width(self.linewidth)
    }

    // Builder methods, named after the fields they set

    pub fn plotcase(mut self, kind: PlotKind) -> Self {
        self.plotcase = kind;
        self
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn xlims(mut self, lower: f64, upper: f64) -> Self {
        self.xlims = Some((lower, upper));
        self
    }

    pub fn ylims(mut self, lower: f64, upper: f64) -> Self {
        self.ylims = Some((lower, upper));
        self
    }

    pub fn show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }

    pub fn grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    pub fn savename(mut self, path: impl Into<PathBuf>) -> Self {
        self.savename = path.into();
        self
    }

    pub fn linewidth(mut self, points: f64) -> Self {
        self.linewidth = points;
        self
    }

    pub fn formatfuncx(mut self, formatter: TickFormatter) -> Self {
        self.formatfuncx = Some(formatter);
        self
    }

    pub fn formatfuncy(mut self, formatter: TickFormatter) -> Self {
        self.formatfuncy = Some(formatter);
        self
    }

    pub fn invert(mut self, axes: impl IntoIterator<Item = AxisName>) -> Self {
        self.invert = axes.into_iter().collect();
        self
    }

    pub fn marker_size(mut self, area: f64) -> Self {
        self.render.marker_size = area;
        self
    }

    pub fn marker(mut self, marker: MarkerShape) -> Self {
        self.render.marker = marker;
        self
    }

    pub fn origin(mut self, origin: impl Into<VLineOrigin>) -> Self {
        self.render.origin = origin.into();
        self
    }

    pub fn style(mut self, style: FigureStyle) -> Self {
        self.style = style;
        self
    }
}
