//! plotkit: one-call charts on top of plotters
//!
//! A small convenience layer that turns a list of `(x, y)` series and a
//! [`PlotConfig`](plot::PlotConfig) into a styled chart: connected lines,
//! scatter markers or vertical lines, coloured from a fixed categorical
//! palette, with optional legend, limits, inverted axes, custom tick labels
//! and tightly cropped image output.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use plotkit::prelude::*;
//!
//! # fn main() -> Result<(), PlotError> {
//! let latencies = Series::from_points(&[
//!     (0.0, 12.0),
//!     (250_000.0, 18.0),
//!     (1_500_000.0, 25.0),
//! ]);
//!
//! let config = PlotConfig::timing("Request latency")
//!     .plotcase(PlotKind::Points)
//!     .y_label("Queue depth")
//!     .save(true)
//!     .savename("latency.png")
//!     .show(false);
//!
//! plot_any(&[latencies], &config)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`data`]: series and their validation
//! - [`style`]: palette and figure style
//! - [`format`]: tick formatters, including [`ps_time`](format::ps_time)
//! - [`render`]: the lines / points / vlines strategies
//! - [`figure`]: the figure builder, axes, legend and export
//! - [`plot`]: [`plot_any`](plot::plot_any) and its configuration
//! - [`telemetry`]: optional log subscriber

pub mod error;

pub mod data;
pub mod format;
pub mod style;

pub mod figure;
pub mod plot;
pub mod render;

pub mod telemetry;

pub use error::{PlotError, PlotResult};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use plotkit::prelude::*;
    //! ```
    pub use crate::data::Series;
    pub use crate::error::{PlotError, PlotResult};
    pub use crate::figure::{AxisName, Figure};
    pub use crate::format::{ps_time, tick_formatter, TickFormatter};
    pub use crate::plot::{plot_any, PlotConfig, NO_TITLE};
    pub use crate::render::{MarkerShape, PlotKind, RenderOptions, VLineOrigin};
    pub use crate::style::FigureStyle;
}
