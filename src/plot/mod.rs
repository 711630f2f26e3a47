//! Configuration-driven plotting
//!
//! [`plot_any`] turns a slice of [`Series`](crate::data::Series) and a
//! [`PlotConfig`] into a styled [`Figure`](crate::figure::Figure): one trace
//! per series, palette colours by position, optional legend, limits, axis
//! inversion, tick formatters and saving.

pub mod config;
pub mod orchestrator;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};
pub use orchestrator::plot_any;

pub use crate::figure::AxisName;
