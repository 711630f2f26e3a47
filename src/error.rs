//! Error types and result alias for plotting operations.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

use crate::figure::AxisName;

/// Convenience type alias for results that may contain a [`PlotError`]
pub type PlotResult<T> = Result<T, PlotError>;

/// Errors that can occur while building, rendering or saving a plot.
///
/// Validation errors (`InputShape`, `LabelCountMismatch`, `UnknownPlotKind`, ...)
/// are raised before any figure is created, so no partially drawn figure ever
/// reaches the caller.
#[derive(Error, Debug)]
pub enum PlotError {
    /// x and y sequences of one series have different lengths.
    ///
    /// Also raised when a per-point vline origin does not match its series.
    #[error("series {index}: x has {x_len} values but y has {y_len}")]
    InputShape {
        index: usize,
        x_len: usize,
        y_len: usize,
    },

    /// The number of labels differs from the number of series.
    #[error("got {labels} labels for {series} series")]
    LabelCountMismatch { labels: usize, series: usize },

    /// A plot kind tag other than `lines`, `points` or `vlines`.
    #[error("unknown plot kind '{0}' (expected lines, points or vlines)")]
    UnknownPlotKind(String),

    /// A marker code that does not map to a known marker shape.
    #[error("unknown marker '{0}' (expected one of x + o s ^)")]
    UnknownMarker(String),

    /// An axis name other than `x` or `y`.
    #[error("unknown axis '{0}' (expected x or y)")]
    UnknownAxis(String),

    /// The series collection is empty.
    #[error("at least one series is required")]
    EmptySeriesCollection,

    /// Axis limits that are not finite or too large to draw.
    #[error("invalid {axis} limits: ({lower}, {upper})")]
    InvalidAxisLimits {
        axis: AxisName,
        lower: f64,
        upper: f64,
    },

    /// The output path has no extension or an extension we cannot encode.
    #[error("unsupported output format '{0}'")]
    UnsupportedFormat(String),

    /// Failure reported by the plotters drawing backend.
    #[error("drawing backend error: {0}")]
    Backend(String),

    /// The output path could not be created or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Raster encoding failed.
    #[error("image encoding error: {0}")]
    Encode(#[from] image::ImageError),

    /// A JSON configuration could not be parsed.
    #[error("invalid plot configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl<E> From<DrawingAreaErrorKind<E>> for PlotError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Backend(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_shape_message_names_series() {
        let err = PlotError::InputShape {
            index: 3,
            x_len: 4,
            y_len: 5,
        };
        assert_eq!(err.to_string(), "series 3: x has 4 values but y has 5");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: PlotError = io.into();
        assert!(matches!(err, PlotError::Io(_)));
    }

    #[test]
    fn test_invalid_limits_message() {
        let err = PlotError::InvalidAxisLimits {
            axis: AxisName::Y,
            lower: 1.0,
            upper: 1.0,
        };
        assert_eq!(err.to_string(), "invalid y limits: (1, 1)");
    }
}
