//! Options forwarded to individual render strategies
//!
//! These are the "extra" knobs that only some plot kinds understand: marker
//! size and shape for `points`, the origin of the segments for `vlines`.
//! `lines` ignores all of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::Series;
use crate::error::{PlotError, PlotResult};

/// Marker drawn at each point of a `points` plot
///
/// Parses from the single-character codes `x`, `+`, `o`, `s` and `^`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    /// Diagonal cross (`x`)
    #[default]
    Cross,
    /// Upright cross (`+`)
    Plus,
    /// Filled circle (`o`)
    Circle,
    /// Filled square (`s`)
    Square,
    /// Filled upward triangle (`^`)
    Triangle,
}

impl MarkerShape {
    /// The single-character code for this marker
    pub fn code(self) -> char {
        match self {
            MarkerShape::Cross => 'x',
            MarkerShape::Plus => '+',
            MarkerShape::Circle => 'o',
            MarkerShape::Square => 's',
            MarkerShape::Triangle => '^',
        }
    }

    /// Whether the marker is drawn with strokes only
    pub fn is_line_marker(self) -> bool {
        matches!(self, MarkerShape::Cross | MarkerShape::Plus)
    }
}

impl FromStr for MarkerShape {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" => Ok(MarkerShape::Cross),
            "+" => Ok(MarkerShape::Plus),
            "o" => Ok(MarkerShape::Circle),
            "s" => Ok(MarkerShape::Square),
            "^" => Ok(MarkerShape::Triangle),
            other => Err(PlotError::UnknownMarker(other.to_string())),
        }
    }
}

impl fmt::Display for MarkerShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Where vertical lines start
///
/// Either one value shared by every segment, or one value per point.
/// Serialises untagged, so JSON accepts `0` as well as `[0, 1, 2]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VLineOrigin {
    Constant(f64),
    PerPoint(Vec<f64>),
}

impl Default for VLineOrigin {
    fn default() -> Self {
        VLineOrigin::Constant(0.0)
    }
}

impl From<f64> for VLineOrigin {
    fn from(value: f64) -> Self {
        VLineOrigin::Constant(value)
    }
}

impl From<Vec<f64>> for VLineOrigin {
    fn from(values: Vec<f64>) -> Self {
        VLineOrigin::PerPoint(values)
    }
}

impl VLineOrigin {
    /// Origins for a series of `n` points
    pub fn resolve(&self, n: usize) -> Vec<f64> {
        match self {
            VLineOrigin::Constant(value) => vec![*value; n],
            VLineOrigin::PerPoint(values) => values.clone(),
        }
    }

    /// Finite min/max over the origin values
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            VLineOrigin::Constant(value) if value.is_finite() => Some((*value, *value)),
            VLineOrigin::Constant(_) => None,
            VLineOrigin::PerPoint(values) => crate::data::series::finite_bounds(values),
        }
    }
}

/// Keyword options forwarded to the render strategies
///
/// # Fields
///
/// - `marker_size`: scatter marker area in pt² (default: 300)
/// - `marker`: scatter marker shape (default: `x`)
/// - `origin`: start of vertical lines (default: 0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub marker_size: f64,
    pub marker: MarkerShape,
    pub origin: VLineOrigin,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            marker_size: 300.0,
            marker: MarkerShape::Cross,
            origin: VLineOrigin::default(),
        }
    }
}

impl RenderOptions {
    /// Check a per-point origin against every series it will be applied to
    ///
    /// # Errors
    ///
    /// [`PlotError::InputShape`] for the first series whose length differs from
    /// the origin list (`y_len` carries the origin count).
    pub fn validate_for(&self, series: &[Series]) -> PlotResult<()> {
        if let VLineOrigin::PerPoint(origins) = &self.origin {
            if let Some(index) = series.iter().position(|s| s.x.len() != origins.len()) {
                return Err(PlotError::InputShape {
                    index,
                    x_len: series[index].x.len(),
                    y_len: origins.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_scatter_conventions() {
        let options = RenderOptions::default();
        assert_eq!(options.marker_size, 300.0);
        assert_eq!(options.marker, MarkerShape::Cross);
        assert_eq!(options.origin, VLineOrigin::Constant(0.0));
    }

    #[test]
    fn test_marker_codes_round_trip() {
        for marker in [
            MarkerShape::Cross,
            MarkerShape::Plus,
            MarkerShape::Circle,
            MarkerShape::Square,
            MarkerShape::Triangle,
        ] {
            let parsed: MarkerShape = marker.to_string().parse().unwrap();
            assert_eq!(parsed, marker);
        }
    }

    #[test]
    fn test_unknown_marker() {
        let err = "*".parse::<MarkerShape>().unwrap_err();
        assert!(matches!(err, PlotError::UnknownMarker(code) if code == "*"));
    }

    #[test]
    fn test_origin_resolve() {
        assert_eq!(VLineOrigin::Constant(2.0).resolve(3), vec![2.0, 2.0, 2.0]);
        assert_eq!(VLineOrigin::from(vec![1.0, 2.0]).resolve(2), vec![1.0, 2.0]);
    }

    #[test]
    fn test_origin_bounds() {
        assert_eq!(VLineOrigin::Constant(-1.0).bounds(), Some((-1.0, -1.0)));
        assert_eq!(VLineOrigin::from(vec![3.0, -2.0]).bounds(), Some((-2.0, 3.0)));
        assert_eq!(VLineOrigin::Constant(f64::NAN).bounds(), None);
    }

    #[test]
    fn test_validate_per_point_origin_length() {
        let options = RenderOptions {
            origin: VLineOrigin::PerPoint(vec![0.0, 0.0]),
            ..Default::default()
        };
        let ok = Series::from_y(vec![1.0, 2.0]);
        let short = Series::from_y(vec![1.0]);

        assert!(options.validate_for(&[ok.clone()]).is_ok());
        let err = options.validate_for(&[ok, short]).unwrap_err();
        assert!(matches!(err, PlotError::InputShape { index: 1, x_len: 1, y_len: 2 }));
    }

    #[test]
    fn test_origin_deserializes_untagged() {
        let scalar: VLineOrigin = serde_json::from_str("1.5").unwrap();
        let list: VLineOrigin = serde_json::from_str("[0.0, 1.0]").unwrap();
        assert_eq!(scalar, VLineOrigin::Constant(1.5));
        assert_eq!(list, VLineOrigin::PerPoint(vec![0.0, 1.0]));
    }
}
