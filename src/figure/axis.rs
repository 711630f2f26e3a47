//! Axis naming, limits and direction
//!
//! Plotters always draws ranges in increasing order, so an inverted axis is
//! drawn by negating its coordinates: the value `v` is placed at `-v` on a
//! range `-upper..-lower`, and tick labels negate back before formatting.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Fraction of the data span added on each side when autoscaling
const AUTOSCALE_MARGIN: f64 = 0.05;

/// One of the two chart axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisName {
    X,
    Y,
}

impl AxisName {
    /// Parse every character of `s` as an axis name (`"xy"` → `[X, Y]`)
    ///
    /// # Errors
    ///
    /// [`PlotError::UnknownAxis`] for any character other than `x` or `y`.
    pub fn parse_list(s: &str) -> PlotResult<Vec<AxisName>> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| c.to_string().parse())
            .collect()
    }
}

impl FromStr for AxisName {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(AxisName::X),
            "y" | "Y" => Ok(AxisName::Y),
            other => Err(PlotError::UnknownAxis(other.to_string())),
        }
    }
}

impl fmt::Display for AxisName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisName::X => f.write_str("x"),
            AxisName::Y => f.write_str("y"),
        }
    }
}

/// Direction in which values grow along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDirection {
    /// Left to right, or bottom to top
    Increasing,
    /// Right to left, or top to bottom
    Decreasing,
}

/// Resolved extent and direction of one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisState {
    /// Smallest visible value
    pub lower: f64,
    /// Largest visible value
    pub upper: f64,
    /// Whether values decrease along the drawing direction
    pub inverted: bool,
}

impl AxisState {
    pub fn direction(&self) -> AxisDirection {
        if self.inverted {
            AxisDirection::Decreasing
        } else {
            AxisDirection::Increasing
        }
    }

    /// Range handed to plotters
    pub(crate) fn plot_range(&self) -> Range<f64> {
        if self.inverted {
            -self.upper..-self.lower
        } else {
            self.lower..self.upper
        }
    }

    /// Data value → drawing coordinate
    pub(crate) fn to_plot(&self, value: f64) -> f64 {
        if self.inverted {
            -value
        } else {
            value
        }
    }

    /// Drawing coordinate → data value
    pub(crate) fn from_plot(&self, coord: f64) -> f64 {
        self.to_plot(coord)
    }
}

/// Largest magnitude an axis bound may take
///
/// Plotters derives tick steps from the axis span, which must stay finite.
/// Bounds up to `f64::MAX / 8` leave room for padding and negation.
pub const MAX_AXIS_MAGNITUDE: f64 = f64::MAX / 8.0;

/// Check user-supplied limits
///
/// `(lower, upper)` with `lower > upper` is accepted and means "draw this axis
/// reversed". Equal bounds are accepted too; they are widened by
/// [`limits_range`] when the axis is resolved.
///
/// # Errors
///
/// [`PlotError::InvalidAxisLimits`] if either bound is not finite or exceeds
/// [`MAX_AXIS_MAGNITUDE`].
pub fn validate_limits(axis: AxisName, limits: (f64, f64)) -> PlotResult<(f64, f64)> {
    let (lower, upper) = limits;
    let drawable = |v: f64| v.is_finite() && v.abs() <= MAX_AXIS_MAGNITUDE;
    if !drawable(lower) || !drawable(upper) {
        return Err(PlotError::InvalidAxisLimits { axis, lower, upper });
    }
    Ok(limits)
}

/// Visible `(lower, upper)` for validated limits, in increasing order
///
/// Equal limits are widened the same way as a single data value.
pub fn limits_range((a, b): (f64, f64)) -> (f64, f64) {
    if a == b {
        widen_point(a)
    } else {
        (a.min(b), a.max(b))
    }
}

/// Pad a data extent for display
///
/// - no data → `0..1`
/// - a single value `v` → `v ± 5 % of |v|`, or `± 0.5` around zero
/// - otherwise the extent grows by 5 % of its span on each side
///
/// Data beyond [`MAX_AXIS_MAGNITUDE`] is clamped first, so the result always
/// has a finite span.
pub fn autoscale(bounds: Option<(f64, f64)>) -> (f64, f64) {
    let clamp = |v: f64| v.clamp(-MAX_AXIS_MAGNITUDE, MAX_AXIS_MAGNITUDE);
    match bounds {
        None => (0.0, 1.0),
        Some((lo, hi)) => {
            let (lo, hi) = (clamp(lo), clamp(hi));
            if lo == hi {
                widen_point(lo)
            } else {
                let pad = hi * AUTOSCALE_MARGIN - lo * AUTOSCALE_MARGIN;
                (lo - pad, hi + pad)
            }
        }
    }
}

fn widen_point(v: f64) -> (f64, f64) {
    let pad = if v == 0.0 { 0.5 } else { v.abs() * AUTOSCALE_MARGIN };
    (v - pad, v + pad)
}

/// Merge two optional extents
pub(crate) fn union_bounds(a: Option<(f64, f64)>, b: Option<(f64, f64)>) -> Option<(f64, f64)> {
    match (a, b) {
        (Some((alo, ahi)), Some((blo, bhi))) => Some((alo.min(blo), ahi.max(bhi))),
        (a, None) => a,
        (None, b) => b,
    }
}
