//! The `Series` type and collection validation

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// One (x, y) trace
///
/// Fields are public so a series can be assembled directly; in that case the
/// lengths are checked by [`validate_series`] before anything is drawn.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    /// x values, in drawing order
    pub x: Vec<f64>,

    /// y values, one per x value
    pub y: Vec<f64>,
}

impl Series {
    /// Create a series from parallel x and y sequences
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InputShape`] (with index 0) if the lengths differ.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> PlotResult<Self> {
        if x.len() != y.len() {
            return Err(PlotError::InputShape {
                index: 0,
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Create a series from (x, y) pairs
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let (x, y) = points.iter().copied().unzip();
        Self { x, y }
    }

    /// Create a series from y values, using `0, 1, 2, ...` as x
    pub fn from_y(y: Vec<f64>) -> Self {
        let x = (0..y.len()).map(|i| i as f64).collect();
        Self { x, y }
    }

    /// Number of points (the shorter side if the series is malformed)
    pub fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether x and y have the same length
    pub fn is_well_formed(&self) -> bool {
        self.x.len() == self.y.len()
    }

    /// Iterate over (x, y) pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Finite min/max of the x values, `None` if there are none
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        finite_bounds(&self.x)
    }

    /// Finite min/max of the y values, `None` if there are none
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        finite_bounds(&self.y)
    }
}

impl From<Vec<(f64, f64)>> for Series {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::from_points(&points)
    }
}

/// Check that a series collection can be plotted
///
/// # Errors
///
/// - [`PlotError::EmptySeriesCollection`] if `series` is empty
/// - [`PlotError::InputShape`] for the first series whose x and y lengths differ
pub fn validate_series(series: &[Series]) -> PlotResult<()> {
    if series.is_empty() {
        return Err(PlotError::EmptySeriesCollection);
    }

    match series.iter().position(|s| !s.is_well_formed()) {
        Some(index) => Err(PlotError::InputShape {
            index,
            x_len: series[index].x.len(),
            y_len: series[index].y.len(),
        }),
        None => Ok(()),
    }
}

/// Finite min/max of a slice
pub(crate) fn finite_bounds(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = Series::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            PlotError::InputShape { index: 0, x_len: 2, y_len: 1 }
        ));
    }

    #[test]
    fn test_from_points_splits_pairs() {
        let s = Series::from_points(&[(1.0, 10.0), (2.0, 20.0)]);
        assert_eq!(s.x, vec![1.0, 2.0]);
        assert_eq!(s.y, vec![10.0, 20.0]);
    }

    #[test]
    fn test_from_y_uses_index_as_x() {
        let s = Series::from_y(vec![5.0, 6.0, 7.0]);
        assert_eq!(s.x, vec![0.0, 1.0, 2.0]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_bounds_ignore_non_finite() {
        let s = Series::from_y(vec![3.0, f64::NAN, -1.0, f64::INFINITY]);
        assert_eq!(s.y_bounds(), Some((-1.0, 3.0)));
        assert_eq!(s.x_bounds(), Some((0.0, 3.0)));
    }

    #[test]
    fn test_bounds_empty() {
        let s = Series::default();
        assert!(s.is_empty());
        assert_eq!(s.x_bounds(), None);
    }

    #[test]
    fn test_validate_empty_collection() {
        assert!(matches!(
            validate_series(&[]),
            Err(PlotError::EmptySeriesCollection)
        ));
    }

    #[test]
    fn test_validate_reports_first_bad_index() {
        let good = Series::from_y(vec![1.0, 2.0]);
        let bad = Series { x: vec![1.0], y: vec![1.0, 2.0, 3.0] };
        let err = validate_series(&[good.clone(), good, bad]).unwrap_err();
        assert!(matches!(
            err,
            PlotError::InputShape { index: 2, x_len: 1, y_len: 3 }
        ));
    }
}
