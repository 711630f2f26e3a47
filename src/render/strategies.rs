//! The three draw primitives
//!
//! Each strategy receives parallel x/y slices that are already expressed in
//! the chart's drawing coordinates (axis inversion has been applied by the
//! figure), plus a [`TraceStyle`]. Points with a non-finite coordinate are
//! skipped; a line is broken at such points instead of being drawn through
//! them.

use plotters::prelude::*;
use tracing::{trace, warn};

use super::options::MarkerShape;
use super::Axes;
use crate::error::PlotResult;

/// Resolved drawing style for one trace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceStyle {
    pub color: RGBColor,
    /// Stroke width in pixels
    pub stroke_width: u32,
    pub marker: MarkerShape,
    /// Marker radius in pixels
    pub marker_radius: u32,
}

impl TraceStyle {
    fn stroke(&self) -> ShapeStyle {
        ShapeStyle::from(&self.color).stroke_width(self.stroke_width)
    }
}

/// Draw a connected line through the (x, y) pairs
pub fn lines<DB: DrawingBackend>(
    axes: &mut Axes<'_, DB>,
    x: &[f64],
    y: &[f64],
    style: &TraceStyle,
) -> PlotResult<()> {
    let (runs, skipped) = finite_runs(x, y);
    report_skipped("lines", skipped);
    trace!(segments = runs.len(), "drawing lines");

    let stroke = style.stroke();
    for run in runs {
        axes.draw_series(LineSeries::new(run, stroke))?;
    }
    Ok(())
}

/// Draw one marker at each (x, y) pair
pub fn points<DB: DrawingBackend>(
    axes: &mut Axes<'_, DB>,
    x: &[f64],
    y: &[f64],
    style: &TraceStyle,
) -> PlotResult<()> {
    let coords: Vec<(f64, f64)> = finite_pairs(x, y).collect();
    report_skipped("points", x.len().min(y.len()) - coords.len());
    trace!(points = coords.len(), marker = %style.marker, "drawing points");

    let r = style.marker_radius;
    let ri = r as i32;
    let shape = marker_style(style);

    match style.marker {
        MarkerShape::Cross => {
            axes.draw_series(coords.iter().map(|c| Cross::new(*c, r, shape)))?;
        }
        MarkerShape::Plus => {
            axes.draw_series(coords.iter().map(|c| {
                EmptyElement::at(*c)
                    + PathElement::new(vec![(-ri, 0), (ri, 0)], shape)
                    + PathElement::new(vec![(0, -ri), (0, ri)], shape)
            }))?;
        }
        MarkerShape::Circle => {
            axes.draw_series(coords.iter().map(|c| Circle::new(*c, r, shape)))?;
        }
        MarkerShape::Square => {
            axes.draw_series(coords.iter().map(|c| {
                EmptyElement::at(*c) + Rectangle::new([(-ri, -ri), (ri, ri)], shape)
            }))?;
        }
        MarkerShape::Triangle => {
            axes.draw_series(coords.iter().map(|c| TriangleMarker::new(*c, r, shape)))?;
        }
    }
    Ok(())
}

/// Draw a vertical segment from `origins[i]` to `y[i]` at each `x[i]`
pub fn vlines<DB: DrawingBackend>(
    axes: &mut Axes<'_, DB>,
    x: &[f64],
    y: &[f64],
    origins: &[f64],
    style: &TraceStyle,
) -> PlotResult<()> {
    let segments: Vec<(f64, f64, f64)> = x
        .iter()
        .zip(y)
        .zip(origins)
        .map(|((x, y), o)| (*x, *o, *y))
        .filter(|(x, o, y)| x.is_finite() && o.is_finite() && y.is_finite())
        .collect();
    report_skipped("vlines", x.len().min(y.len()) - segments.len());
    trace!(segments = segments.len(), "drawing vlines");

    let stroke = style.stroke();
    axes.draw_series(
        segments
            .iter()
            .map(|(x, from, to)| PathElement::new(vec![(*x, *from), (*x, *to)], stroke)),
    )?;
    Ok(())
}

// =================================================================================================
// Helpers
// =================================================================================================

/// Stroked for line markers (`x`, `+`), filled for the rest
pub(crate) fn marker_style(style: &TraceStyle) -> ShapeStyle {
    if style.marker.is_line_marker() {
        style.stroke()
    } else {
        style.color.filled()
    }
}

fn finite_pairs<'a>(x: &'a [f64], y: &'a [f64]) -> impl Iterator<Item = (f64, f64)> + 'a {
    x.iter()
        .copied()
        .zip(y.iter().copied())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
}

/// Split (x, y) pairs into runs of consecutive finite points
///
/// Returns the runs and the number of skipped points.
pub(crate) fn finite_runs(x: &[f64], y: &[f64]) -> (Vec<Vec<(f64, f64)>>, usize) {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    let mut skipped = 0;

    for (px, py) in x.iter().copied().zip(y.iter().copied()) {
        if px.is_finite() && py.is_finite() {
            current.push((px, py));
        } else {
            skipped += 1;
            if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    (runs, skipped)
}

fn report_skipped(kind: &str, skipped: usize) {
    if skipped > 0 {
        warn!(kind, skipped, "skipping points with non-finite coordinates");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_runs_all_finite() {
        let (runs, skipped) = finite_runs(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
        assert_eq!(runs, vec![vec![(1.0, 4.0), (2.0, 5.0), (3.0, 6.0)]]);
        assert_eq!(skipped, 0);
    }

    #[test]
    fn test_finite_runs_breaks_at_nan() {
        let (runs, skipped) = finite_runs(
            &[1.0, 2.0, 3.0, 4.0, 5.0],
            &[1.0, f64::NAN, 3.0, 4.0, f64::INFINITY],
        );
        assert_eq!(runs, vec![vec![(1.0, 1.0)], vec![(3.0, 3.0), (4.0, 4.0)]]);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn test_finite_runs_empty() {
        let (runs, skipped) = finite_runs(&[], &[]);
        assert!(runs.is_empty());
        assert_eq!(skipped, 0);
    }

    fn style_with(marker: MarkerShape) -> TraceStyle {
        TraceStyle {
            color: RED,
            stroke_width: 4,
            marker,
            marker_radius: 6,
        }
    }

    #[test]
    fn test_line_markers_are_stroked() {
        for marker in [MarkerShape::Cross, MarkerShape::Plus] {
            let shape = marker_style(&style_with(marker));
            assert!(!shape.filled);
            assert_eq!(shape.stroke_width, 4);
        }
    }

    #[test]
    fn test_solid_markers_are_filled() {
        for marker in [MarkerShape::Circle, MarkerShape::Square, MarkerShape::Triangle] {
            assert!(marker_style(&style_with(marker)).filled);
        }
    }

    #[test]
    fn test_finite_pairs_filters() {
        let pairs: Vec<_> = finite_pairs(&[1.0, f64::NAN], &[2.0, 3.0]).collect();
        assert_eq!(pairs, vec![(1.0, 2.0)]);
    }
}
