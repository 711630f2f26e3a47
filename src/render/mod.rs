//! Render-strategy dispatch
//!
//! A [`PlotKind`] selects one of three draw primitives:
//!
//! | Kind      | Tag        | Strategy                      | Options used            |
//! |-----------|------------|-------------------------------|-------------------------|
//! | `Lines`   | `"lines"`  | [`strategies::lines`]         | none                    |
//! | `Points`  | `"points"` | [`strategies::points`]        | `marker_size`, `marker` |
//! | `VLines`  | `"vlines"` | [`strategies::vlines`]        | `origin`                |
//!
//! The set is closed, so dispatch is a plain `match`. Tags are parsed before a
//! figure exists; an unknown tag therefore never leaves a half-drawn chart.

pub mod options;
pub mod strategies;

pub use options::{MarkerShape, RenderOptions, VLineOrigin};
pub use strategies::TraceStyle;

use std::fmt;
use std::str::FromStr;

use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// The chart context every strategy draws into
pub type Axes<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// How a series is represented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotKind {
    /// Connected line
    #[default]
    Lines,
    /// Scatter markers
    Points,
    /// Vertical segments from an origin
    VLines,
}

impl PlotKind {
    /// All kinds, in tag order
    pub const ALL: [PlotKind; 3] = [PlotKind::Lines, PlotKind::Points, PlotKind::VLines];

    /// The canonical tag
    pub fn tag(self) -> &'static str {
        match self {
            PlotKind::Lines => "lines",
            PlotKind::Points => "points",
            PlotKind::VLines => "vlines",
        }
    }

    /// Draw one trace with the strategy for this kind
    ///
    /// `x`, `y` and `origins` are in drawing coordinates. `origins` is only
    /// read by `VLines`.
    ///
    /// # Errors
    ///
    /// - [`PlotError::InputShape`] if `x` and `y` differ in length, or if
    ///   `origins` does not match them for `VLines`
    /// - [`PlotError::Backend`] if plotters fails to draw
    pub fn draw<DB: DrawingBackend>(
        self,
        axes: &mut Axes<'_, DB>,
        index: usize,
        x: &[f64],
        y: &[f64],
        origins: &[f64],
        style: &TraceStyle,
    ) -> PlotResult<()> {
        if x.len() != y.len() {
            return Err(PlotError::InputShape {
                index,
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        match self {
            PlotKind::Lines => strategies::lines(axes, x, y, style),
            PlotKind::Points => strategies::points(axes, x, y, style),
            PlotKind::VLines => {
                if origins.len() != x.len() {
                    return Err(PlotError::InputShape {
                        index,
                        x_len: x.len(),
                        y_len: origins.len(),
                    });
                }
                strategies::vlines(axes, x, y, origins, style)
            }
        }
    }
}

impl FromStr for PlotKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lines" => Ok(PlotKind::Lines),
            "points" => Ok(PlotKind::Points),
            "vlines" => Ok(PlotKind::VLines),
            _ => Err(PlotError::UnknownPlotKind(s.to_string())),
        }
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
