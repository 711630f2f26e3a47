//! Legend drawn outside the axes
//!
//! The legend lives in its own strip to the right of the plotting area, its
//! first entry anchored at the strip's upper-left corner. Every glyph is
//! stroked with the style's legend line width, whatever width the data uses,
//! so entries look alike even when traces are drawn thick.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::PlotResult;
use crate::render::{MarkerShape, PlotKind};
use crate::style::FigureStyle;

/// One legend row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry<'a> {
    pub label: &'a str,
    pub color: RGBColor,
    pub kind: PlotKind,
    pub marker: MarkerShape,
}

/// Geometry of the legend strip, in pixels
struct LegendLayout {
    pad: i32,
    glyph: i32,
    gap: i32,
    row: i32,
}

impl LegendLayout {
    fn new(style: &FigureStyle) -> Self {
        let font = style.legend_font_px() as i32;
        Self {
            pad: font / 2,
            glyph: font * 2,
            gap: font / 2,
            row: font * 3 / 2,
        }
    }
}

fn legend_font(style: &FigureStyle) -> TextStyle<'_> {
    TextStyle::from((style.font_family.as_str(), style.legend_font_px()).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center))
}

/// Width of the strip needed to hold `entries`, capped at half the figure
pub fn legend_width<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    entries: &[LegendEntry<'_>],
    style: &FigureStyle,
) -> PlotResult<u32> {
    let layout = LegendLayout::new(style);
    let font = legend_font(style);

    let mut widest = 0u32;
    for entry in entries {
        let (w, _) = area.estimate_text_size(entry.label, &font)?;
        widest = widest.max(w);
    }

    let width = (2 * layout.pad + layout.glyph + layout.gap) as u32 + widest;
    Ok(width.min(style.width / 2))
}

/// Draw all entries into `area`, starting `top` pixels below its upper edge
pub fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    entries: &[LegendEntry<'_>],
    style: &FigureStyle,
    top: i32,
) -> PlotResult<()> {
    let layout = LegendLayout::new(style);
    let font = legend_font(style);
    let stroke_width = style.legend_line_width_px();

    for (row, entry) in entries.iter().enumerate() {
        let y = top + layout.row / 2 + row as i32 * layout.row;
        let x0 = layout.pad;
        let x1 = x0 + layout.glyph;
        let stroke = ShapeStyle::from(&entry.color).stroke_width(stroke_width);

        match entry.kind {
            PlotKind::Lines | PlotKind::VLines => {
                area.draw(&PathElement::new(vec![(x0, y), (x1, y)], stroke))?;
            }
            PlotKind::Points => {
                let center = ((x0 + x1) / 2, y);
                let r = (layout.row / 4).max(2);
                let shape = if entry.marker.is_line_marker() {
                    stroke
                } else {
                    entry.color.filled()
                };
                draw_marker_glyph(area, center, r, entry.marker, shape)?;
            }
        }

        area.draw(&Text::new(entry.label.to_string(), (x1 + layout.gap, y), font.clone()))?;
    }
    Ok(())
}

fn draw_marker_glyph<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    (cx, cy): (i32, i32),
    r: i32,
    marker: MarkerShape,
    shape: ShapeStyle,
) -> PlotResult<()> {
    match marker {
        MarkerShape::Cross => {
            area.draw(&PathElement::new(vec![(cx - r, cy - r), (cx + r, cy + r)], shape))?;
            area.draw(&PathElement::new(vec![(cx - r, cy + r), (cx + r, cy - r)], shape))?;
        }
        MarkerShape::Plus => {
            area.draw(&PathElement::new(vec![(cx - r, cy), (cx + r, cy)], shape))?;
            area.draw(&PathElement::new(vec![(cx, cy - r), (cx, cy + r)], shape))?;
        }
        MarkerShape::Circle => {
            area.draw(&Circle::new((cx, cy), r, shape))?;
        }
        MarkerShape::Square => {
            area.draw(&Rectangle::new([(cx - r, cy - r), (cx + r, cy + r)], shape))?;
        }
        MarkerShape::Triangle => {
            area.draw(&TriangleMarker::new((cx, cy), r, shape))?;
        }
    }
    Ok(())
}
