//! Categorical colour palette
//!
//! Series colours cycle through a fixed ten-entry palette by index, so series 0
//! and series 10 share a colour. The entries are the classic "tab10" colours
//! (`C0` ... `C9`).

use plotters::style::RGBColor;

/// Number of entries in [`PALETTE`]
pub const PALETTE_SIZE: usize = 10;

/// The categorical palette, in cycle order
pub const PALETTE: [RGBColor; PALETTE_SIZE] = [
    RGBColor(31, 119, 180),  // C0 blue
    RGBColor(255, 127, 14),  // C1 orange
    RGBColor(44, 160, 44),   // C2 green
    RGBColor(214, 39, 40),   // C3 red
    RGBColor(148, 103, 189), // C4 purple
    RGBColor(140, 86, 75),   // C5 brown
    RGBColor(227, 119, 194), // C6 pink
    RGBColor(127, 127, 127), // C7 grey
    RGBColor(188, 189, 34),  // C8 olive
    RGBColor(23, 190, 207),  // C9 cyan
];

/// Colour for the series at `index`
///
/// ```rust
/// use plotkit::style::{palette_color, PALETTE};
///
/// assert_eq!(palette_color(0), PALETTE[0]);
/// assert_eq!(palette_color(10), palette_color(0));
/// ```
pub fn palette_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE_SIZE]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_first_entries() {
        assert_eq!(palette_color(0), RGBColor(31, 119, 180));
        assert_eq!(palette_color(1), RGBColor(255, 127, 14));
    }

    #[test]
    fn test_palette_wraparound() {
        assert_eq!(palette_color(10), palette_color(0));
        assert_eq!(palette_color(23), palette_color(3));
    }

    #[test]
    fn test_palette_entries_distinct() {
        for i in 0..PALETTE_SIZE {
            for j in (i + 1)..PALETTE_SIZE {
                assert_ne!(PALETTE[i], PALETTE[j], "C{i} and C{j} collide");
            }
        }
    }
}
