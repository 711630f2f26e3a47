//! Tick label formatting
//!
//! A [`TickFormatter`] maps a raw axis value to the string drawn next to its
//! tick. The second argument is the tick position; it is part of the contract
//! so that formatters written for position-aware axes keep working, but the
//! backend does not know tick positions and always passes `None`.
//!
//! [`ps_time`] is the bundled formatter for axes measured in picoseconds.

use std::sync::Arc;

/// Shared tick formatter: `(value, position) -> label`
pub type TickFormatter = Arc<dyn Fn(f64, Option<usize>) -> String + Send + Sync>;

/// Wrap a function or closure as a [`TickFormatter`]
///
/// ```rust
/// use plotkit::format::{ps_time, tick_formatter};
///
/// let fmt = tick_formatter(ps_time);
/// assert_eq!(fmt(1500.0, None), "2 ns");
///
/// let percent = tick_formatter(|v, _| format!("{:.0}%", v * 100.0));
/// assert_eq!(percent(0.25, None), "25%");
/// ```
pub fn tick_formatter<F>(f: F) -> TickFormatter
where
    F: Fn(f64, Option<usize>) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Format a picosecond value with the largest fitting unit
///
/// Rules, first match wins:
///
/// | value             | output                  |
/// |-------------------|-------------------------|
/// | exactly 0         | `"0"`                   |
/// | ≥ 1 000 000       | `value / 1e6` + `" µs"` |
/// | ≥ 1 000           | `value / 1e3` + `" ns"` |
/// | anything else     | `value` + `" ps"`       |
///
/// Numbers are rounded to zero decimals, half to even: `1500` gives `"2 ns"`
/// and `2500` also gives `"2 ns"`. Negative values fall through to `ps`.
///
/// ```rust
/// use plotkit::format::ps_time;
///
/// assert_eq!(ps_time(0.0, None), "0");
/// assert_eq!(ps_time(500.0, None), "500 ps");
/// assert_eq!(ps_time(2_500_000.0, None), "2 µs");
/// ```
pub fn ps_time(value: f64, _pos: Option<usize>) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if value >= 1e6 {
        format!("{} µs", format_rounded(value / 1e6))
    } else if value >= 1e3 {
        format!("{} ns", format_rounded(value / 1e3))
    } else {
        format!("{} ps", format_rounded(value))
    }
}

/// Label used when an axis has no formatter installed
///
/// Up to six decimals, trailing zeros trimmed, negative zero shown as `0`.
pub fn default_tick_label(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = format!("{:.6}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

fn format_rounded(value: f64) -> String {
    format!("{:.0}", value.round_ties_even())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ps_time_zero_has_no_unit() {
        assert_eq!(ps_time(0.0, None), "0");
        assert_eq!(ps_time(-0.0, Some(3)), "0");
    }

    #[test]
    fn test_ps_time_picoseconds() {
        assert_eq!(ps_time(500.0, None), "500 ps");
        assert_eq!(ps_time(999.0, None), "999 ps");
        assert_eq!(ps_time(1.0, None), "1 ps");
    }

    #[test]
    fn test_ps_time_nanoseconds() {
        assert_eq!(ps_time(1000.0, None), "1 ns");
        assert_eq!(ps_time(42_000.0, None), "42 ns");
        assert_eq!(ps_time(999_999.0, None), "1000 ns");
    }

    #[test]
    fn test_ps_time_microseconds() {
        assert_eq!(ps_time(1_000_000.0, None), "1 µs");
        assert_eq!(ps_time(2_500_000.0, None), "2 µs");
        assert_eq!(ps_time(3_500_000.0, None), "4 µs");
    }

    #[test]
    fn test_ps_time_rounds_half_to_even() {
        assert_eq!(ps_time(1500.0, None), "2 ns");
        assert_eq!(ps_time(2500.0, None), "2 ns");
        assert_eq!(ps_time(2501.0, None), "3 ns");
        assert_eq!(ps_time(0.5, None), "0 ps");
    }

    #[test]
    fn test_ps_time_negative_stays_in_ps() {
        assert_eq!(ps_time(-2000.0, None), "-2000 ps");
    }

    #[test]
    fn test_ps_time_ignores_position() {
        assert_eq!(ps_time(1500.0, Some(0)), ps_time(1500.0, Some(7)));
    }

    #[test]
    fn test_default_tick_label_trims() {
        assert_eq!(default_tick_label(2.0), "2");
        assert_eq!(default_tick_label(2.5), "2.5");
        assert_eq!(default_tick_label(0.125), "0.125");
        assert_eq!(default_tick_label(-0.0), "0");
        assert_eq!(default_tick_label(-1.25), "-1.25");
    }

    #[test]
    fn test_default_tick_label_tiny_negative_is_zero() {
        assert_eq!(default_tick_label(-1e-9), "0");
    }

    #[test]
    fn test_tick_formatter_wraps_closure() {
        let fmt = tick_formatter(|v, pos| format!("{v}@{pos:?}"));
        assert_eq!(fmt(1.0, Some(2)), "1@Some(2)");
    }
}
