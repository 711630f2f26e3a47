//! Series and configs shared by the integration tests

use plotkit::prelude::*;

/// Compact canvas so rendering tests stay fast
pub fn small_style() -> FigureStyle {
    FigureStyle::default().with_size(480, 360).with_font_size(10.0)
}

/// Default config drawn on [`small_style`] that keeps nothing around
pub fn small_config() -> PlotConfig {
    PlotConfig::default().style(small_style()).show(false)
}

/// `n` series of sampled sines, each phase-shifted by its index
pub fn wave_series(n: usize, points: usize) -> Vec<Series> {
    (0..n)
        .map(|k| {
            let pts: Vec<(f64, f64)> = (0..points)
                .map(|i| {
                    let x = i as f64 / points as f64 * std::f64::consts::TAU;
                    (x, (x + k as f64 * 0.3).sin())
                })
                .collect();
            Series::from_points(&pts)
        })
        .collect()
}

/// One series decaying from `peak` over picosecond time stamps
pub fn decaying_series(peak: f64, points: usize) -> Series {
    let pts: Vec<(f64, f64)> = (0..points)
        .map(|i| {
            let t = i as f64 * 50_000.0;
            (t, peak * (-t / 1e6).exp())
        })
        .collect();
    Series::from_points(&pts)
}
