//! Latency sweep rendered with the picosecond tick formatter
//!
//! ```bash
//! RUST_LOG=debug cargo run --example timing_sweep --features telemetry
//! ```
//!
//! Writes `timing_sweep.png` (lines) and `timing_sweep_hits.svg` (vlines) to
//! the current directory.

use plotkit::prelude::*;

fn sweep(base_ps: f64, jitter: f64) -> Series {
    let pts: Vec<(f64, f64)> = (0..64)
        .map(|i| {
            let load = i as f64 / 63.0;
            let latency = base_ps * (1.0 + 4.0 * load * load) + jitter * (i as f64 * 0.7).sin();
            (latency, load * 100.0)
        })
        .collect();
    Series::from_points(&pts)
}

fn main() -> Result<(), PlotError> {
    let _ = plotkit::telemetry::init_default_tracing();

    let series = vec![
        sweep(800.0, 50.0),
        sweep(40_000.0, 4_000.0),
        sweep(900_000.0, 60_000.0),
    ];

    let config = PlotConfig::timing("Latency under load")
        .labels(["L1", "LLC", "DRAM"])
        .y_label("Load (%)")
        .grid(true)
        .save(true)
        .savename("timing_sweep.png")
        .show(false);
    plot_any(&series, &config)?;

    let hits = Series::from_points(&[(1_200.0, 3.0), (55_000.0, 7.0), (1_800_000.0, 2.0)]);
    let config = PlotConfig::timing(NO_TITLE)
        .plotcase(PlotKind::VLines)
        .labels(["hits"])
        .y_label("Count")
        .save(true)
        .savename("timing_sweep_hits.svg")
        .show(false);
    plot_any(&[hits], &config)?;

    println!("wrote timing_sweep.png and timing_sweep_hits.svg");
    Ok(())
}
