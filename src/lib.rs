pub mod config;
pub mod error;
pub mod grid;
pub mod percolation;
pub mod render;
pub mod replay;
pub mod rng;
pub mod stats;
pub mod unionfind;

use std::time::Instant;

use config::Params;
use error::InvalidArgument;
use stats::PercolationStats;

/// Estimator output plus a rendered snapshot of one finished trial grid.
pub struct Report {
    pub grid_size: usize,
    pub trials: usize,
    pub mean: f64,
    pub stddev: f64,
    pub confidence_lo: f64,
    pub confidence_hi: f64,
    pub snapshot_rgba: Vec<u8>,
    pub snapshot_px: usize,
}

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Run the full estimate: T Monte Carlo trials, summary statistics, and a
/// snapshot render of trial 0 for the visual front-ends.
pub fn run(seed: u64, params: &Params) -> Result<(Report, Vec<Timing>), InvalidArgument> {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    let t = Instant::now();
    let stats = PercolationStats::run(params.grid_size, params.trials, seed)?;
    timings.push(Timing {
        name: "trials",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // Re-run trial 0 with its model kept so the grid can be rendered.
    let t = Instant::now();
    let sample = stats::sample_trial(params.grid_size, seed)?;
    let snapshot_rgba = render::render_grid(&sample, params.snapshot_cell);
    timings.push(Timing {
        name: "snapshot",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    timings.push(Timing {
        name: "TOTAL",
        ms: total_start.elapsed().as_secs_f64() * 1000.0,
    });

    let report = Report {
        grid_size: params.grid_size,
        trials: stats.trials(),
        mean: stats.mean(),
        stddev: stats.stddev(),
        confidence_lo: stats.confidence_lo(),
        confidence_hi: stats.confidence_hi(),
        snapshot_rgba,
        snapshot_px: params.grid_size * params.snapshot_cell.max(1),
    };

    Ok((report, timings))
}
