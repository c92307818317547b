use percolate::config::Params;
use percolate::stats::PercolationStats;

#[test]
fn rejects_degenerate_arguments() {
    assert!(PercolationStats::run(0, 10, 42).is_err());
    assert!(PercolationStats::run(10, 0, 42).is_err());
    assert!(PercolationStats::run(0, 0, 42).is_err());
}

#[test]
fn estimate_has_sane_shape() {
    let stats = PercolationStats::run(10, 30, 42).expect("valid run");
    let mean = stats.mean();
    assert!(mean > 0.0 && mean < 1.0, "mean = {mean}");
    assert!(stats.stddev() > 0.0);
    assert!(stats.confidence_lo() <= mean);
    assert!(mean <= stats.confidence_hi());
    assert_eq!(stats.trials(), 30);
    assert_eq!(stats.thresholds().len(), 30);
    for &t in stats.thresholds() {
        assert!(t > 0.0 && t <= 1.0, "threshold = {t}");
    }
}

#[test]
fn same_seed_reproduces_identical_statistics() {
    let a = PercolationStats::run(8, 25, 1234).expect("valid run");
    let b = PercolationStats::run(8, 25, 1234).expect("valid run");
    assert_eq!(a.thresholds(), b.thresholds());
    assert_eq!(a.mean(), b.mean());
    assert_eq!(a.stddev(), b.stddev());
}

#[test]
fn different_seeds_give_different_trials() {
    let a = PercolationStats::run(8, 25, 1).expect("valid run");
    let b = PercolationStats::run(8, 25, 2).expect("valid run");
    assert_ne!(a.thresholds(), b.thresholds());
}

#[test]
fn single_trial_propagates_nan() {
    let stats = PercolationStats::run(5, 1, 42).expect("valid run");
    let mean = stats.mean();
    assert!(mean > 0.0 && mean <= 1.0);
    assert!(stats.stddev().is_nan());
    assert!(stats.confidence_lo().is_nan());
    assert!(stats.confidence_hi().is_nan());
}

#[test]
fn one_by_one_grid_always_needs_exactly_one_site() {
    let stats = PercolationStats::run(1, 10, 42).expect("valid run");
    for &t in stats.thresholds() {
        assert_eq!(t, 1.0);
    }
    assert_eq!(stats.mean(), 1.0);
    assert_eq!(stats.stddev(), 0.0);
}

#[test]
fn run_reports_statistics_and_snapshot() {
    let params = Params {
        grid_size: 6,
        trials: 5,
        snapshot_cell: 2,
    };
    let (report, timings) = percolate::run(42, &params).expect("valid run");

    assert_eq!(report.grid_size, 6);
    assert_eq!(report.trials, 5);
    assert!(report.mean > 0.0 && report.mean < 1.0);
    assert!(report.confidence_lo <= report.mean && report.mean <= report.confidence_hi);
    assert_eq!(report.snapshot_px, 12);
    assert_eq!(report.snapshot_rgba.len(), 12 * 12 * 4);
    assert!(timings.iter().any(|t| t.name == "trials"));
    assert!(timings.iter().any(|t| t.name == "TOTAL"));
}

#[test]
fn run_rejects_invalid_params() {
    let params = Params {
        grid_size: 0,
        trials: 5,
        snapshot_cell: 1,
    };
    assert!(percolate::run(42, &params).is_err());
}
