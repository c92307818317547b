use rayon::prelude::*;

use crate::error::InvalidArgument;
use crate::percolation::Percolation;
use crate::rng::{splitmix64, Rng};

const SALT_TRIAL: u64 = 0xD1CE_BA5E_0001;
const CONFIDENCE_95: f64 = 1.96;

/// Monte Carlo estimator of the percolation threshold.
///
/// Runs all trials eagerly at construction. Trials are independent, so they
/// run on the rayon pool; each gets its own seed derived from the master seed
/// and trial index, and the indexed collect keeps result order fixed, so the
/// statistics are identical no matter how the pool schedules them.
pub struct PercolationStats {
    trials: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    pub fn run(n: usize, trials: usize, seed: u64) -> Result<Self, InvalidArgument> {
        if n == 0 {
            return Err(InvalidArgument::new("grid size must be greater than 0"));
        }
        if trials == 0 {
            return Err(InvalidArgument::new("trial count must be greater than 0"));
        }

        let thresholds: Vec<f64> = (0..trials)
            .into_par_iter()
            .map(|t| trial_threshold(n, splitmix64(seed ^ SALT_TRIAL.wrapping_add(t as u64))))
            .collect();

        Ok(Self { trials, thresholds })
    }

    /// Sample mean of the recorded threshold fractions.
    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.trials as f64
    }

    /// Sample standard deviation (denominator T - 1). NaN for T = 1.
    pub fn stddev(&self) -> f64 {
        if self.trials < 2 {
            return f64::NAN;
        }
        let mean = self.mean();
        let sum_sq: f64 = self.thresholds.iter().map(|x| (x - mean) * (x - mean)).sum();
        (sum_sq / (self.trials - 1) as f64).sqrt()
    }

    /// Low endpoint of the 95% confidence interval. NaN when stddev is NaN.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - CONFIDENCE_95 * self.stddev() / (self.trials as f64).sqrt()
    }

    /// High endpoint of the 95% confidence interval. NaN when stddev is NaN.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + CONFIDENCE_95 * self.stddev() / (self.trials as f64).sqrt()
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }
}

/// One trial: open uniformly random sites in a fresh grid until it
/// percolates; return the fraction of sites open at that moment.
fn trial_threshold(n: usize, seed: u64) -> f64 {
    let mut rng = Rng::new(seed);
    let mut model = Percolation::new(n).expect("grid size validated by run()");
    while !model.percolates() {
        let row = rng.range_1n(n);
        let col = rng.range_1n(n);
        model
            .open(row, col)
            .expect("drawn coordinates are in bounds");
    }
    model.number_of_open_sites() as f64 / (n * n) as f64
}

/// Run one trial and keep the finished model, for snapshot rendering.
pub fn sample_trial(n: usize, seed: u64) -> Result<Percolation, InvalidArgument> {
    let mut rng = Rng::new(splitmix64(seed ^ SALT_TRIAL));
    let mut model = Percolation::new(n)?;
    while !model.percolates() {
        let row = rng.range_1n(n);
        let col = rng.range_1n(n);
        model.open(row, col)?;
    }
    Ok(model)
}
