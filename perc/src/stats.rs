use std::fmt::Display;

use log::{debug, info};
use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{ConfigError, Result},
    grid::Percolation,
    layout::SiteLayout,
};

////////////////////////////////////////////////////////////////////////////////

/// Critical value of the standard normal distribution for a two-sided 95%
/// confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Returns the arithmetic mean of `samples`, or NaN if there are none.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Returns the sample standard deviation of `samples` (with `n - 1` in the
/// denominator), or NaN if there are fewer than two of them.
pub fn stddev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return f64::NAN;
    }
    let mu = mean(samples);
    let sum_sq = samples.iter().map(|x| (x - mu) * (x - mu)).sum::<f64>();
    (sum_sq / (samples.len() - 1) as f64).sqrt()
}

////////////////////////////////////////////////////////////////////////////////

/// Opens uniformly random blocked sites of a fresh N-by-N grid until it
/// percolates, and returns the fraction of sites that ended up open.
pub fn run_trial<R: Rng + ?Sized>(n: i64, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(n)?;
    open_until_percolates(&mut grid, rng)?;
    Ok(threshold(&grid))
}

fn open_until_percolates<R: Rng + ?Sized>(grid: &mut Percolation, rng: &mut R) -> Result<()> {
    let mut order = grid.layout().sites().collect::<Vec<_>>();
    order.shuffle(rng);
    for site in order {
        grid.open(site.row + 1, site.col + 1)?;
        if grid.percolates() {
            break;
        }
    }
    Ok(())
}

fn threshold(grid: &Percolation) -> f64 {
    grid.number_of_open_sites() as f64 / grid.layout().site_count() as f64
}

////////////////////////////////////////////////////////////////////////////////

/// Percolation thresholds collected over a number of independent trials.
#[derive(Clone, Debug)]
pub struct PercolationStats {
    grid_size: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Performs `trials` independent experiments on an `n`-by-`n` grid using
    /// the thread-local random generator.
    pub fn run(n: i64, trials: i64) -> Result<Self> {
        Self::run_with_rng(n, trials, &mut rand::thread_rng())
    }

    /// Same as [`PercolationStats::run`], drawing sites from `rng`.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidConfiguration`](crate::Error::InvalidConfiguration)
    /// if `n` or `trials` is not positive.
    pub fn run_with_rng<R: Rng + ?Sized>(n: i64, trials: i64, rng: &mut R) -> Result<Self> {
        let layout = SiteLayout::from_size(n)?;
        let grid_size = layout.size();
        let trial_count = match usize::try_from(trials) {
            Ok(count) if count > 0 => count,
            _ => return Err(ConfigError::TrialCount(trials).into()),
        };

        let mut thresholds = Vec::new();
        for trial in 0..trial_count {
            let mut grid = Percolation::new(n)?;
            open_until_percolates(&mut grid, rng)?;
            let threshold = threshold(&grid);
            debug!(
                "trial {trial}: percolated with {} of {} sites open, threshold {threshold:.6}",
                grid.number_of_open_sites(),
                layout.site_count(),
            );
            thresholds.push(threshold);
        }

        let stats = Self {
            grid_size,
            thresholds,
        };
        info!(
            "{trial_count} trials on a {grid_size}x{grid_size} grid: mean {:.6}, stddev {:.6}",
            stats.mean(),
            stats.stddev(),
        );
        Ok(stats)
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        mean(&self.thresholds)
    }

    /// Sample standard deviation of the percolation threshold.
    /// NaN for a single trial.
    pub fn stddev(&self) -> f64 {
        stddev(&self.thresholds)
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }
}

impl Display for PercolationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "mean                    = {}", self.mean())?;
        writeln!(f, "stddev                  = {}", self.stddev())?;
        write!(
            f,
            "95% confidence interval = {}, {}",
            self.confidence_lo(),
            self.confidence_hi()
        )
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn mean_of_samples() {
        assert_close(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_close(mean(&[0.5]), 0.5);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn sample_stddev() {
        // deviations -3, -1, 1, 3 => sum of squares 20, over n - 1 = 3
        assert_close(stddev(&[1.0, 3.0, 5.0, 7.0]), (20.0f64 / 3.0).sqrt());
        assert_close(stddev(&[2.0, 2.0, 2.0]), 0.0);
        assert!(stddev(&[1.0]).is_nan());
        assert!(stddev(&[]).is_nan());
    }
}
