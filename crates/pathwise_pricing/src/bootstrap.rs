//! Bootstrap interval estimation for the mean discounted payoff.
//!
//! The estimator resamples the *already-computed* per-path values with
//! replacement rather than re-running the simulation, which makes it a fast,
//! approximate interval: crude for instruments far out of the money (the
//! resampled tail is sparse there), but adequate for bounding the point
//! estimate. The interval is symmetric by construction, `1.96` population
//! standard deviations of the resample means either side of their mean.

use rayon::prelude::*;

use pathwise_core::math::stats;

use crate::error::PricingError;
use crate::rng::{stream_seed, SimRng};

/// Resample count used when the caller has no reason to choose.
pub const DEFAULT_BOOTSTRAP_RESAMPLES: usize = 1_000;

/// Two-sided 95% quantile of the standard normal.
pub const Z_95: f64 = 1.96;

/// A 95% confidence interval around a bootstrap mean.
///
/// `lower = point - 1.96 * st` and `upper = point + 1.96 * st`, where `st`
/// is the population standard deviation of the bootstrap means.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceInterval {
    /// Lower 95% bound.
    pub lower: f64,
    /// Bootstrap point estimate (mean of resample means).
    pub point: f64,
    /// Upper 95% bound.
    pub upper: f64,
}

impl PriceInterval {
    /// Half-width of the interval, `1.96 * st`.
    #[inline]
    pub fn half_width(&self) -> f64 {
        (self.upper - self.lower) / 2.0
    }

    /// True if `value` falls inside the interval (inclusive).
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Bootstraps a confidence interval for the mean of `values`.
///
/// Draws `n_resamples` resamples of `values.len()` elements with
/// replacement, takes the mean of each, and centres a symmetric
/// [`Z_95`]-interval on the mean of those means using the population
/// standard deviation. Resamples are independent, so they run in parallel,
/// each on its own stream derived from `seed`; the closing mean/std
/// reduction is the only synchronisation point.
///
/// # Errors
///
/// - [`PricingError::EmptySample`] if `values` is empty
/// - [`PricingError::InvalidParameter`] if `n_resamples` is zero
pub fn bootstrap_mean_interval(
    values: &[f64],
    n_resamples: usize,
    seed: u64,
) -> Result<PriceInterval, PricingError> {
    if values.is_empty() {
        return Err(PricingError::EmptySample);
    }
    if n_resamples == 0 {
        return Err(PricingError::InvalidParameter {
            name: "n_resamples",
            reason: "must be at least 1".to_string(),
        });
    }

    let n = values.len();
    let means: Vec<f64> = (0..n_resamples)
        .into_par_iter()
        .map(|resample_idx| {
            let mut rng = SimRng::from_seed(stream_seed(seed, resample_idx as u64));
            let mut acc = 0.0;
            for _ in 0..n {
                acc += values[rng.index(n)];
            }
            acc / n as f64
        })
        .collect();

    let point = stats::mean(&means);
    let half = Z_95 * stats::population_std(&means);

    Ok(PriceInterval {
        lower: point - half,
        point,
        upper: point + half,
    })
}
