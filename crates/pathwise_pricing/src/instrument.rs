//! Instruments: payoffs bound to an ensemble and an expiry.

use std::fmt;
use std::sync::Arc;

use crate::bootstrap::{bootstrap_mean_interval, PriceInterval};
use crate::ensemble::PathEnsemble;
use crate::error::{PathError, PricingError};
use crate::path::Path;

/// Payoff function applied to each simulated path.
///
/// The common vanilla payoffs are concrete variants evaluated on the value
/// observed at the instrument's expiry; [`Payoff::Custom`] is the escape
/// hatch for arbitrary path-dependent payoffs (Asians, lookbacks, anything
/// expressible as a closure over the whole [`Path`]).
#[derive(Clone)]
pub enum Payoff {
    /// `max(S - K, 0)`.
    Call {
        /// Strike price.
        strike: f64,
    },
    /// `max(K - S, 0)`.
    Put {
        /// Strike price.
        strike: f64,
    },
    /// `1` if `S > K`, else `0`.
    DigitalCall {
        /// Strike price.
        strike: f64,
    },
    /// `1` if `S < K`, else `0`.
    DigitalPut {
        /// Strike price.
        strike: f64,
    },
    /// User-supplied payoff over the whole path.
    Custom(Arc<dyn Fn(&Path) -> f64 + Send + Sync>),
}

impl Payoff {
    /// Call payoff with the given strike.
    #[inline]
    pub fn call(strike: f64) -> Self {
        Self::Call { strike }
    }

    /// Put payoff with the given strike.
    #[inline]
    pub fn put(strike: f64) -> Self {
        Self::Put { strike }
    }

    /// Digital (cash-or-nothing) call with the given strike.
    #[inline]
    pub fn digital_call(strike: f64) -> Self {
        Self::DigitalCall { strike }
    }

    /// Digital (cash-or-nothing) put with the given strike.
    #[inline]
    pub fn digital_put(strike: f64) -> Self {
        Self::DigitalPut { strike }
    }

    /// Wraps an arbitrary closure over the path.
    pub fn custom(payoff: impl Fn(&Path) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(payoff))
    }

    /// Evaluates the payoff on one path, observing vanilla payoffs at
    /// `observation_date`.
    ///
    /// An observation date at or beyond the path's final sample date reads
    /// the terminal value directly; earlier dates go through the
    /// interpolated [`Path::value_at_date`] lookup. Custom payoffs receive
    /// the whole path and ignore the observation date.
    pub fn evaluate(&self, path: &Path, observation_date: f64) -> Result<f64, PathError> {
        match self {
            Self::Call { strike } => {
                let s = observed_value(path, observation_date)?;
                Ok((s - strike).max(0.0))
            }
            Self::Put { strike } => {
                let s = observed_value(path, observation_date)?;
                Ok((strike - s).max(0.0))
            }
            Self::DigitalCall { strike } => {
                let s = observed_value(path, observation_date)?;
                Ok(if s > *strike { 1.0 } else { 0.0 })
            }
            Self::DigitalPut { strike } => {
                let s = observed_value(path, observation_date)?;
                Ok(if s < *strike { 1.0 } else { 0.0 })
            }
            Self::Custom(payoff) => Ok(payoff(path)),
        }
    }
}

impl fmt::Debug for Payoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call { strike } => f.debug_struct("Call").field("strike", strike).finish(),
            Self::Put { strike } => f.debug_struct("Put").field("strike", strike).finish(),
            Self::DigitalCall { strike } => f
                .debug_struct("DigitalCall")
                .field("strike", strike)
                .finish(),
            Self::DigitalPut { strike } => f
                .debug_struct("DigitalPut")
                .field("strike", strike)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Underlying value at the observation date, reading the terminal sample
/// when the date sits at or beyond the end of the grid.
///
/// The default expiry is the ensemble's `total_time`, which exceeds the last
/// grid date whenever the horizon is not an exact multiple of the step;
/// terminal observation is the contract for those dates.
fn observed_value(path: &Path, observation_date: f64) -> Result<f64, PathError> {
    if observation_date >= path.horizon() {
        Ok(path.last_value())
    } else {
        path.value_at_date(observation_date)
    }
}

/// A payoff bound to a path ensemble and an expiry date.
///
/// Instruments borrow the ensemble, so any number of them can price against
/// one generated path set without copying it.
///
/// # Examples
///
/// ```
/// use pathwise_pricing::{EnsembleConfig, Instrument, PathEnsemble, Payoff};
///
/// let config = EnsembleConfig::builder()
///     .n_paths(500)
///     .total_time(0.25)
///     .delta_t(0.25 / 100.0)
///     .model_name("black-scholes")
///     .drift(0.05)
///     .volatility(0.2)
///     .rate(0.05)
///     .seed(42)
///     .build()
///     .unwrap();
/// let mut ensemble = PathEnsemble::new(config).unwrap();
/// ensemble.generate(100.0).unwrap();
///
/// let call = Instrument::new(&ensemble, Payoff::call(100.0));
/// let interval = call.price_with_seed(1_000, 7).unwrap();
/// assert!(interval.lower <= interval.point && interval.point <= interval.upper);
/// ```
pub struct Instrument<'e> {
    ensemble: &'e PathEnsemble,
    payoff: Payoff,
    expiry: f64,
}

impl<'e> Instrument<'e> {
    /// Binds a payoff to an ensemble, expiring at the ensemble's horizon.
    pub fn new(ensemble: &'e PathEnsemble, payoff: Payoff) -> Self {
        Self {
            ensemble,
            payoff,
            expiry: ensemble.total_time(),
        }
    }

    /// Binds a payoff with an explicit expiry date.
    ///
    /// Expiries before the last grid date observe the interpolated path
    /// value at `expiry`; discounting always uses `expiry` itself.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidParameter`] if `expiry` is negative, not
    /// finite, or past the ensemble horizon.
    pub fn with_expiry(
        ensemble: &'e PathEnsemble,
        payoff: Payoff,
        expiry: f64,
    ) -> Result<Self, PricingError> {
        if !expiry.is_finite() || expiry < 0.0 || expiry > ensemble.total_time() {
            return Err(PricingError::InvalidParameter {
                name: "expiry",
                reason: format!(
                    "must lie in [0, {}], got {expiry}",
                    ensemble.total_time()
                ),
            });
        }
        Ok(Self {
            ensemble,
            payoff,
            expiry,
        })
    }

    /// The expiry date used for observation and discounting.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// The bound payoff.
    #[inline]
    pub fn payoff(&self) -> &Payoff {
        &self.payoff
    }

    /// Discounted payoff of every path: one full pass over the ensemble.
    fn discounted_values(&self) -> Result<Vec<f64>, PricingError> {
        if !self.ensemble.is_generated() {
            return Err(PricingError::NotGenerated);
        }

        let discount = self.ensemble.discount(self.expiry)?;
        self.ensemble
            .paths()
            .iter()
            .map(|path| {
                self.payoff
                    .evaluate(path, self.expiry)
                    .map(|value| value * discount)
                    .map_err(PricingError::from)
            })
            .collect()
    }

    /// Prices the instrument with a bootstrap confidence interval.
    ///
    /// Computes each path's discounted payoff, then bootstraps the mean with
    /// `n_bootstrap` resamples (see
    /// [`DEFAULT_BOOTSTRAP_RESAMPLES`](crate::bootstrap::DEFAULT_BOOTSTRAP_RESAMPLES)
    /// for the conventional count). Each call draws fresh resampling
    /// entropy; use [`price_with_seed`](Self::price_with_seed) when the
    /// interval must be reproducible.
    ///
    /// # Errors
    ///
    /// - [`PricingError::NotGenerated`] if the ensemble has no paths yet
    /// - [`PricingError::InvalidParameter`] if `n_bootstrap` is zero
    /// - [`PricingError::Path`] if a custom expiry walks off a path
    pub fn price(&self, n_bootstrap: usize) -> Result<PriceInterval, PricingError> {
        self.price_with_seed(n_bootstrap, rand::random())
    }

    /// Prices with a fixed resampling seed, for reproducible runs.
    pub fn price_with_seed(
        &self,
        n_bootstrap: usize,
        seed: u64,
    ) -> Result<PriceInterval, PricingError> {
        let values = self.discounted_values()?;
        bootstrap_mean_interval(&values, n_bootstrap, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ensemble::EnsembleConfig;
    use approx::assert_relative_eq;

    fn generated_ensemble(n_paths: usize, volatility: f64, seed: u64) -> PathEnsemble {
        let config = EnsembleConfig::builder()
            .n_paths(n_paths)
            .total_time(0.5)
            .delta_t(0.5 / 64.0)
            .model_name("black-scholes")
            .drift(0.04)
            .volatility(volatility)
            .rate(0.01)
            .seed(seed)
            .build()
            .unwrap();
        let mut ensemble = PathEnsemble::new(config).unwrap();
        ensemble.generate(100.0).unwrap();
        ensemble
    }

    #[test]
    fn test_price_before_generate_fails() {
        let config = EnsembleConfig::builder()
            .n_paths(10)
            .total_time(0.5)
            .delta_t(0.5 / 64.0)
            .model_name("bs")
            .drift(0.04)
            .volatility(0.2)
            .rate(0.01)
            .build()
            .unwrap();
        let ensemble = PathEnsemble::new(config).unwrap();

        let call = Instrument::new(&ensemble, Payoff::call(100.0));
        assert!(matches!(
            call.price_with_seed(100, 1),
            Err(PricingError::NotGenerated)
        ));
    }

    #[test]
    fn test_default_expiry_is_ensemble_horizon() {
        let ensemble = generated_ensemble(16, 0.2, 42);
        let call = Instrument::new(&ensemble, Payoff::call(100.0));
        assert_eq!(call.expiry(), 0.5);
    }

    #[test]
    fn test_with_expiry_validation() {
        let ensemble = generated_ensemble(16, 0.2, 42);
        assert!(Instrument::with_expiry(&ensemble, Payoff::call(100.0), 0.25).is_ok());
        assert!(Instrument::with_expiry(&ensemble, Payoff::call(100.0), -0.1).is_err());
        assert!(Instrument::with_expiry(&ensemble, Payoff::call(100.0), 0.6).is_err());
        assert!(Instrument::with_expiry(&ensemble, Payoff::call(100.0), f64::NAN).is_err());
    }

    #[test]
    fn test_vanilla_payoff_evaluation() {
        let ensemble = generated_ensemble(4, 0.0, 1);
        let path = &ensemble.paths()[0];
        let terminal = path.last_value();

        let itm_call = Payoff::call(terminal - 5.0);
        assert_relative_eq!(
            itm_call.evaluate(path, ensemble.total_time()).unwrap(),
            5.0,
            epsilon = 1e-10
        );

        let otm_call = Payoff::call(terminal + 5.0);
        assert_eq!(otm_call.evaluate(path, ensemble.total_time()).unwrap(), 0.0);

        let digital = Payoff::digital_call(terminal - 1.0);
        assert_eq!(digital.evaluate(path, ensemble.total_time()).unwrap(), 1.0);

        let digital_put = Payoff::digital_put(terminal - 1.0);
        assert_eq!(
            digital_put.evaluate(path, ensemble.total_time()).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_custom_payoff_sees_whole_path() {
        let ensemble = generated_ensemble(4, 0.2, 5);
        // Arithmetic-average (Asian) payoff as a closure.
        let asian = Payoff::custom(|path: &Path| {
            let mean = path.values().iter().sum::<f64>() / path.len() as f64;
            (mean - 100.0).max(0.0)
        });

        let instrument = Instrument::new(&ensemble, asian);
        let interval = instrument.price_with_seed(200, 9).unwrap();
        assert!(interval.point.is_finite());
    }

    #[test]
    fn test_put_call_payoffs_are_complementary() {
        let ensemble = generated_ensemble(64, 0.2, 11);
        let strike = 100.0;
        for path in ensemble.paths() {
            let s = path.last_value();
            let call = Payoff::call(strike)
                .evaluate(path, ensemble.total_time())
                .unwrap();
            let put = Payoff::put(strike)
                .evaluate(path, ensemble.total_time())
                .unwrap();
            assert_relative_eq!(call - put, s - strike, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_early_expiry_uses_interpolated_observation() {
        let ensemble = generated_ensemble(8, 0.2, 13);
        // An off-grid expiry strictly inside the horizon.
        let expiry = 0.2341;
        let call = Instrument::with_expiry(&ensemble, Payoff::call(0.0), expiry).unwrap();

        // Strike zero makes the payoff equal the observed value, so pricing
        // a single path should reproduce value_at_date * discount.
        let path = &ensemble.paths()[0];
        let observed = path.value_at_date(expiry).unwrap();
        let expected = observed * ensemble.discount(expiry).unwrap();
        let direct = call.payoff().evaluate(path, expiry).unwrap()
            * ensemble.discount(expiry).unwrap();
        assert_eq!(direct, expected);
    }

    #[test]
    fn test_price_interval_ordering() {
        let ensemble = generated_ensemble(512, 0.2, 17);
        let call = Instrument::new(&ensemble, Payoff::call(100.0));
        let interval = call.price_with_seed(400, 23).unwrap();
        assert!(interval.lower <= interval.point);
        assert!(interval.point <= interval.upper);
        assert!(interval.point > 0.0);
    }

    #[test]
    fn test_zero_bootstrap_count_rejected() {
        let ensemble = generated_ensemble(16, 0.2, 19);
        let call = Instrument::new(&ensemble, Payoff::call(100.0));
        assert!(matches!(
            call.price_with_seed(0, 1),
            Err(PricingError::InvalidParameter { .. })
        ));
    }
}
