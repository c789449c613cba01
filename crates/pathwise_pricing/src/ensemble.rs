//! Path ensemble generation.
//!
//! A [`PathEnsemble`] owns a set of independent [`Path`]s sharing one time
//! grid, one diffusion model, and one flat discount rate. Generation is the
//! engine's hot loop: `n_paths * n_periods` Euler-Maruyama steps, fanned out
//! over rayon workers one path per unit of work. Paths have no inter-path
//! data dependency, each worker writes its own `Path` slot, and each worker
//! derives its own RNG stream from the run's base seed, so the fan-out
//! needs no locks and produces uncorrelated trajectories.

use pathwise_core::market_data::curves::{DiscountCurve, FlatCurve};
use pathwise_core::market_data::MarketDataError;
use pathwise_core::types::TimeGrid;
use pathwise_models::models::DiffusionModel;
use rayon::prelude::*;

use crate::error::ConfigError;
use crate::path::Path;
use crate::rng::{stream_seed, SimRng};

/// Simulation parameters for a path ensemble.
///
/// Construct via [`EnsembleConfig::builder`]; every parameter is validated
/// at build time, including the model-name lookup, so a bad configuration
/// never reaches the simulation loop.
///
/// # Examples
///
/// ```
/// use pathwise_pricing::EnsembleConfig;
///
/// let config = EnsembleConfig::builder()
///     .n_paths(2_000)
///     .total_time(1.0 / 12.0)
///     .delta_t(1.0 / 12.0 / 1_000.0)
///     .model_name("black-scholes")
///     .drift(0.0923)
///     .volatility(0.06)
///     .rate(0.0077)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_paths(), 2_000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleConfig {
    n_paths: usize,
    total_time: f64,
    delta_t: f64,
    model: DiffusionModel,
    rate: f64,
    seed: Option<u64>,
}

impl EnsembleConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> EnsembleConfigBuilder {
        EnsembleConfigBuilder::default()
    }

    /// Number of paths to simulate.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Simulation horizon in years.
    #[inline]
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Step size in years.
    #[inline]
    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// The diffusion model driving every path.
    #[inline]
    pub fn model(&self) -> DiffusionModel {
        self.model
    }

    /// Flat discount rate for present-value conversion.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Base seed, if the run is meant to be reproducible.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Builder for [`EnsembleConfig`].
#[derive(Debug, Clone, Default)]
pub struct EnsembleConfigBuilder {
    n_paths: Option<usize>,
    total_time: Option<f64>,
    delta_t: Option<f64>,
    model_name: Option<String>,
    drift: Option<f64>,
    volatility: Option<f64>,
    rate: Option<f64>,
    seed: Option<u64>,
}

impl EnsembleConfigBuilder {
    /// Sets the number of paths (must be at least 1).
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the simulation horizon in years.
    #[inline]
    pub fn total_time(mut self, total_time: f64) -> Self {
        self.total_time = Some(total_time);
        self
    }

    /// Sets the step size in years.
    #[inline]
    pub fn delta_t(mut self, delta_t: f64) -> Self {
        self.delta_t = Some(delta_t);
        self
    }

    /// Selects the model family by registry name (e.g. `"black-scholes"`).
    #[inline]
    pub fn model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = Some(name.into());
        self
    }

    /// Sets the model drift parameter.
    #[inline]
    pub fn drift(mut self, drift: f64) -> Self {
        self.drift = Some(drift);
        self
    }

    /// Sets the model volatility parameter.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the flat discount rate.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets a base seed for reproducible generation. Without one, every
    /// `generate` call draws fresh entropy.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn required_f64(value: Option<f64>, name: &'static str) -> Result<f64, ConfigError> {
        value.ok_or(ConfigError::InvalidParameter {
            name,
            reason: "must be specified".to_string(),
        })
    }

    /// Validates the parameters and builds the configuration.
    ///
    /// The model name is resolved here, so an unsupported family fails at
    /// construction, never at generation time.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidParameter`] for missing fields, `n_paths`
    ///   of zero, or non-finite numeric inputs
    /// - [`ConfigError::Model`] for an unknown model name or bad model
    ///   parameters
    pub fn build(self) -> Result<EnsembleConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            reason: "must be specified".to_string(),
        })?;
        if n_paths == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "n_paths",
                reason: "must be at least 1".to_string(),
            });
        }

        let total_time = Self::required_f64(self.total_time, "total_time")?;
        let delta_t = Self::required_f64(self.delta_t, "delta_t")?;
        let drift = Self::required_f64(self.drift, "drift")?;
        let volatility = Self::required_f64(self.volatility, "volatility")?;
        let rate = Self::required_f64(self.rate, "rate")?;

        if !rate.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "rate",
                reason: format!("must be finite, got {rate}"),
            });
        }

        let model_name = self.model_name.ok_or(ConfigError::InvalidParameter {
            name: "model_name",
            reason: "must be specified".to_string(),
        })?;
        let model = DiffusionModel::from_name(&model_name, drift, volatility)?;

        // Grid validation (positive, finite, at least one period) happens in
        // TimeGrid::new; run it here too so build() is the single gate.
        TimeGrid::new(total_time, delta_t)?;

        Ok(EnsembleConfig {
            n_paths,
            total_time,
            delta_t,
            model,
            rate,
            seed: self.seed,
        })
    }
}

/// A generated collection of simulation paths.
///
/// Invariant: all paths share the ensemble's grid, so they have identical
/// length and step size. The collection is empty until [`generate`] runs;
/// pricing against an ungenerated ensemble is an explicit error rather than
/// an empty result.
///
/// [`generate`]: PathEnsemble::generate
pub struct PathEnsemble {
    config: EnsembleConfig,
    grid: TimeGrid,
    curve: FlatCurve<f64>,
    paths: Vec<Path>,
}

impl PathEnsemble {
    /// Creates an empty (ungenerated) ensemble from a validated
    /// configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Grid`] if the horizon/step pair yields no periods.
    pub fn new(config: EnsembleConfig) -> Result<Self, ConfigError> {
        let grid = TimeGrid::new(config.total_time, config.delta_t)?;
        let curve = FlatCurve::new(config.rate);
        Ok(Self {
            config,
            grid,
            curve,
            paths: Vec::new(),
        })
    }

    /// Simulates all paths from the given initial value.
    ///
    /// Every path starts at `initial_value` and evolves through
    /// `n_periods - 1` Euler-Maruyama steps, the model's drift and
    /// volatility evaluated at the pre-step state. Calling `generate` again
    /// discards the previous paths and resimulates with fresh randomness
    /// (or, with a configured seed, the same randomness; the call is
    /// idempotent in distribution either way).
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidParameter`] if `initial_value` is not finite.
    pub fn generate(&mut self, initial_value: f64) -> Result<(), ConfigError> {
        if !initial_value.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "initial_value",
                reason: format!("must be finite, got {initial_value}"),
            });
        }

        let base_seed = self.config.seed.unwrap_or_else(rand::random);
        let model = self.config.model;
        let n_periods = self.grid.n_periods();
        let delta_t = self.grid.delta_t();

        self.paths = (0..self.config.n_paths)
            .into_par_iter()
            .map(|path_idx| {
                let mut rng = SimRng::from_seed(stream_seed(base_seed, path_idx as u64));
                let mut path = Path::filled(initial_value, n_periods, delta_t);

                let mut state = initial_value;
                let values = path.values_mut();
                for step in 0..n_periods - 1 {
                    let t = (step + 1) as f64 * delta_t;
                    state = model.step(state, t, delta_t, rng.normal());
                    values[step + 1] = state;
                }

                path
            })
            .collect();

        Ok(())
    }

    /// True once [`generate`](Self::generate) has populated the ensemble.
    #[inline]
    pub fn is_generated(&self) -> bool {
        !self.paths.is_empty()
    }

    /// The generated paths. Empty before the first `generate` call.
    #[inline]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// The shared time grid.
    #[inline]
    pub fn time_grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// The simulation configuration.
    #[inline]
    pub fn config(&self) -> &EnsembleConfig {
        &self.config
    }

    /// Simulation horizon in years (the default instrument expiry).
    #[inline]
    pub fn total_time(&self) -> f64 {
        self.config.total_time
    }

    /// Present-value multiplier for a cash flow at `date`, from the
    /// ensemble's flat rate: `exp(-rate * date)`.
    ///
    /// # Errors
    ///
    /// [`MarketDataError::InvalidMaturity`] for a negative or non-finite
    /// date.
    #[inline]
    pub fn discount(&self, date: f64) -> Result<f64, MarketDataError> {
        self.curve.discount_factor(date)
    }
}
