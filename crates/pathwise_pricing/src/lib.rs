//! # Pathwise Pricing (Pricing Kernel)
//!
//! Monte Carlo simulation and bootstrap price estimation for path-dependent
//! derivatives.
//!
//! # Architecture
//!
//! ```text
//! PathEnsemble
//! ├── EnsembleConfig   (validated simulation parameters)
//! ├── DiffusionModel   (drift/vol dynamics, from pathwise_models)
//! ├── SimRng           (seeded per-worker random streams)
//! └── Vec<Path>        (owned trajectory storage)
//!
//! Instrument = Payoff + &PathEnsemble + expiry
//! Instrument::price -> bootstrap_mean_interval -> PriceInterval
//! ```
//!
//! Generation fans out one rayon task per path; bootstrap resampling fans
//! out one task per resample. Both derive independent RNG streams from a
//! base seed, so parallel runs stay statistically valid and seeded runs stay
//! reproducible.
//!
//! # Example
//!
//! ```
//! use pathwise_pricing::{EnsembleConfig, Instrument, PathEnsemble, Payoff};
//!
//! let config = EnsembleConfig::builder()
//!     .n_paths(1_000)
//!     .total_time(1.0 / 12.0)
//!     .delta_t(1.0 / 12.0 / 250.0)
//!     .model_name("black-scholes")
//!     .drift(0.0077)
//!     .volatility(0.06)
//!     .rate(0.0077)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut ensemble = PathEnsemble::new(config).unwrap();
//! ensemble.generate(2267.89).unwrap();
//!
//! let call = Instrument::new(&ensemble, Payoff::call(2250.0));
//! let interval = call.price_with_seed(1_000, 7).unwrap();
//! println!(
//!     "call in [{:.2}, {:.2}], point {:.2}",
//!     interval.lower, interval.upper, interval.point
//! );
//! ```

pub mod bootstrap;
pub mod ensemble;
pub mod error;
pub mod instrument;
pub mod path;
pub mod rng;

pub use bootstrap::{bootstrap_mean_interval, PriceInterval, DEFAULT_BOOTSTRAP_RESAMPLES};
pub use ensemble::{EnsembleConfig, EnsembleConfigBuilder, PathEnsemble};
pub use error::{ConfigError, PathError, PricingError};
pub use instrument::{Instrument, Payoff};
pub use path::{Path, DATE_EPSILON};
pub use rng::SimRng;
