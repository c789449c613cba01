//! # Pathwise Models (Model Layer)
//!
//! Stochastic model families for the pathwise Monte Carlo engine, plus the
//! closed-form Black-Scholes pricer used to cross-check simulated prices.
//!
//! Model selection is a tagged enum ([`models::DiffusionModel`]) rather than
//! trait objects: the simulation loop pattern-matches on the variant, so
//! adding a family means adding a variant and its match arms while the
//! sampler and the ensemble generator stay untouched.
//!
//! # Example
//!
//! ```
//! use pathwise_models::models::DiffusionModel;
//!
//! let model = DiffusionModel::from_name("black-scholes", 0.05, 0.2).unwrap();
//! assert_eq!(model.family_name(), "black-scholes-merton");
//!
//! // Unknown names fail at construction, not at first simulation step.
//! assert!(DiffusionModel::from_name("heston", 0.05, 0.2).is_err());
//! ```

pub mod analytical;
pub mod models;

pub use analytical::BlackScholes;
pub use models::{DiffusionModel, ModelError};
