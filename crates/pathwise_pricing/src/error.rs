//! Error types for the pricing kernel.
//!
//! Three families, matching where a failure can surface:
//! [`ConfigError`] at ensemble construction, [`PathError`] on path access,
//! and [`PricingError`] during instrument pricing. Every operation in the
//! kernel is a pure computation over in-memory data, so there are no
//! transient failures and no retries: each error is surfaced once, to the
//! caller, with no recovery path.

use pathwise_core::market_data::MarketDataError;
use pathwise_core::types::GridError;
use pathwise_models::ModelError;
use thiserror::Error;

/// Bounds failures on path access.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// Index outside `[0, len)`.
    #[error("path index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Path length.
        len: usize,
    },

    /// Date lookup past the final sample date (or negative).
    #[error("date {date} outside path horizon [0, {horizon}]")]
    DateOutOfRange {
        /// Requested date in years.
        date: f64,
        /// Last sample date of the path.
        horizon: f64,
    },
}

/// Ensemble construction and generation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A simulation parameter failed validation.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violation.
        reason: String,
    },

    /// The time grid could not be built.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The diffusion model could not be built.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Instrument pricing failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// The ensemble has not been generated yet.
    #[error("ensemble has not been generated: call generate() before pricing")]
    NotGenerated,

    /// The bootstrap received an empty sample.
    #[error("cannot bootstrap an empty sample")]
    EmptySample,

    /// A pricing parameter failed validation.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violation.
        reason: String,
    },

    /// Payoff evaluation walked off the path.
    #[error(transparent)]
    Path(#[from] PathError),

    /// Discounting rejected the expiry date.
    #[error(transparent)]
    Market(#[from] MarketDataError),
}
