//! Errors for closed-form pricers.

use thiserror::Error;

/// Validation errors for analytical pricer construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticalError {
    /// Spot must be strictly positive for lognormal dynamics.
    #[error("invalid spot {spot}: must be strictly positive")]
    InvalidSpot {
        /// Offending spot.
        spot: f64,
    },

    /// Volatility must be strictly positive for the closed form.
    #[error("invalid volatility {volatility}: must be strictly positive")]
    InvalidVolatility {
        /// Offending volatility.
        volatility: f64,
    },
}
