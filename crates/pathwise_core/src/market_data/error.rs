//! Market data error types.

use thiserror::Error;

/// Errors raised by market data queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarketDataError {
    /// Maturity outside the domain of the curve (e.g. negative).
    #[error("invalid maturity {t}: must be non-negative")]
    InvalidMaturity {
        /// Offending maturity in years.
        t: f64,
    },
}
