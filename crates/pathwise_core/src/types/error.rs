//! Error types for core type construction.

use thiserror::Error;

/// Errors raised while building a [`TimeGrid`](super::TimeGrid).
///
/// All variants are construction-time failures: a grid that validates once is
/// valid for the lifetime of the simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Total simulation horizon must be a positive, finite number of years.
    #[error("invalid total time {0}: must be positive and finite")]
    InvalidTotalTime(f64),

    /// Step size must be a positive, finite number of years.
    #[error("invalid step size {0}: must be positive and finite")]
    InvalidStep(f64),

    /// The horizon is shorter than a single step, so the grid has no periods.
    #[error("degenerate grid: total time {total_time} yields no periods at step {delta_t}")]
    Empty {
        /// Requested horizon in years.
        total_time: f64,
        /// Requested step size in years.
        delta_t: f64,
    },
}
