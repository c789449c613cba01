//! Model construction errors.

use thiserror::Error;

/// Errors raised while constructing a diffusion model.
///
/// Both variants are construction-time failures so that a bad model name or
/// parameter surfaces immediately, never at the first simulation step.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// The requested model family is not in the registry.
    #[error("unsupported model '{name}': supported families are black-scholes-merton (aliases: bs, black-scholes, merton, ...)")]
    UnsupportedModel {
        /// The name as supplied by the caller.
        name: String,
    },

    /// A model parameter failed validation.
    #[error("invalid model parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violation.
        reason: String,
    },
}
