//! Diffusion dynamics with static dispatch over model families.
//!
//! A [`DiffusionModel`] supplies the drift and volatility functions for the
//! Euler-Maruyama update
//!
//! ```text
//! S(t+dt) = S(t) + drift(S, t) * dt + vol(S, t) * sqrt(dt) * Z,   Z ~ N(0, 1)
//! ```
//!
//! Each family is an enum variant carrying its own parameter payload, and
//! every operation pattern-matches on the variant. The arithmetic update
//! above is the fixed contract of the engine; families plug in only through
//! their `drift` and `vol` coefficient functions.

use super::error::ModelError;

/// Name aliases accepted for the Black-Scholes-Merton family.
const BLACK_SCHOLES_ALIASES: &[&str] = &[
    "bs",
    "black-scholes",
    "black scholes",
    "merton",
    "black-scholes-merton",
    "black scholes merton",
];

/// Stochastic model for the simulated underlying.
///
/// Only the lognormal Black-Scholes-Merton family is supported at present;
/// the enum shape leaves room for mean-reverting or other families without
/// touching the path generator.
///
/// # Examples
///
/// ```
/// use pathwise_models::models::DiffusionModel;
///
/// let model = DiffusionModel::from_name("bs", 0.05, 0.2).unwrap();
///
/// // Lognormal dynamics: both coefficients scale with the state.
/// assert_eq!(model.drift(100.0, 0.0), 5.0);
/// assert_eq!(model.vol(100.0, 0.0), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiffusionModel {
    /// Lognormal dynamics: `drift(S) = mu * S`, `vol(S) = sigma * S`.
    BlackScholes {
        /// Annualised drift rate `mu`.
        drift: f64,
        /// Annualised volatility `sigma`.
        volatility: f64,
    },
}

impl DiffusionModel {
    /// Looks up a model family by name and validates its parameters.
    ///
    /// Matching is case-insensitive over the alias registry; for the
    /// Black-Scholes-Merton family the accepted spellings are `bs`,
    /// `black-scholes`, `black scholes`, `merton`, `black-scholes-merton`
    /// and `black scholes merton`.
    ///
    /// # Errors
    ///
    /// - [`ModelError::UnsupportedModel`] for a name outside the registry
    /// - [`ModelError::InvalidParameter`] for non-finite drift, or negative
    ///   or non-finite volatility
    pub fn from_name(name: &str, drift: f64, volatility: f64) -> Result<Self, ModelError> {
        let key = name.trim().to_lowercase();
        if BLACK_SCHOLES_ALIASES.contains(&key.as_str()) {
            Self::black_scholes(drift, volatility)
        } else {
            Err(ModelError::UnsupportedModel {
                name: name.to_string(),
            })
        }
    }

    /// Builds a Black-Scholes-Merton model directly.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidParameter`] for non-finite drift, or negative or
    /// non-finite volatility. Zero volatility is allowed (deterministic
    /// dynamics, useful for validation runs).
    pub fn black_scholes(drift: f64, volatility: f64) -> Result<Self, ModelError> {
        if !drift.is_finite() {
            return Err(ModelError::InvalidParameter {
                name: "drift",
                reason: format!("must be finite, got {drift}"),
            });
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(ModelError::InvalidParameter {
                name: "volatility",
                reason: format!("must be finite and non-negative, got {volatility}"),
            });
        }
        Ok(Self::BlackScholes { drift, volatility })
    }

    /// Canonical name of the model family.
    pub fn family_name(&self) -> &'static str {
        match self {
            Self::BlackScholes { .. } => "black-scholes-merton",
        }
    }

    /// Drift coefficient `drift(S, t)` of the SDE.
    ///
    /// The time argument is unused by the lognormal family but is part of
    /// the contract so time-dependent families can slot in.
    #[inline]
    pub fn drift(&self, state: f64, _t: f64) -> f64 {
        match self {
            Self::BlackScholes { drift, .. } => drift * state,
        }
    }

    /// Volatility coefficient `vol(S, t)` of the SDE.
    #[inline]
    pub fn vol(&self, state: f64, _t: f64) -> f64 {
        match self {
            Self::BlackScholes { volatility, .. } => volatility * state,
        }
    }

    /// Advances the state by one Euler-Maruyama step.
    ///
    /// Both coefficients are evaluated at the *current* state, then
    /// `S + drift * dt + vol * sqrt(dt) * z` is returned. `z` must be a
    /// fresh standard normal draw.
    #[inline]
    pub fn step(&self, state: f64, t: f64, dt: f64, z: f64) -> f64 {
        state + self.drift(state, t) * dt + self.vol(state, t) * dt.sqrt() * z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_name_accepts_all_aliases() {
        for alias in BLACK_SCHOLES_ALIASES {
            let model = DiffusionModel::from_name(alias, 0.05, 0.2);
            assert!(model.is_ok(), "alias '{alias}' should resolve");
        }
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert!(DiffusionModel::from_name("Black-Scholes", 0.05, 0.2).is_ok());
        assert!(DiffusionModel::from_name("BS", 0.05, 0.2).is_ok());
        assert!(DiffusionModel::from_name("  Merton ", 0.05, 0.2).is_ok());
    }

    #[test]
    fn test_from_name_rejects_unknown_family() {
        let err = DiffusionModel::from_name("unsupported-model", 0.05, 0.2).unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedModel { name } if name == "unsupported-model"));
    }

    #[test]
    fn test_invalid_parameters_fail_at_construction() {
        assert!(matches!(
            DiffusionModel::black_scholes(f64::NAN, 0.2),
            Err(ModelError::InvalidParameter { name: "drift", .. })
        ));
        assert!(matches!(
            DiffusionModel::black_scholes(0.05, -0.1),
            Err(ModelError::InvalidParameter {
                name: "volatility",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_volatility_is_allowed() {
        let model = DiffusionModel::black_scholes(0.05, 0.0).unwrap();
        assert_eq!(model.vol(100.0, 0.0), 0.0);
    }

    #[test]
    fn test_lognormal_coefficients_scale_with_state() {
        let model = DiffusionModel::black_scholes(0.05, 0.2).unwrap();
        assert_relative_eq!(model.drift(100.0, 0.5), 5.0);
        assert_relative_eq!(model.drift(200.0, 0.5), 10.0);
        assert_relative_eq!(model.vol(100.0, 0.5), 20.0);
        assert_relative_eq!(model.vol(200.0, 0.5), 40.0);
    }

    #[test]
    fn test_step_matches_update_formula() {
        let model = DiffusionModel::black_scholes(0.05, 0.2).unwrap();
        let (s, t, dt, z): (f64, f64, f64, f64) = (100.0, 0.25, 1.0 / 252.0, 0.7);

        let expected = s + 0.05 * s * dt + 0.2 * s * dt.sqrt() * z;
        assert_eq!(model.step(s, t, dt, z), expected);
    }

    #[test]
    fn test_step_zero_vol_is_deterministic() {
        let model = DiffusionModel::black_scholes(0.05, 0.0).unwrap();
        let dt = 0.01;
        // The shock must have no effect at zero volatility.
        assert_eq!(model.step(100.0, 0.0, dt, 3.0), model.step(100.0, 0.0, dt, -3.0));
        assert_relative_eq!(
            model.step(100.0, 0.0, dt, 1.0),
            100.0 * (1.0 + 0.05 * dt),
            epsilon = 1e-12
        );
    }
}
