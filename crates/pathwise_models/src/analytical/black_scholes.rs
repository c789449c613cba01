//! Black-Scholes closed-form European option pricing.
//!
//! The Monte Carlo engine is validated against these formulas:
//!
//! ```text
//! C = S * N(d1) - K * exp(-rT) * N(d2)
//! P = K * exp(-rT) * N(-d2) - S * N(-d1)
//! d1 = (ln(S/K) + (r + sigma^2 / 2) * T) / (sigma * sqrt(T))
//! d2 = d1 - sigma * sqrt(T)
//! ```

use pathwise_core::math::distributions::norm_cdf;

use super::error::AnalyticalError;

/// Closed-form Black-Scholes pricer for European calls and puts.
///
/// # Examples
///
/// ```
/// use pathwise_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K * exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    spot: f64,
    rate: f64,
    volatility: f64,
}

impl BlackScholes {
    /// Builds a pricer for the given spot, continuously compounded rate, and
    /// annualised volatility.
    ///
    /// # Errors
    ///
    /// - [`AnalyticalError::InvalidSpot`] if `spot <= 0`
    /// - [`AnalyticalError::InvalidVolatility`] if `volatility <= 0`
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if !(volatility.is_finite() && volatility > 0.0) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// The `d1` term for a given strike and expiry.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;
        (log_moneyness + drift) / vol_sqrt_t
    }

    /// The `d2` term: `d1 - sigma * sqrt(T)`.
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// European call price for the given strike and expiry (years).
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        self.spot * norm_cdf(d1) - strike * (-self.rate * expiry).exp() * norm_cdf(d2)
    }

    /// European put price for the given strike and expiry (years).
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        strike * (-self.rate * expiry).exp() * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }
}
