//! Flat discount curve.

use num_traits::Float;

use super::DiscountCurve;
use crate::market_data::error::MarketDataError;

/// Discount curve with a single constant rate for all maturities.
///
/// The rate is an explicit field of the curve rather than an engine-wide
/// constant, so ensembles discounting at different rates can coexist without
/// shared state.
///
/// # Examples
///
/// ```
/// use pathwise_core::market_data::curves::{DiscountCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.01_f64);
/// let df = curve.discount_factor(2.0).unwrap();
/// assert!((df - (-0.02_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCurve<T: Float> {
    rate: T,
}

impl<T: Float> FlatCurve<T> {
    /// Builds a flat curve from a continuously compounded annual rate.
    ///
    /// Negative rates are allowed.
    #[inline]
    pub fn new(rate: T) -> Self {
        Self { rate }
    }

    /// Returns the constant rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: Float> DiscountCurve<T> for FlatCurve<T> {
    /// `D(t) = exp(-rate * t)`.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if !(t.is_finite() && t >= T::zero()) {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok((-self.rate * t).exp())
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if !(t.is_finite() && t > T::zero()) {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(self.rate)
    }
}
