//! Discount curve abstractions.
//!
//! The pricing kernel only ever asks one question of a curve: what is the
//! present-value multiplier for a cash flow at date `t`? The [`DiscountCurve`]
//! trait captures that seam, and [`FlatCurve`] is the single implementation
//! the engine requires: a constant continuously compounded rate.

pub mod flat;

pub use flat::FlatCurve;

use num_traits::Float;

use super::error::MarketDataError;

/// Present-value discounting over year-fraction maturities.
pub trait DiscountCurve<T: Float> {
    /// Returns the discount factor `D(t)` for maturity `t >= 0`.
    ///
    /// # Errors
    ///
    /// [`MarketDataError::InvalidMaturity`] if `t` is negative or not finite.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Returns the continuously compounded zero rate for maturity `t > 0`.
    ///
    /// # Errors
    ///
    /// [`MarketDataError::InvalidMaturity`] if `t` is not strictly positive.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError>;
}
