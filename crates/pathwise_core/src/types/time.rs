//! Simulation time grid.
//!
//! Every path in an ensemble shares one [`TimeGrid`]: a fixed number of
//! equally spaced sample dates `0, delta_t, 2*delta_t, ...`. The grid is the
//! single source of truth for period counts and date arithmetic, so path
//! storage and continuous-time lookups can never disagree about the
//! discretisation.

use serde::{Deserialize, Serialize};

use super::error::GridError;

/// Equally spaced simulation time grid.
///
/// The number of periods is `floor(total_time / delta_t)`; sample `i` sits at
/// date `i * delta_t`. Note that the last sample date,
/// `(n_periods - 1) * delta_t`, may fall short of `total_time` when the
/// horizon is not an exact multiple of the step.
///
/// # Examples
///
/// ```
/// use pathwise_core::types::TimeGrid;
///
/// let grid = TimeGrid::new(1.0, 0.25).unwrap();
/// assert_eq!(grid.n_periods(), 4);
/// assert_eq!(grid.date(2), 0.5);
/// assert_eq!(grid.last_date(), 0.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    total_time: f64,
    delta_t: f64,
    n_periods: usize,
}

impl TimeGrid {
    /// Builds a grid covering `total_time` years in steps of `delta_t`.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidTotalTime`] if `total_time` is not positive and
    ///   finite
    /// - [`GridError::InvalidStep`] if `delta_t` is not positive and finite
    /// - [`GridError::Empty`] if the horizon is shorter than one step
    pub fn new(total_time: f64, delta_t: f64) -> Result<Self, GridError> {
        if !(total_time.is_finite() && total_time > 0.0) {
            return Err(GridError::InvalidTotalTime(total_time));
        }
        if !(delta_t.is_finite() && delta_t > 0.0) {
            return Err(GridError::InvalidStep(delta_t));
        }

        let n_periods = (total_time / delta_t).floor() as usize;
        if n_periods == 0 {
            return Err(GridError::Empty {
                total_time,
                delta_t,
            });
        }

        Ok(Self {
            total_time,
            delta_t,
            n_periods,
        })
    }

    /// Returns the simulation horizon in years.
    #[inline]
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Returns the step size in years.
    #[inline]
    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Returns the number of sample dates (including date zero).
    #[inline]
    pub fn n_periods(&self) -> usize {
        self.n_periods
    }

    /// Returns the date of sample `i`, i.e. `i * delta_t`.
    ///
    /// Dates past the end of the grid are still well defined arithmetic;
    /// bounds are enforced by the path lookup, not here.
    #[inline]
    pub fn date(&self, i: usize) -> f64 {
        i as f64 * self.delta_t
    }

    /// Returns the last sample date, `(n_periods - 1) * delta_t`.
    #[inline]
    pub fn last_date(&self) -> f64 {
        self.date(self.n_periods - 1)
    }

    /// Iterates over all sample dates in order.
    pub fn dates(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.n_periods).map(|i| self.date(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_exact_division() {
        let grid = TimeGrid::new(1.0, 0.25).unwrap();
        assert_eq!(grid.n_periods(), 4);
        assert_eq!(grid.total_time(), 1.0);
        assert_eq!(grid.delta_t(), 0.25);
    }

    #[test]
    fn test_grid_floors_period_count() {
        // 0.9 / 0.25 = 3.6 -> 3 periods
        let grid = TimeGrid::new(0.9, 0.25).unwrap();
        assert_eq!(grid.n_periods(), 3);
        assert_eq!(grid.last_date(), 0.5);
    }

    #[test]
    fn test_grid_dates() {
        let grid = TimeGrid::new(1.0, 0.25).unwrap();
        let dates: Vec<f64> = grid.dates().collect();
        assert_eq!(dates, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_grid_invalid_total_time() {
        assert!(matches!(
            TimeGrid::new(0.0, 0.25),
            Err(GridError::InvalidTotalTime(_))
        ));
        assert!(matches!(
            TimeGrid::new(-1.0, 0.25),
            Err(GridError::InvalidTotalTime(_))
        ));
        assert!(matches!(
            TimeGrid::new(f64::NAN, 0.25),
            Err(GridError::InvalidTotalTime(_))
        ));
    }

    #[test]
    fn test_grid_invalid_step() {
        assert!(matches!(
            TimeGrid::new(1.0, 0.0),
            Err(GridError::InvalidStep(_))
        ));
        assert!(matches!(
            TimeGrid::new(1.0, f64::INFINITY),
            Err(GridError::InvalidStep(_))
        ));
    }

    #[test]
    fn test_grid_empty() {
        // Horizon shorter than one step must fail fast, not produce an
        // ensemble of zero-length paths.
        let err = TimeGrid::new(0.1, 0.25).unwrap_err();
        assert!(matches!(err, GridError::Empty { .. }));
    }

    #[test]
    fn test_grid_single_period() {
        let grid = TimeGrid::new(0.25, 0.25).unwrap();
        assert_eq!(grid.n_periods(), 1);
        assert_eq!(grid.last_date(), 0.0);
    }

    #[test]
    fn test_grid_monthly_scenario() {
        // One month in 1000 steps, a typical short-dated option resolution.
        let total = 1.0 / 12.0;
        let grid = TimeGrid::new(total, total / 1000.0).unwrap();
        // Floating-point division may land a hair under 1000.
        assert!(grid.n_periods() == 1000 || grid.n_periods() == 999);
    }
}
