//! Time-indexed storage for one simulated trajectory.

use crate::error::PathError;

/// Fractional-date tolerance for [`Path::value_at_date`].
///
/// A date whose step fraction is below this is treated as sitting exactly on
/// the grid, which keeps `value_at_date(i * delta_t)` free of interpolation
/// noise from floating-point date arithmetic.
pub const DATE_EPSILON: f64 = 1e-6;

/// One simulated trajectory over a fixed time grid.
///
/// Sample `i` holds the process value at date `i * delta_t`. The length is
/// fixed at construction; only the generator mutates samples, and only
/// during simulation. Consumers see a frozen, read-only sequence.
///
/// # Examples
///
/// ```
/// use pathwise_pricing::{EnsembleConfig, PathEnsemble};
///
/// let config = EnsembleConfig::builder()
///     .n_paths(4)
///     .total_time(1.0)
///     .delta_t(0.25)
///     .model_name("black-scholes")
///     .drift(0.05)
///     .volatility(0.2)
///     .rate(0.01)
///     .seed(42)
///     .build()
///     .unwrap();
/// let mut ensemble = PathEnsemble::new(config).unwrap();
/// ensemble.generate(100.0).unwrap();
///
/// let path = &ensemble.paths()[0];
/// assert_eq!(path.get(0).unwrap(), 100.0);
/// assert_eq!(path.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    values: Vec<f64>,
    delta_t: f64,
}

impl Path {
    /// Creates a path of `n_periods` samples, each pre-filled with
    /// `initial_value`. The generator overwrites indices `1..n_periods`
    /// during simulation.
    pub(crate) fn filled(initial_value: f64, n_periods: usize, delta_t: f64) -> Self {
        Self {
            values: vec![initial_value; n_periods],
            delta_t,
        }
    }

    /// Mutable sample storage for the generator.
    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Returns the sample at index `i`.
    ///
    /// # Errors
    ///
    /// [`PathError::IndexOutOfRange`] if `i >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<f64, PathError> {
        self.values
            .get(index)
            .copied()
            .ok_or(PathError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    /// Returns the final sample, the process value at the last grid date.
    #[inline]
    pub fn last_value(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Returns the process value at an arbitrary date in `[0, horizon]`.
    ///
    /// The date is split into a whole number of steps `i` and a step
    /// fraction `f`. On-grid dates (`f` within [`DATE_EPSILON`] of zero)
    /// return `values[i]` exactly. Off-grid dates return
    ///
    /// ```text
    /// f * values[i] + (1 - f) * values[i + 1]
    /// ```
    ///
    /// Note the weighting: the step *fraction* multiplies the *earlier*
    /// sample. This backward-weighted convention is intentional and fixed.
    /// Downstream consumers depend on reproducing these exact values, so it
    /// must not be "corrected" to the textbook orientation.
    ///
    /// # Errors
    ///
    /// [`PathError::DateOutOfRange`] if `date` is negative, not finite, or
    /// past the final sample date.
    pub fn value_at_date(&self, date: f64) -> Result<f64, PathError> {
        let out_of_range = PathError::DateOutOfRange {
            date,
            horizon: self.horizon(),
        };

        if !date.is_finite() || date < 0.0 {
            return Err(out_of_range);
        }

        let steps = date / self.delta_t;
        let index = steps.trunc() as usize;
        let frac = steps.fract();

        if frac < DATE_EPSILON {
            if index >= self.values.len() {
                return Err(out_of_range);
            }
            Ok(self.values[index])
        } else {
            if index + 1 >= self.values.len() {
                return Err(out_of_range);
            }
            Ok(frac * self.values[index] + (1.0 - frac) * self.values[index + 1])
        }
    }

    /// Number of samples in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the path holds no samples. Never the case for generated
    /// paths; present for slice-like API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Step size of the underlying time grid.
    #[inline]
    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Date of the final sample: `(len - 1) * delta_t`.
    #[inline]
    pub fn horizon(&self) -> f64 {
        (self.values.len() - 1) as f64 * self.delta_t
    }

    /// Read-only view of the sample sequence.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over the sample dates, aligned with [`values`](Self::values).
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.values.len()).map(|i| i as f64 * self.delta_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp_path() -> Path {
        // Values 0, 10, 20, 30 at dates 0.0, 0.25, 0.5, 0.75.
        let mut path = Path::filled(0.0, 4, 0.25);
        for (i, slot) in path.values_mut().iter_mut().enumerate() {
            *slot = 10.0 * i as f64;
        }
        path
    }

    #[test]
    fn test_filled_prefills_every_sample() {
        let path = Path::filled(99.5, 8, 0.1);
        assert_eq!(path.len(), 8);
        assert!(path.values().iter().all(|v| *v == 99.5));
    }

    #[test]
    fn test_get_bounds_check() {
        let path = ramp_path();
        assert_eq!(path.get(3).unwrap(), 30.0);
        assert_eq!(
            path.get(4),
            Err(PathError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_last_value() {
        assert_eq!(ramp_path().last_value(), 30.0);
    }

    #[test]
    fn test_value_at_grid_dates_is_exact() {
        // delta_t = 0.25 is a power of two, so i * delta_t / delta_t is an
        // exact integer and always takes the epsilon branch.
        let path = ramp_path();
        for i in 0..4 {
            let date = i as f64 * 0.25;
            assert_eq!(path.value_at_date(date).unwrap(), path.get(i).unwrap());
        }
    }

    #[test]
    fn test_value_at_date_backward_weighted_interpolation() {
        let path = ramp_path();
        // Date 0.35 sits at steps = 1.4: index 1, fraction 0.4. The
        // convention weights the earlier sample by the fraction:
        // 0.4 * 10 + 0.6 * 20 = 16.
        let steps: f64 = 0.35 / 0.25;
        let frac = steps.fract();
        let expected = frac * 10.0 + (1.0 - frac) * 20.0;
        assert_eq!(path.value_at_date(0.35).unwrap(), expected);
        assert_relative_eq!(path.value_at_date(0.35).unwrap(), 16.0, epsilon = 1e-12);
    }

    #[test]
    fn test_value_at_date_near_grid_snaps_to_sample() {
        let path = ramp_path();
        // A date within DATE_EPSILON steps of the grid returns the sample
        // itself rather than interpolating against the next one.
        let date = 0.25 + 0.25 * (DATE_EPSILON / 2.0);
        assert_eq!(path.value_at_date(date).unwrap(), 10.0);
    }

    #[test]
    fn test_value_at_date_rejects_past_horizon() {
        let path = ramp_path();
        // 0.8 needs index 3 and 4; 4 is out of range.
        assert!(matches!(
            path.value_at_date(0.8),
            Err(PathError::DateOutOfRange { .. })
        ));
        assert!(matches!(
            path.value_at_date(100.0),
            Err(PathError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_value_at_date_rejects_negative_and_non_finite() {
        let path = ramp_path();
        assert!(path.value_at_date(-0.1).is_err());
        assert!(path.value_at_date(f64::NAN).is_err());
        assert!(path.value_at_date(f64::INFINITY).is_err());
    }

    #[test]
    fn test_horizon_and_times() {
        let path = ramp_path();
        assert_eq!(path.horizon(), 0.75);
        let times: Vec<f64> = path.times().collect();
        assert_eq!(times, vec![0.0, 0.25, 0.5, 0.75]);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn interpolated_value_stays_between_bracketing_samples(
                lo in -100.0..100.0_f64,
                hi in -100.0..100.0_f64,
                frac in 0.01..0.99_f64,
            ) {
                let mut path = Path::filled(0.0, 2, 0.5);
                path.values_mut()[0] = lo;
                path.values_mut()[1] = hi;

                let date = frac * 0.5;
                let value = path.value_at_date(date).unwrap();
                let (min, max) = if lo < hi { (lo, hi) } else { (hi, lo) };
                prop_assert!(value >= min - 1e-9 && value <= max + 1e-9);
            }

            #[test]
            fn on_grid_lookup_equals_indexed_access(
                i in 0usize..64,
            ) {
                // Power-of-two step: date arithmetic is exact.
                let mut path = Path::filled(0.0, 64, 0.125);
                for (j, slot) in path.values_mut().iter_mut().enumerate() {
                    *slot = (j * j) as f64;
                }
                let date = i as f64 * 0.125;
                prop_assert_eq!(
                    path.value_at_date(date).unwrap(),
                    path.get(i).unwrap()
                );
            }
        }
    }
}
