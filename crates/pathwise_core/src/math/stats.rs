//! Sample statistics for Monte Carlo aggregation.
//!
//! The bootstrap estimator needs the mean and the *population* standard
//! deviation (divide by `n`, not `n - 1`) of the resampled means. The
//! population form is the fixed contract of the interval; with the resample
//! counts in play the distinction is far below the Monte Carlo noise floor
//! anyway.

/// Arithmetic mean. Returns 0.0 for an empty slice; callers that care reject
/// empty samples before aggregating.
#[inline]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (normalised by `n`).
#[inline]
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation (normalised by `n`).
#[inline]
pub fn population_std(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_simple() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_population_variance_constant_sample() {
        assert_eq!(population_variance(&[5.0; 10]), 0.0);
    }

    #[test]
    fn test_population_variance_known_value() {
        // Var([1, 2, 3, 4]) with population normalisation is 1.25.
        assert_relative_eq!(
            population_variance(&[1.0, 2.0, 3.0, 4.0]),
            1.25,
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_population_std_is_sqrt_of_variance() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // Classic textbook sample: population std is exactly 2.
        assert_relative_eq!(population_std(&data), 2.0, epsilon = 1e-14);
    }

    #[test]
    fn test_population_std_single_value() {
        assert_eq!(population_std(&[42.0]), 0.0);
    }
}
