//! Descriptive statistics and forecasting helpers.

use crate::errors::DomainError;
use crate::math::Scalar;

/// Computes the z-score of `x` against a distribution mean and standard
/// deviation.
///
/// z = (x - mean) / std. Fails when `std` is not strictly positive.
pub fn z_score(x: Scalar, mean: Scalar, std: Scalar) -> Result<Scalar, DomainError> {
    if std <= 0.0 {
        return Err(DomainError::positive("std"));
    }
    Ok((x - mean) / std)
}

/// Computes the next simple-exponential-smoothing forecast.
///
/// F_t = α · A_(t-1) + (1 - α) · F_(t-1). The smoothing factor must lie in
/// the half-open interval `(0, 1]`; α = 1 degenerates to the last actual.
pub fn exponential_smoothing(
    prev_forecast: Scalar,
    actual: Scalar,
    alpha: Scalar,
) -> Result<Scalar, DomainError> {
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(DomainError::new("alpha", "in (0, 1]"));
    }
    Ok(alpha * actual + (1.0 - alpha) * prev_forecast)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn z_score_matches_hand_calc() {
        let z = z_score(85.0, 70.0, 10.0).unwrap();
        assert_relative_eq!(z, 1.5);
    }

    #[test]
    fn the_mean_scores_zero() {
        assert_relative_eq!(z_score(70.0, 70.0, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn z_score_rejects_nonpositive_std() {
        let err = z_score(85.0, 70.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "std must be > 0");
        assert!(z_score(85.0, 70.0, -1.0).is_err());
    }

    #[test]
    fn smoothing_blends_forecast_toward_the_actual() {
        let f = exponential_smoothing(100.0, 120.0, 0.3).unwrap();
        assert_relative_eq!(f, 106.0, epsilon = 1.0e-12);
    }

    #[test]
    fn full_weight_returns_the_actual() {
        let f = exponential_smoothing(100.0, 120.0, 1.0).unwrap();
        assert_relative_eq!(f, 120.0);
    }

    #[test]
    fn smoothing_rejects_alpha_outside_half_open_interval() {
        let err = exponential_smoothing(100.0, 120.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "alpha must be in (0, 1]");
        assert!(exponential_smoothing(100.0, 120.0, 1.001).is_err());
        assert!(exponential_smoothing(100.0, 120.0, -0.3).is_err());
        assert!(exponential_smoothing(100.0, 120.0, Scalar::NAN).is_err());
    }
}
