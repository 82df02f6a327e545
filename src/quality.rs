//! Manufacturing quality metrics.

use crate::errors::DomainError;
use crate::math::{in_unit_interval, Scalar};

/// Computes overall equipment effectiveness.
///
/// OEE = availability · performance · quality with every factor a decimal
/// in `[0, 1]`. Fails on the first factor outside that range.
pub fn oee(availability: Scalar, performance: Scalar, quality: Scalar) -> Result<Scalar, DomainError> {
    if !in_unit_interval(availability) {
        return Err(DomainError::unit_interval("availability"));
    }
    if !in_unit_interval(performance) {
        return Err(DomainError::unit_interval("performance"));
    }
    if !in_unit_interval(quality) {
        return Err(DomainError::unit_interval("quality"));
    }
    Ok(availability * performance * quality)
}

/// Computes the defect rate as defects per unit produced.
///
/// Fails when `total_units` is not strictly positive or `defects` is
/// negative.
pub fn defect_rate(defects: Scalar, total_units: Scalar) -> Result<Scalar, DomainError> {
    if total_units <= 0.0 {
        return Err(DomainError::positive("total_units"));
    }
    if defects < 0.0 {
        return Err(DomainError::non_negative("defects"));
    }
    Ok(defects / total_units)
}
