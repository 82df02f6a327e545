//! Electrical power and machine formulas.

use crate::constants::WATTS_PER_KILOWATT;
use crate::errors::DomainError;
use crate::math::{in_unit_interval, Scalar};

/// Computes three-phase active power in kilowatts.
///
/// P = √3 · V_LL · I · PF / 1000 with line-line volts and line amperes.
/// Fails when `v_ll` or `current_a` is negative, or when `power_factor`
/// falls outside `[0, 1]`.
pub fn three_phase_power_kw(
    v_ll: Scalar,
    current_a: Scalar,
    power_factor: Scalar,
) -> Result<Scalar, DomainError> {
    if v_ll < 0.0 {
        return Err(DomainError::non_negative("v_ll"));
    }
    if current_a < 0.0 {
        return Err(DomainError::non_negative("current_a"));
    }
    if !in_unit_interval(power_factor) {
        return Err(DomainError::unit_interval("power_factor"));
    }
    Ok(Scalar::sqrt(3.0) * v_ll * current_a * power_factor / WATTS_PER_KILOWATT)
}

/// Computes motor efficiency as the output/input power ratio.
///
/// Fails when `input_kw` is not strictly positive.
pub fn motor_efficiency(output_kw: Scalar, input_kw: Scalar) -> Result<Scalar, DomainError> {
    if input_kw <= 0.0 {
        return Err(DomainError::positive("input_kw"));
    }
    Ok(output_kw / input_kw)
}
