//! Petroleum reservoir and production formulas in oilfield field units.

use crate::constants::{API_GRAVITY_NUMERATOR, API_GRAVITY_OFFSET, DARCY_FIELD_CONSTANT};
use crate::errors::DomainError;
use crate::math::Scalar;

/// Computes API gravity in degrees from the oil specific gravity at 60°F.
///
/// API = 141.5 / SG - 131.5. Fails when `sg_oil` is not strictly positive.
pub fn api_gravity(sg_oil: Scalar) -> Result<Scalar, DomainError> {
    if sg_oil <= 0.0 {
        return Err(DomainError::positive("sg_oil"));
    }
    Ok(API_GRAVITY_NUMERATOR / sg_oil - API_GRAVITY_OFFSET)
}

/// Computes the producing gas-oil ratio in scf/STB from surface rates.
///
/// Fails when the oil rate `q_oil_stb_d` is not strictly positive.
pub fn gor_from_rates(q_gas_scf_d: Scalar, q_oil_stb_d: Scalar) -> Result<Scalar, DomainError> {
    if q_oil_stb_d <= 0.0 {
        return Err(DomainError::positive("q_oil_stb_d"));
    }
    Ok(q_gas_scf_d / q_oil_stb_d)
}

/// Estimates a linear Darcy flow rate in STB/d from field-unit inputs.
///
/// q = 0.001127 · k(md) · A(ft²) · ΔP(psi) / (μ(cp) · L(ft)) / B_o.
/// Fails when `mu_cp`, `length_ft`, or `b_o` is not strictly positive;
/// the first offender in that order is reported.
pub fn darcy_flow_rate(
    k_md: Scalar,
    area_ft2: Scalar,
    dp_psi: Scalar,
    mu_cp: Scalar,
    length_ft: Scalar,
    b_o: Scalar,
) -> Result<Scalar, DomainError> {
    if mu_cp <= 0.0 {
        return Err(DomainError::positive("mu_cp"));
    }
    if length_ft <= 0.0 {
        return Err(DomainError::positive("length_ft"));
    }
    if b_o <= 0.0 {
        return Err(DomainError::positive("b_o"));
    }
    Ok(DARCY_FIELD_CONSTANT * k_md * area_ft2 * dp_psi / (mu_cp * length_ft) / b_o)
}
