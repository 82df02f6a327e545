//! Named constants for the formula catalog.
//!
//! ## Units
//!
//! Petroleum constants assume oilfield field units: permeability in
//! millidarcies, area in square feet, pressure in psi, viscosity in
//! centipoise, length in feet, and rates in STB/d. Electrical constants
//! assume SI volts and amperes with power reported in kilowatts.
//!
//! ## References
//!
//! - API gravity definition: API MPMS Chapter 9 / ASTM D287 (hydrometer
//!   method), gravity at 60°F.
//! - Darcy field-unit prefactor 1.127 × 10⁻³: Craft, B. C. & Hawkins, M.
//!   (1991). Applied Petroleum Reservoir Engineering, 2nd ed.

/// Numerator of the API gravity correlation, dimensionless.
/// API = 141.5 / SG - 131.5 with SG measured at 60°F.
pub const API_GRAVITY_NUMERATOR: f64 = 141.5;
/// Offset of the API gravity correlation, dimensionless.
pub const API_GRAVITY_OFFSET: f64 = 131.5;
/// Darcy's law prefactor for field units, STB·cp·ft / (d·md·ft²·psi).
/// Converts md, ft², psi, cp, and ft into a surface rate in STB/d.
pub const DARCY_FIELD_CONSTANT: f64 = 0.001_127;
/// Watts per kilowatt.
pub const WATTS_PER_KILOWATT: f64 = 1_000.0;
/// Calendar months per year.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Returns the duration `months` expressed in years.
#[inline]
#[must_use]
pub fn years_from_months(months: u32) -> f64 {
    f64::from(months) / MONTHS_PER_YEAR
}
