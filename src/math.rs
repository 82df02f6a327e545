//! Shared numerical primitives.

/// Primary scalar type used across the crate.
pub type Scalar = f64;

/// Returns true when `value` lies in the closed interval `[0, 1]`.
#[must_use]
pub fn in_unit_interval(value: Scalar) -> bool {
    (0.0..=1.0).contains(&value)
}
