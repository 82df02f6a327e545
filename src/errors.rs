//! Shared error types used across submodules.

use thiserror::Error;

use crate::input::ParseError;

/// Raised when a formula argument falls outside its mathematical domain.
///
/// Carries the offending parameter name and the bound it violated, so a
/// caller can point at the exact input instead of the whole call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{parameter} must be {requirement}")]
pub struct DomainError {
    parameter: &'static str,
    requirement: &'static str,
}

impl DomainError {
    /// Creates a domain error with a free-form requirement description.
    #[must_use]
    pub fn new(parameter: &'static str, requirement: &'static str) -> Self {
        Self {
            parameter,
            requirement,
        }
    }

    /// Shorthand for a strictly positive requirement.
    #[must_use]
    pub fn positive(parameter: &'static str) -> Self {
        Self::new(parameter, "> 0")
    }

    /// Shorthand for a non-negative requirement.
    #[must_use]
    pub fn non_negative(parameter: &'static str) -> Self {
        Self::new(parameter, ">= 0")
    }

    /// Shorthand for a closed unit-interval requirement.
    #[must_use]
    pub fn unit_interval(parameter: &'static str) -> Self {
        Self::new(parameter, "between 0 and 1")
    }

    /// Shorthand for a non-zero requirement.
    #[must_use]
    pub fn non_zero(parameter: &'static str) -> Self {
        Self::new(parameter, "non-zero")
    }

    /// Name of the offending parameter.
    #[must_use]
    pub fn parameter(&self) -> &'static str {
        self.parameter
    }

    /// Description of the violated requirement.
    #[must_use]
    pub fn requirement(&self) -> &'static str {
        self.requirement
    }
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum FieldcalcError {
    /// Wraps formula domain violations.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Wraps text-input parsing failures.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
