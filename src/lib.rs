#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Named constants used by the formula catalog.
pub mod constants;
/// Shared numerical primitives.
pub mod math;
/// Petroleum reservoir and production formulas.
pub mod petroleum;
/// Electrical power and machine formulas.
pub mod electrical;
/// Discounted-cashflow and return formulas.
pub mod finance;
/// Manufacturing quality metrics.
pub mod quality;
/// Descriptive statistics and forecasting helpers.
pub mod analytics;
/// Budget ledger state and activity records.
pub mod ledger;
/// Parsing boundary for raw text input.
pub mod input;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
