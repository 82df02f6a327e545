//! Convenience re-exports for working with the formula catalog and ledger.

pub use crate::analytics::{exponential_smoothing, z_score};
pub use crate::constants::*;
pub use crate::electrical::{motor_efficiency, three_phase_power_kw};
pub use crate::errors::{DomainError, FieldcalcError};
pub use crate::finance::{expected_return, npv, roi, simple_interest};
pub use crate::input::{parse_kind, parse_label, parse_months, parse_scalar, ParseError};
pub use crate::ledger::{Activity, ActivityKind, ActivityLog, ExpectedReturn};
pub use crate::math::{in_unit_interval, Scalar};
pub use crate::petroleum::{api_gravity, darcy_flow_rate, gor_from_rates};
pub use crate::quality::{defect_rate, oee};
