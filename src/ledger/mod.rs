//! Budget ledger primitives: activity records and the log that owns them.

/// Activity value records and categories.
pub mod activity;
/// Ordered activity log and return projections.
pub mod log;

pub use activity::{Activity, ActivityKind};
pub use log::{ActivityLog, ExpectedReturn};
