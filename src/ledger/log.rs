use crate::finance;
use crate::math::Scalar;

use super::activity::Activity;

/// Expected-return projection for a single activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedReturn {
    /// Name of the projected activity.
    pub activity: String,
    /// Budget the projection is based on.
    pub budget: Scalar,
    /// Projected return amount.
    pub value: Scalar,
}

/// Ordered register of financial activities.
///
/// The log is a plain value owned by the caller and threaded through
/// explicitly; nothing here touches ambient or global state.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq)]
pub struct ActivityLog {
    name: String,
    entries: Vec<Activity>,
}

impl ActivityLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Appends an activity, keeping insertion order.
    pub fn add(&mut self, activity: Activity) {
        self.entries.push(activity);
    }

    /// Registered activities in insertion order.
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.entries
    }

    /// Removes every registered activity.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Projects the expected return of every activity at a per-month rate
    /// held for `months`.
    #[must_use]
    pub fn expected_returns(&self, monthly_rate: Scalar, months: u32) -> Vec<ExpectedReturn> {
        self.entries
            .iter()
            .map(|a| ExpectedReturn {
                activity: a.name().to_string(),
                budget: a.budget(),
                value: finance::expected_return(a.budget(), monthly_rate, months),
            })
            .collect()
    }

    /// Sums the projected return across the whole log.
    #[must_use]
    pub fn total_expected_return(&self, monthly_rate: Scalar, months: u32) -> Scalar {
        self.entries
            .iter()
            .map(|a| finance::expected_return(a.budget(), monthly_rate, months))
            .sum()
    }
}

impl ActivityLog {
    /// Returns the name of the log.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of registered activities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no activities are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ActivityLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityLog")
            .field("name", &self.name)
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self {
            name: String::from("activities"),
            entries: Vec::new(),
        }
    }
}
