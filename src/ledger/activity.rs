use crate::math::Scalar;

/// Category of a financial activity.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
    /// Money committed against a future return.
    Investment,
    /// Money set aside.
    Savings,
}

impl ActivityKind {
    /// Lowercase label used in summaries.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Investment => "investment",
            Self::Savings => "savings",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A planned financial activity with a budget and the amount actually spent.
///
/// Values are fixed at construction; derived state (budget status,
/// variance, summaries) is always computed from the stored figures.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    name: String,
    kind: ActivityKind,
    budget: Scalar,
    actual: Scalar,
}

impl Activity {
    /// Creates an activity.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ActivityKind, budget: Scalar, actual: Scalar) -> Self {
        Self {
            name: name.into(),
            kind,
            budget,
            actual,
        }
    }

    /// Activity name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Activity category.
    #[must_use]
    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Budgeted amount.
    #[must_use]
    pub fn budget(&self) -> Scalar {
        self.budget
    }

    /// Amount actually spent.
    #[must_use]
    pub fn actual(&self) -> Scalar {
        self.actual
    }

    /// Returns true while the actual spend does not exceed the budget.
    #[must_use]
    pub fn is_within_budget(&self) -> bool {
        self.actual <= self.budget
    }

    /// Remaining budget; negative once the activity overruns.
    #[must_use]
    pub fn variance(&self) -> Scalar {
        self.budget - self.actual
    }

    /// Single-line report of the activity state.
    #[must_use]
    pub fn summary(&self) -> String {
        let status = if self.is_within_budget() {
            "within budget"
        } else {
            "over budget"
        };
        format!(
            "activity: {} | kind: {} | budget: {:.2} | actual: {:.2} | status: {} | variance: {:.2}",
            self.name,
            self.kind,
            self.budget,
            self.actual,
            status,
            self.variance()
        )
    }
}
