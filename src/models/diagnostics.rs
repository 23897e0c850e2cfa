//! Budget diagnostics: overall status, advisory tips and health score

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall soundness of a weekly plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Healthy,
    Warning,
    Critical,
}

impl BudgetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Status plus the tips that explain it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub status: BudgetStatus,
    pub tips: Vec<String>,
    /// Heuristic 0-100 health score
    pub score: u8,
}

impl Diagnostics {
    pub fn is_critical(&self) -> bool {
        self.status == BudgetStatus::Critical
    }
}
