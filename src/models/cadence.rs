//! Recurrence cadence of a money amount
//!
//! Cadences arrive as free-text keywords from input records and the tabular
//! import format. Unrecognized keywords are kept verbatim in
//! [`Cadence::Other`] so callers can decide whether to reject or degrade.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a recurring amount repeats
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Cadence {
    Weekly,
    Biweekly,
    Semimonthly,
    Monthly,
    Annual,
    /// A keyword the engine does not know, stored as given
    Other(String),
}

impl Cadence {
    /// Parse a cadence keyword. Never fails; unknown keywords become `Other`.
    pub fn parse(s: &str) -> Self {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "weekly" => Self::Weekly,
            "biweekly" | "bi-weekly" => Self::Biweekly,
            "semimonthly" | "semi-monthly" => Self::Semimonthly,
            "monthly" => Self::Monthly,
            "annual" | "annually" | "yearly" => Self::Annual,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    /// The canonical keyword for this cadence
    pub fn keyword(&self) -> &str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Semimonthly => "semimonthly",
            Self::Monthly => "monthly",
            Self::Annual => "annual",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this is one of the five known cadences
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// All recognized cadences, shortest period first
    pub fn all() -> [Cadence; 5] {
        [
            Self::Weekly,
            Self::Biweekly,
            Self::Semimonthly,
            Self::Monthly,
            Self::Annual,
        ]
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::Monthly
    }
}

impl From<String> for Cadence {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for Cadence {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<Cadence> for String {
    fn from(c: Cadence) -> Self {
        c.keyword().to_string()
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
