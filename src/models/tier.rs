//! Plan tier (entitlement level)
//!
//! Decided by the caller's entitlement layer and passed in explicitly; the
//! engine only reads it to gate which preferences it honors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Free,
    Paid,
}

impl PlanTier {
    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Paid)
    }
}

impl FromStr for PlanTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "paid" | "plus" | "premium" | "pro" => Ok(Self::Paid),
            other => Err(format!(
                "Unknown plan tier '{}'. Use 'free' or 'paid'",
                other
            )),
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Paid => write!(f, "paid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tiers() {
        assert_eq!("free".parse::<PlanTier>().unwrap(), PlanTier::Free);
        assert_eq!("Premium".parse::<PlanTier>().unwrap(), PlanTier::Paid);
        assert_eq!("pro".parse::<PlanTier>().unwrap(), PlanTier::Paid);
        assert!("gold".parse::<PlanTier>().is_err());
    }

    #[test]
    fn test_default_is_free() {
        assert!(PlanTier::default().is_free());
    }
}
