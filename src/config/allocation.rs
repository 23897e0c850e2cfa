//! Allocation engine configuration
//!
//! One place for the default category splits, save rates, free-tier limits
//! and projection assumptions. Services borrow an [`AllocationConfig`]
//! instead of hard-coding these values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Save rate applied when nothing else is specified, and always on the free tier
pub const DEFAULT_SAVE_RATE: f64 = 0.20;

/// Long-run equity market assumption used for projections
pub const DEFAULT_ANNUAL_RATE: f64 = 0.08;

/// How the engine treats cadence keywords it does not recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CadencePolicy {
    /// Treat the amount as already weekly and log a warning
    #[default]
    Lenient,
    /// Fail the computation with an invalid cadence error
    Strict,
}

/// Maximum line counts on the free tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLimits {
    pub max_incomes: usize,
    pub max_fixed_expenses: usize,
    pub max_goals: usize,
}

impl Default for TierLimits {
    fn default() -> Self {
        Self {
            max_incomes: 2,
            max_fixed_expenses: 10,
            max_goals: 3,
        }
    }
}

/// Everything the allocation services need besides the input record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationConfig {
    /// Built-in category map. The free tier uses exactly this; paid tiers
    /// overlay their own splits on top of it.
    #[serde(default = "default_splits")]
    pub default_splits: BTreeMap<String, f64>,

    /// Save rate forced on the free tier
    #[serde(default = "default_save_rate")]
    pub free_save_rate: f64,

    /// Save rate for paid tiers that did not state one
    #[serde(default = "default_save_rate")]
    pub default_save_rate: f64,

    #[serde(default)]
    pub cadence_policy: CadencePolicy,

    #[serde(default)]
    pub free_limits: TierLimits,

    /// Annual growth rate used by projections unless overridden
    #[serde(default = "default_annual_rate")]
    pub annual_rate: f64,
}

fn default_save_rate() -> f64 {
    DEFAULT_SAVE_RATE
}

fn default_annual_rate() -> f64 {
    DEFAULT_ANNUAL_RATE
}

/// The built-in discretionary category shares
pub fn default_splits() -> BTreeMap<String, f64> {
    [
        ("Groceries", 0.30),
        ("Dining Out", 0.15),
        ("Transportation", 0.15),
        ("Shopping", 0.15),
        ("Entertainment", 0.10),
        ("Personal Care", 0.15),
    ]
    .into_iter()
    .map(|(name, pct)| (name.to_string(), pct))
    .collect()
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            default_splits: default_splits(),
            free_save_rate: DEFAULT_SAVE_RATE,
            default_save_rate: DEFAULT_SAVE_RATE,
            cadence_policy: CadencePolicy::default(),
            free_limits: TierLimits::default(),
            annual_rate: DEFAULT_ANNUAL_RATE,
        }
    }
}

impl AllocationConfig {
    /// Use the strict cadence policy
    pub fn strict(mut self) -> Self {
        self.cadence_policy = CadencePolicy::Strict;
        self
    }

    pub fn with_default_splits(mut self, splits: BTreeMap<String, f64>) -> Self {
        self.default_splits = splits;
        self
    }
}
