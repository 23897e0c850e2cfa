//! Weekly plan output and its persisted line items
//!
//! A [`WeeklyPlan`] is the engine's output record. [`PlanLineItem`]s are the
//! flattened form the external store keeps per (user, week), with "actual"
//! amounts filled in later by that store.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Weekly allocation for one discretionary category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAllocation {
    pub category: String,
    pub amount: Money,
}

/// The computed weekly spending plan. All amounts are weekly equivalents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// Version of the allocation rules that produced this plan
    pub engine_version: u32,
    /// Monday of the week this plan covers
    pub week_start: NaiveDate,
    pub income: Money,
    pub fixed: Money,
    pub sinking: Money,
    pub remainder: Money,
    pub save_rate: f64,
    pub save_amount: Money,
    pub variable_total: Money,
    pub allocations: Vec<CategoryAllocation>,
}

impl WeeklyPlan {
    /// Sum of the independently rounded category allocations
    pub fn allocated_total(&self) -> Money {
        self.allocations.iter().map(|a| a.amount).sum()
    }

    /// Look up a category's weekly allocation
    pub fn allocation_for(&self, category: &str) -> Option<Money> {
        self.allocations
            .iter()
            .find(|a| a.category == category)
            .map(|a| a.amount)
    }

    /// The allocation with the largest amount (ties resolved by name order)
    pub fn largest_allocation(&self) -> Option<&CategoryAllocation> {
        self.allocations.iter().fold(None, |best, a| match best {
            Some(b) if b.amount >= a.amount => Some(b),
            _ => Some(a),
        })
    }
}

/// Explicit bucket tag carried by a persisted line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Income,
    FixedExpense,
    Savings,
    Variable,
}

impl LineKind {
    /// Whether this line represents money going out (fixed or discretionary)
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::FixedExpense | Self::Variable)
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::FixedExpense => write!(f, "Fixed Expense"),
            Self::Savings => write!(f, "Savings"),
            Self::Variable => write!(f, "Variable"),
        }
    }
}

/// One persisted plan row: planned vs. actual for a category in a week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLineItem {
    pub category: String,
    /// Absent on records written before line kinds existed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<LineKind>,
    pub planned: Money,
    #[serde(default)]
    pub actual: Money,
}

impl PlanLineItem {
    pub fn planned(category: impl Into<String>, kind: LineKind, planned: Money) -> Self {
        Self {
            category: category.into(),
            kind: Some(kind),
            planned,
            actual: Money::zero(),
        }
    }

    /// A legacy record with no kind tag
    pub fn untagged(category: impl Into<String>, planned: Money, actual: Money) -> Self {
        Self {
            category: category.into(),
            kind: None,
            planned,
            actual,
        }
    }

    pub fn with_actual(mut self, actual: Money) -> Self {
        self.actual = actual;
        self
    }

    /// actual - planned
    pub fn variance(&self) -> Money {
        self.actual - self.planned
    }

    /// Variance as a percentage of the planned amount (0 when nothing was planned)
    pub fn variance_pct(&self) -> f64 {
        if self.planned.is_zero() {
            0.0
        } else {
            self.variance().cents_f64() / self.planned.cents_f64() * 100.0
        }
    }
}

/// Monday of the ISO week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}
