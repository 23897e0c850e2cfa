//! Balance categorization
//!
//! Sorts persisted plan line items into asset, liability and savings buckets
//! for the report view. A line's explicit kind decides its bucket; only
//! legacy lines without a kind fall back to guessing from the category name.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{LineKind, Money, PlanLineItem};

/// Report bucket for a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Asset,
    Liability,
    Savings,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asset => write!(f, "Assets"),
            Self::Liability => write!(f, "Liabilities"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

impl From<LineKind> for Bucket {
    fn from(kind: LineKind) -> Self {
        match kind {
            LineKind::Income => Self::Asset,
            LineKind::Savings => Self::Savings,
            LineKind::FixedExpense | LineKind::Variable => Self::Liability,
        }
    }
}

/// Guess a bucket from a free-text category name.
///
/// Matches "income" first, then "save"/"stack"; anything else is a liability.
pub fn infer_bucket(category: &str) -> Bucket {
    let name = category.to_lowercase();
    if name.contains("income") {
        Bucket::Asset
    } else if name.contains("save") || name.contains("stack") {
        Bucket::Savings
    } else {
        Bucket::Liability
    }
}

/// The bucket a line item belongs to
pub fn bucket_for(item: &PlanLineItem) -> Bucket {
    match item.kind {
        Some(kind) => kind.into(),
        None => {
            let bucket = infer_bucket(&item.category);
            tracing::debug!(
                category = %item.category,
                bucket = %bucket,
                "inferred bucket for untagged line"
            );
            bucket
        }
    }
}

/// Line items in one bucket with their totals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSummary {
    pub items: Vec<PlanLineItem>,
    pub planned: Money,
    pub actual: Money,
}

impl BucketSummary {
    fn push(&mut self, item: PlanLineItem) {
        self.planned += item.planned;
        self.actual += item.actual;
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Line items split into the three report buckets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceView {
    pub assets: BucketSummary,
    pub liabilities: BucketSummary,
    pub savings: BucketSummary,
}

impl BalanceView {
    pub fn bucket(&self, bucket: Bucket) -> &BucketSummary {
        match bucket {
            Bucket::Asset => &self.assets,
            Bucket::Liability => &self.liabilities,
            Bucket::Savings => &self.savings,
        }
    }

    /// Planned assets minus planned liabilities and savings
    pub fn planned_unallocated(&self) -> Money {
        self.assets.planned - self.liabilities.planned - self.savings.planned
    }
}

/// Classify every line item into its bucket, keeping input order within each
pub fn categorize(items: &[PlanLineItem]) -> BalanceView {
    let mut view = BalanceView::default();

    for item in items {
        match bucket_for(item) {
            Bucket::Asset => view.assets.push(item.clone()),
            Bucket::Liability => view.liabilities.push(item.clone()),
            Bucket::Savings => view.savings.push(item.clone()),
        }
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(c: i64) -> Money {
        Money::from_cents(c)
    }

    #[test]
    fn test_infer_bucket_from_names() {
        assert_eq!(infer_bucket("Income"), Bucket::Asset);
        assert_eq!(infer_bucket("Side income"), Bucket::Asset);
        assert_eq!(infer_bucket("Savings"), Bucket::Savings);
        assert_eq!(infer_bucket("Cash Stack"), Bucket::Savings);
        assert_eq!(infer_bucket("Car Insurance"), Bucket::Liability);
        assert_eq!(infer_bucket("Nest Egg"), Bucket::Liability);
    }

    #[test]
    fn test_income_checked_before_savings() {
        assert_eq!(infer_bucket("Savings income"), Bucket::Asset);
    }

    #[test]
    fn test_explicit_kind_wins_over_name() {
        let item = PlanLineItem::planned("Nest Egg", LineKind::Savings, cents(1000));
        assert_eq!(bucket_for(&item), Bucket::Savings);

        let item = PlanLineItem::planned("Income Tax", LineKind::FixedExpense, cents(1000));
        assert_eq!(bucket_for(&item), Bucket::Liability);
    }

    #[test]
    fn test_categorize_totals() {
        let items = vec![
            PlanLineItem::planned("Income", LineKind::Income, cents(46030)),
            PlanLineItem::planned("Rent", LineKind::FixedExpense, cents(18412)),
            PlanLineItem::planned("Savings", LineKind::Savings, cents(5524))
                .with_actual(cents(6000)),
            PlanLineItem::planned("Groceries", LineKind::Variable, cents(6628))
                .with_actual(cents(7000)),
            PlanLineItem::untagged("Emergency stack", cents(1000), cents(1000)),
        ];

        let view = categorize(&items);

        assert_eq!(view.assets.items.len(), 1);
        assert_eq!(view.liabilities.items.len(), 2);
        assert_eq!(view.savings.items.len(), 2);
        assert_eq!(view.liabilities.planned.cents(), 18412 + 6628);
        assert_eq!(view.savings.actual.cents(), 7000);
        assert_eq!(view.bucket(Bucket::Asset).planned.cents(), 46030);
        assert_eq!(
            view.planned_unallocated().cents(),
            46030 - 18412 - 6628 - 5524 - 1000
        );
    }

    #[test]
    fn test_empty_input() {
        let view = categorize(&[]);
        assert!(view.assets.is_empty());
        assert!(view.liabilities.is_empty());
        assert!(view.savings.is_empty());
    }
}
