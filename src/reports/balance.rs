//! Balance Report
//!
//! Persisted line items grouped into assets, liabilities and savings, with
//! planned-vs-actual totals per bucket and the health score from actuals.

use std::io::Write;

use crate::display::format_line_items_table;
use crate::display::report::{double_separator, format_score};
use crate::error::StashResult;
use crate::export::export_variance_csv;
use crate::models::{Money, PlanLineItem};
use crate::services::categorize::{categorize, BalanceView, Bucket};
use crate::services::health;

/// Line items bucketed for display
#[derive(Debug, Clone)]
pub struct BalanceReport {
    pub items: Vec<PlanLineItem>,
    pub view: BalanceView,
    pub score: u8,
    pub currency: String,
}

impl BalanceReport {
    pub fn generate(items: Vec<PlanLineItem>) -> Self {
        let view = categorize(&items);
        let score = health::score_line_items(&items);
        Self {
            items,
            view,
            score,
            currency: "$".to_string(),
        }
    }

    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency = symbol.into();
        self
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let money = |amount: Money| amount.format_with_symbol(&self.currency);
        let mut output = String::new();

        output.push_str("Balance Report\n");
        output.push_str(&double_separator(60));
        output.push('\n');

        for bucket in [Bucket::Asset, Bucket::Liability, Bucket::Savings] {
            let summary = self.view.bucket(bucket);
            output.push_str(&format!(
                "{:<12} planned {:>12}  actual {:>12}\n",
                bucket.to_string(),
                money(summary.planned),
                money(summary.actual)
            ));
        }

        output.push_str(&format!(
            "Unallocated  planned {:>12}\n",
            money(self.view.planned_unallocated())
        ));
        output.push_str(&format!("Health: {}\n\n", format_score(self.score)));

        for bucket in [Bucket::Asset, Bucket::Liability, Bucket::Savings] {
            let summary = self.view.bucket(bucket);
            if summary.is_empty() {
                continue;
            }
            output.push_str(&format!("{}\n", bucket.to_string().to_uppercase()));
            output.push_str(&format_line_items_table(&summary.items, &self.currency));
            output.push_str("\n\n");
        }

        output
    }

    /// Export planned-vs-actual variance for every item to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> StashResult<()> {
        export_variance_csv(&self.items, writer)
    }
}
