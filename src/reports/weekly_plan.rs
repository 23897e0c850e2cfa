//! Weekly Plan Report
//!
//! The main output of `plan`: the weekly waterfall from income down to the
//! variable pool, the category allocations, the health score and the tips.

use std::io::Write;

use crate::display::report::{
    double_separator, format_rate, format_score, money_bar, separator, status_badge,
};
use crate::display::format_allocations_table;
use crate::error::StashResult;
use crate::export::export_allocations_csv;
use crate::models::{Diagnostics, Money, PlanTier, WeeklyPlan};
use crate::services::projection::weekly_savings_outlook;

const WIDTH: usize = 60;

/// Weekly plan with its diagnostics, ready for display
#[derive(Debug, Clone)]
pub struct WeeklyPlanReport {
    pub tier: PlanTier,
    pub plan: WeeklyPlan,
    pub diagnostics: Diagnostics,
    pub currency: String,
    pub outlook: Option<SavingsOutlook>,
}

/// Where the weekly save amount ends up if kept up for a number of years
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsOutlook {
    pub years: u32,
    pub annual_rate: f64,
    pub balance: Money,
}

impl WeeklyPlanReport {
    pub fn new(tier: PlanTier, plan: WeeklyPlan, diagnostics: Diagnostics) -> Self {
        Self {
            tier,
            plan,
            diagnostics,
            currency: "$".to_string(),
            outlook: None,
        }
    }

    /// Render money with this symbol instead of `$`
    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency = symbol.into();
        self
    }

    /// Add the compounded balance of the weekly save amount after `years`
    pub fn with_outlook(mut self, years: u32, annual_rate: f64) -> Self {
        self.outlook = Some(SavingsOutlook {
            years,
            annual_rate,
            balance: weekly_savings_outlook(self.plan.save_amount, years, annual_rate),
        });
        self
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency)
    }

    fn waterfall_line(&self, label: &str, amount: Money) -> String {
        format!(
            "{:<18} {:>12}  {}\n",
            label,
            self.money(amount),
            money_bar(amount, self.plan.income, 20)
        )
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let plan = &self.plan;
        let mut output = String::new();

        output.push_str(&format!(
            "Weekly Plan - week of {} ({} tier)\n",
            plan.week_start, self.tier
        ));
        output.push_str(&double_separator(WIDTH));
        output.push('\n');

        output.push_str(&self.waterfall_line("Income", plan.income));
        output.push_str(&self.waterfall_line("Fixed expenses", plan.fixed));
        output.push_str(&self.waterfall_line("Goal savings", plan.sinking));
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&self.waterfall_line("Remainder", plan.remainder));
        output.push_str(&self.waterfall_line(
            &format!("Save ({})", format_rate(plan.save_rate)),
            plan.save_amount,
        ));
        output.push_str(&self.waterfall_line("Spending", plan.variable_total));
        output.push('\n');

        output.push_str(&format_allocations_table(plan, &self.currency));
        output.push_str("\n\n");

        if let Some(outlook) = &self.outlook {
            output.push_str(&format!(
                "Saving {}/week grows to {} in {} years at {}\n\n",
                self.money(plan.save_amount),
                self.money(outlook.balance),
                outlook.years,
                format_rate(outlook.annual_rate)
            ));
        }

        output.push_str(&format!(
            "Status: {}\n",
            status_badge(self.diagnostics.status)
        ));
        output.push_str(&format!(
            "Health: {}\n",
            format_score(self.diagnostics.score)
        ));

        if !self.diagnostics.tips.is_empty() {
            output.push_str("\nTips:\n");
            for tip in &self.diagnostics.tips {
                output.push_str(&format!("  • {}\n", tip));
            }
        }

        output
    }

    /// Export the category allocations to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> StashResult<()> {
        export_allocations_csv(&self.plan, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_export;

    #[test]
    fn test_terminal_format() {
        let export = sample_export();
        let report = WeeklyPlanReport::new(export.tier, export.plan, export.diagnostics);

        let out = report.format_terminal();
        assert!(out.contains("week of 2026-10-12 (paid tier)"));
        assert!(out.contains("$460.30"));
        assert!(out.contains("$184.12"));
        assert!(out.contains("Save (20%)"));
        assert!(out.contains("$55.24"));
        assert!(out.contains("$220.94"));
        assert!(out.contains("[!] warning"));
        assert!(out.contains("Tips:"));
    }

    #[test]
    fn test_currency_and_outlook() {
        let export = sample_export();
        let report = WeeklyPlanReport::new(export.tier, export.plan, export.diagnostics)
            .with_currency("€")
            .with_outlook(2, 0.0);

        let out = report.format_terminal();
        assert!(out.contains("€460.30"));
        assert!(out.contains("€220.94"));

        let outlook = report.outlook.unwrap();
        assert_eq!(outlook.balance, Money::from_cents(5524 * 104));
        assert!(out.contains("Saving €55.24/week grows to €5744.96 in 2 years at 0.0%"));
    }

    #[test]
    fn test_export_csv() {
        let export = sample_export();
        let report = WeeklyPlanReport::new(export.tier, export.plan, export.diagnostics);

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("Groceries"));
    }
}
