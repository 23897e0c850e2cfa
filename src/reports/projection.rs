//! Projection Reports
//!
//! Compound growth of a single principal over fixed horizons, and the
//! period-by-period growth of recurring contributions.

use std::collections::BTreeMap;

use crate::display::report::{format_rate, separator};
use crate::display::{format_horizon_table, format_points_table};
use crate::models::Money;
use crate::services::projection::{projection_table, simulate_contributions, ProjectionPoint};

/// Future value of one principal at several horizons
#[derive(Debug, Clone)]
pub struct ProjectionReport {
    pub principal: Money,
    pub annual_rate: f64,
    pub values: BTreeMap<u32, Money>,
    pub currency: String,
}

impl ProjectionReport {
    pub fn generate(principal: Money, annual_rate: f64, horizons: &[u32]) -> Self {
        Self {
            principal,
            annual_rate,
            values: projection_table(principal, annual_rate, horizons),
            currency: "$".to_string(),
        }
    }

    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency = symbol.into();
        self
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Projection of {} at {} per year\n",
            self.principal.format_with_symbol(&self.currency),
            format_rate(self.annual_rate)
        ));
        output.push_str(&separator(50));
        output.push('\n');
        output.push_str(&format_horizon_table(
            self.principal,
            &self.values,
            &self.currency,
        ));
        output.push('\n');
        output
    }
}

/// Recurring contributions simulated month by month
#[derive(Debug, Clone)]
pub struct GrowthReport {
    pub start: Money,
    pub contribution: Money,
    pub annual_rate: f64,
    pub points: Vec<ProjectionPoint>,
    pub currency: String,
}

impl GrowthReport {
    pub fn generate(start: Money, contribution: Money, months: u32, annual_rate: f64) -> Self {
        Self {
            start,
            contribution,
            annual_rate,
            points: simulate_contributions(start, contribution, months, 12, annual_rate),
            currency: "$".to_string(),
        }
    }

    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency = symbol.into();
        self
    }

    pub fn final_point(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    /// Format the report for terminal display, one row per year
    pub fn format_terminal(&self) -> String {
        let money = |amount: Money| amount.format_with_symbol(&self.currency);
        let mut output = String::new();
        output.push_str(&format!(
            "Contributing {}/month from {} at {} per year\n",
            money(self.contribution),
            money(self.start),
            format_rate(self.annual_rate)
        ));
        output.push_str(&separator(50));
        output.push('\n');
        output.push_str(&format_points_table(&self.points, 12, &self.currency));
        output.push('\n');

        if let Some(last) = self.final_point() {
            output.push_str(&format!(
                "After {} months: {} ({} contributed, {} growth)\n",
                last.period,
                money(last.balance),
                money(last.contributed),
                money(last.growth())
            ));
        }

        output
    }
}
