//! Table rendering for plans, line items and projections
//!
//! Rows are flattened into display structs and rendered with `tabled`.
//! Money columns are right-aligned and printed with the caller's currency
//! symbol.

use std::collections::BTreeMap;

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Money, PlanLineItem, WeeklyPlan};
use crate::services::projection::ProjectionPoint;

use super::report::format_percentage;

#[derive(Tabled)]
struct AllocationRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Weekly")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct LineItemRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Planned")]
    planned: String,
    #[tabled(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Variance")]
    variance: String,
}

#[derive(Tabled)]
struct HorizonRow {
    #[tabled(rename = "Years")]
    years: u32,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Growth")]
    growth: String,
}

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "Period")]
    period: u32,
    #[tabled(rename = "Contributed")]
    contributed: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Growth")]
    growth: String,
}

fn render<T: Tabled>(rows: Vec<T>, money_columns: std::ops::RangeFrom<usize>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(money_columns), Alignment::right());
    table.to_string()
}

/// Category allocations of a plan with their share of the variable pool
pub fn format_allocations_table(plan: &WeeklyPlan, symbol: &str) -> String {
    if plan.allocations.is_empty() {
        return "No spending categories.".to_string();
    }

    let pool = plan.variable_total.cents_f64();
    let rows = plan
        .allocations
        .iter()
        .map(|a| AllocationRow {
            category: a.category.clone(),
            amount: a.amount.format_with_symbol(symbol),
            share: if pool > 0.0 {
                format_percentage(a.amount.cents_f64() / pool * 100.0)
            } else {
                "-".to_string()
            },
        })
        .collect();

    render(rows, 1..)
}

/// Planned vs actual for persisted line items
pub fn format_line_items_table(items: &[PlanLineItem], symbol: &str) -> String {
    if items.is_empty() {
        return "No line items.".to_string();
    }

    let rows = items
        .iter()
        .map(|item| LineItemRow {
            category: item.category.clone(),
            kind: item
                .kind
                .map(|k| k.to_string())
                .unwrap_or_else(|| "-".to_string()),
            planned: item.planned.format_with_symbol(symbol),
            actual: item.actual.format_with_symbol(symbol),
            variance: item.variance().format_with_symbol(symbol),
        })
        .collect();

    render(rows, 2..)
}

/// Future value of one principal at several horizons
pub fn format_horizon_table(
    principal: Money,
    table: &BTreeMap<u32, Money>,
    symbol: &str,
) -> String {
    let rows = table
        .iter()
        .map(|(&years, &value)| HorizonRow {
            years,
            value: value.format_with_symbol(symbol),
            growth: (value - principal).format_with_symbol(symbol),
        })
        .collect();

    render(rows, 1..)
}

/// Period-by-period contribution simulation, showing every `step`th period
/// and always the last one
pub fn format_points_table(points: &[ProjectionPoint], step: usize, symbol: &str) -> String {
    if points.is_empty() {
        return "No periods to project.".to_string();
    }

    let step = step.max(1);
    let last = points.len() - 1;
    let rows = points
        .iter()
        .enumerate()
        .filter(|(idx, _)| (idx + 1) % step == 0 || *idx == last)
        .map(|(_, p)| PointRow {
            period: p.period,
            contributed: p.contributed.format_with_symbol(symbol),
            balance: p.balance.format_with_symbol(symbol),
            growth: p.growth().format_with_symbol(symbol),
        })
        .collect();

    render(rows, 1..)
}
