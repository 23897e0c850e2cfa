//! CSV Export functionality
//!
//! Exports planned-vs-actual variance and category allocations to CSV.

use std::io::Write;

use csv::Writer;

use crate::error::{StashError, StashResult};
use crate::models::{Money, PlanLineItem, WeeklyPlan};

fn units(money: Money) -> String {
    format!("{:.2}", money.as_units())
}

/// Export one variance row per line item
///
/// Variance is actual minus planned; the percentage is relative to planned
/// and is 0 for lines with nothing planned.
pub fn export_variance_csv<W: Write>(items: &[PlanLineItem], writer: W) -> StashResult<()> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record([
        "Category",
        "Planned ($)",
        "Actual ($)",
        "Variance ($)",
        "Variance (%)",
    ])
    .map_err(|e| StashError::Export(e.to_string()))?;

    for item in items {
        wtr.write_record([
            item.category.clone(),
            units(item.planned),
            units(item.actual),
            units(item.variance()),
            format!("{:.1}", item.variance_pct()),
        ])
        .map_err(|e| StashError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export the category allocations of a plan with their share of the pool
pub fn export_allocations_csv<W: Write>(plan: &WeeklyPlan, writer: W) -> StashResult<()> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(["Week", "Category", "Weekly ($)", "Share (%)"])
        .map_err(|e| StashError::Export(e.to_string()))?;

    let pool = plan.variable_total.cents_f64();
    for allocation in &plan.allocations {
        let share = if pool > 0.0 {
            allocation.amount.cents_f64() / pool * 100.0
        } else {
            0.0
        };
        wtr.write_record([
            plan.week_start.to_string(),
            allocation.category.clone(),
            units(allocation.amount),
            format!("{:.1}", share),
        ])
        .map_err(|e| StashError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
