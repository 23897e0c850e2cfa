//! Compound growth projections
//!
//! Closed-form future value for a single principal, plus a period-by-period
//! simulation for a starting balance with recurring contributions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Money;

/// Future value of `principal` after `years` of annual compounding at `annual_rate`
///
/// # Examples
/// ```
/// use stashflow::models::Money;
/// use stashflow::services::projection::future_value;
///
/// let fv = future_value(Money::from_cents(10000), 0.08, 1.0);
/// assert_eq!(fv, Money::from_cents(10800));
/// ```
pub fn future_value(principal: Money, annual_rate: f64, years: f64) -> Money {
    Money::from_cents_f64(principal.cents_f64() * (1.0 + annual_rate).powf(years))
}

/// Future value of `principal` at each of `horizons` (in whole years)
pub fn projection_table(
    principal: Money,
    annual_rate: f64,
    horizons: &[u32],
) -> BTreeMap<u32, Money> {
    horizons
        .iter()
        .map(|&years| (years, future_value(principal, annual_rate, years as f64)))
        .collect()
}

/// Balance after one simulated period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// 1-based period number
    pub period: u32,
    /// Starting balance plus all contributions so far
    pub contributed: Money,
    pub balance: Money,
}

impl ProjectionPoint {
    /// Growth earned on top of what was put in
    pub fn growth(&self) -> Money {
        self.balance - self.contributed
    }
}

/// Simulate a balance with one contribution per period and a per-period
/// growth rate taken from `period_rates` (one entry per period).
///
/// Each period adds the contribution first, then applies that period's rate.
pub fn simulate_with_rates(
    start: Money,
    contribution: Money,
    period_rates: &[f64],
) -> Vec<ProjectionPoint> {
    let mut balance = start.cents_f64();
    let mut contributed = start.cents_f64();
    let mut points = Vec::with_capacity(period_rates.len());

    for (idx, rate) in period_rates.iter().enumerate() {
        balance += contribution.cents_f64();
        contributed += contribution.cents_f64();
        balance *= 1.0 + rate;

        points.push(ProjectionPoint {
            period: idx as u32 + 1,
            contributed: Money::from_cents_f64(contributed),
            balance: Money::from_cents_f64(balance),
        });
    }

    points
}

/// Simulate `periods` contributions at a fixed annual rate split evenly over
/// `periods_per_year` compounding periods.
pub fn simulate_contributions(
    start: Money,
    contribution: Money,
    periods: u32,
    periods_per_year: u32,
    annual_rate: f64,
) -> Vec<ProjectionPoint> {
    let period_rate = annual_rate / periods_per_year.max(1) as f64;
    let rates = vec![period_rate; periods as usize];
    simulate_with_rates(start, contribution, &rates)
}

/// What saving `weekly_save` every week for `years` grows into
pub fn weekly_savings_outlook(weekly_save: Money, years: u32, annual_rate: f64) -> Money {
    simulate_contributions(Money::zero(), weekly_save, years * 52, 52, annual_rate)
        .last()
        .map(|p| p.balance)
        .unwrap_or_default()
}
