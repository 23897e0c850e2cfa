//! Budget health scoring
//!
//! An unweighted rule stack starting from a base of 50. Every rule is
//! evaluated independently and the adjustments are summed, so one budget can
//! collect several bonuses and penalties at once.

use crate::models::{LineKind, Money, PlanLineItem, WeeklyPlan};

const BASE_SCORE: i32 = 50;

/// `numerator / denominator`, or `None` when the denominator is not positive
fn ratio(numerator: Money, denominator: Money) -> Option<f64> {
    if denominator.is_positive() {
        Some(numerator.cents_f64() / denominator.cents_f64())
    } else {
        None
    }
}

fn income_adjustment(income: Money) -> i32 {
    let units = income.as_units();
    if units > 1000.0 {
        20
    } else if units > 500.0 {
        10
    } else {
        0
    }
}

fn expense_adjustment(expense_ratio: f64) -> i32 {
    if expense_ratio < 0.5 {
        20
    } else if expense_ratio < 0.7 {
        10
    } else if expense_ratio > 0.9 {
        -20
    } else {
        0
    }
}

fn savings_adjustment(savings_ratio: f64) -> i32 {
    if savings_ratio > 0.2 {
        15
    } else if savings_ratio > 0.1 {
        10
    } else if savings_ratio < 0.05 {
        -15
    } else {
        0
    }
}

fn accuracy_adjustment(variance_ratio: f64) -> i32 {
    if variance_ratio < 0.1 {
        15
    } else if variance_ratio < 0.2 {
        5
    } else if variance_ratio > 0.5 {
        -15
    } else {
        0
    }
}

/// Heuristic 0-100 health score.
///
/// `variance` is the absolute plan-vs-actual difference on expenses. A ratio
/// whose denominator is zero contributes nothing.
pub fn score(income: Money, expenses: Money, savings: Money, variance: Money) -> u8 {
    let mut total = BASE_SCORE + income_adjustment(income);

    if let Some(r) = ratio(expenses, income) {
        total += expense_adjustment(r);
    }
    if let Some(r) = ratio(savings, income) {
        total += savings_adjustment(r);
    }
    if let Some(r) = ratio(variance.abs(), expenses) {
        total += accuracy_adjustment(r);
    }

    total.clamp(0, 100) as u8
}

/// Score a freshly computed plan, before any actuals exist.
///
/// Expenses are fixed obligations plus the variable pool; savings are the
/// save amount plus goal contributions.
pub fn score_plan(plan: &WeeklyPlan) -> u8 {
    score(
        plan.income,
        plan.fixed + plan.variable_total,
        plan.save_amount + plan.sinking,
        Money::zero(),
    )
}

/// Total |actual - planned| over expense line items (fixed and variable)
pub fn plan_variance(items: &[PlanLineItem]) -> Money {
    items
        .iter()
        .filter(|item| item.kind.is_some_and(|k| k.is_expense()))
        .map(|item| item.variance().abs())
        .sum()
}

/// Score persisted line items once actuals are known.
///
/// Income is taken from the planned figures, expenses and savings from the
/// actuals of their kinds. Untagged items are ignored.
pub fn score_line_items(items: &[PlanLineItem]) -> u8 {
    let mut income = Money::zero();
    let mut expenses = Money::zero();
    let mut savings = Money::zero();

    for item in items {
        match item.kind {
            Some(LineKind::Income) => income += item.planned,
            Some(LineKind::FixedExpense) | Some(LineKind::Variable) => expenses += item.actual,
            Some(LineKind::Savings) => savings += item.actual,
            None => {}
        }
    }

    score(income, expenses, savings, plan_variance(items))
}
