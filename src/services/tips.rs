//! Rule-based budget tips
//!
//! The first matching top-level rule decides the status. Paid tiers may get
//! an extra trimming suggestion on top.

use crate::models::{BudgetStatus, Diagnostics, Money, PlanTier, WeeklyPlan};
use crate::services::health;

pub const SHORTFALL_TIP: &str = "Your fixed expenses and goals exceed your income. \
    Reduce fixed costs or push back goal deadlines.";
pub const TIGHT_BUDGET_TIP: &str =
    "Your budget is tight: less than 20% of income is left after fixed costs and goals.";
pub const RAISE_SAVINGS_TIP: &str =
    "You're saving less than 15% of your income. Consider raising your save rate.";
pub const HEALTHY_TIP: &str = "Nice work! Your plan covers your bills and builds savings.";

/// Variable spending above this (in cents) earns a trimming suggestion on paid tiers
const TRIM_THRESHOLD_CENTS: i64 = 100_00;
const TRIM_FRACTION: f64 = 0.05;
const TRIM_CAP_CENTS: i64 = 20_00;

/// Weekly figures the tip rules read
#[derive(Debug, Clone)]
pub struct TipInputs<'a> {
    pub income: Money,
    pub remainder: Money,
    pub save_amount: Money,
    pub variable_total: Money,
    /// Largest discretionary category, the candidate for trimming
    pub flexible_category: Option<&'a str>,
}

impl<'a> TipInputs<'a> {
    pub fn from_plan(plan: &'a WeeklyPlan) -> Self {
        Self {
            income: plan.income,
            remainder: plan.remainder,
            save_amount: plan.save_amount,
            variable_total: plan.variable_total,
            flexible_category: plan.largest_allocation().map(|a| a.category.as_str()),
        }
    }
}

/// Status and tips for the given weekly figures
pub fn generate_tips(inputs: &TipInputs<'_>, tier: PlanTier) -> (BudgetStatus, Vec<String>) {
    let income = inputs.income.cents_f64();
    let mut tips = Vec::new();

    let status = if !inputs.remainder.is_positive() {
        tips.push(SHORTFALL_TIP.to_string());
        BudgetStatus::Critical
    } else if inputs.remainder.cents_f64() < income * 0.2 {
        tips.push(TIGHT_BUDGET_TIP.to_string());
        BudgetStatus::Warning
    } else if inputs.save_amount.cents_f64() < income * 0.15 {
        tips.push(RAISE_SAVINGS_TIP.to_string());
        BudgetStatus::Warning
    } else {
        tips.push(HEALTHY_TIP.to_string());
        BudgetStatus::Healthy
    };

    if tier.is_paid() && inputs.variable_total.cents() > TRIM_THRESHOLD_CENTS {
        let trim = Money::from_cents_f64(inputs.variable_total.cents_f64() * TRIM_FRACTION)
            .min(Money::from_cents(TRIM_CAP_CENTS));
        let category = inputs.flexible_category.unwrap_or("a flexible category");
        tips.push(format!(
            "Trimming about {}/week from {} would move that money into savings.",
            trim, category
        ));
    }

    (status, tips)
}

/// Full diagnostics for a freshly computed plan
pub fn diagnose(plan: &WeeklyPlan, tier: PlanTier) -> Diagnostics {
    let (status, tips) = generate_tips(&TipInputs::from_plan(plan), tier);
    let score = health::score_plan(plan);

    tracing::debug!(status = %status, score, tips = tips.len(), "diagnosed plan");

    Diagnostics {
        status,
        tips,
        score,
    }
}
