//! Allocation engine
//!
//! Combines normalized income, fixed expenses and sinking-fund requirements
//! into a weekly plan: the savings amount, the variable spending pool and the
//! per-category allocations of that pool.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::config::AllocationConfig;
use crate::error::StashResult;
use crate::models::{
    week_start, BudgetInput, CategoryAllocation, LineKind, Money, PlanLineItem, PlanTier,
    WeeklyPlan,
};
use crate::services::cadence::normalize_checked;
use crate::services::sinking::weekly_requirement;

/// Version of the allocation rules. Bump when any rule or constant changes.
pub const ENGINE_VERSION: u32 = 1;

/// Unrounded weekly figures, in fractional cents, with per-line detail
#[derive(Debug, Clone, Default)]
struct Breakdown {
    income: f64,
    fixed: f64,
    sinking: f64,
    expense_lines: Vec<f64>,
    goal_lines: Vec<f64>,
}

/// Service for computing weekly plans
pub struct AllocationService<'a> {
    config: &'a AllocationConfig,
}

impl<'a> AllocationService<'a> {
    /// Create a new allocation service
    pub fn new(config: &'a AllocationConfig) -> Self {
        Self { config }
    }

    /// Compute the weekly plan for `input` as of `today`.
    ///
    /// Deterministic: the same input, tier, config and date always produce
    /// the same plan. Fails only on an unrecognized cadence under the strict
    /// cadence policy.
    pub fn compute_weekly_plan(
        &self,
        input: &BudgetInput,
        tier: PlanTier,
        today: NaiveDate,
    ) -> StashResult<WeeklyPlan> {
        let breakdown = self.breakdown(input, today)?;

        let remainder = (breakdown.income - breakdown.fixed - breakdown.sinking).max(0.0);
        let save_rate = self.effective_save_rate(input, tier);
        let save_amount = remainder * save_rate;
        let variable_total = remainder - save_amount;

        let splits = self.effective_splits(input, tier);
        let total_pct: f64 = splits.values().sum();
        let total_pct = if total_pct > 0.0 { total_pct } else { 1.0 };

        let allocations = splits
            .iter()
            .map(|(category, pct)| CategoryAllocation {
                category: category.clone(),
                amount: Money::from_cents_f64(variable_total * (pct / total_pct)),
            })
            .collect();

        let plan = WeeklyPlan {
            engine_version: ENGINE_VERSION,
            week_start: week_start(today),
            income: Money::from_cents_f64(breakdown.income),
            fixed: Money::from_cents_f64(breakdown.fixed),
            sinking: Money::from_cents_f64(breakdown.sinking),
            remainder: Money::from_cents_f64(remainder),
            save_rate,
            save_amount: Money::from_cents_f64(save_amount),
            variable_total: Money::from_cents_f64(variable_total),
            allocations,
        };

        tracing::debug!(
            tier = %tier,
            income = %plan.income,
            fixed = %plan.fixed,
            sinking = %plan.sinking,
            remainder = %plan.remainder,
            save_amount = %plan.save_amount,
            variable_total = %plan.variable_total,
            "computed weekly plan"
        );

        Ok(plan)
    }

    /// Flatten a plan computed from `input` into persisted line items, with
    /// every line tagged by kind. Fixed expenses and goals are listed one per
    /// input line.
    pub fn plan_line_items(
        &self,
        input: &BudgetInput,
        plan: &WeeklyPlan,
        today: NaiveDate,
    ) -> StashResult<Vec<PlanLineItem>> {
        let breakdown = self.breakdown(input, today)?;

        let mut items = Vec::with_capacity(
            2 + input.fixed_expenses.len() + input.goals.len() + plan.allocations.len(),
        );

        items.push(PlanLineItem::planned("Income", LineKind::Income, plan.income));

        for (expense, weekly) in input.fixed_expenses.iter().zip(&breakdown.expense_lines) {
            items.push(PlanLineItem::planned(
                expense.name.clone(),
                LineKind::FixedExpense,
                Money::from_cents_f64(*weekly),
            ));
        }

        for (goal, weekly) in input.goals.iter().zip(&breakdown.goal_lines) {
            items.push(PlanLineItem::planned(
                format!("Goal: {}", goal.name),
                LineKind::Savings,
                Money::from_cents_f64(*weekly),
            ));
        }

        items.push(PlanLineItem::planned(
            "Savings",
            LineKind::Savings,
            plan.save_amount,
        ));

        for allocation in &plan.allocations {
            items.push(PlanLineItem::planned(
                allocation.category.clone(),
                LineKind::Variable,
                allocation.amount,
            ));
        }

        Ok(items)
    }

    /// The save rate the engine will apply for `tier`
    pub fn effective_save_rate(&self, input: &BudgetInput, tier: PlanTier) -> f64 {
        match tier {
            PlanTier::Free => self.config.free_save_rate,
            PlanTier::Paid => input
                .variable_preferences
                .save_rate
                .unwrap_or(self.config.default_save_rate),
        }
    }

    /// The category split map the engine will apply for `tier`
    pub fn effective_splits(&self, input: &BudgetInput, tier: PlanTier) -> BTreeMap<String, f64> {
        let mut splits = self.config.default_splits.clone();
        if tier.is_paid() {
            for (category, pct) in &input.variable_preferences.splits {
                splits.insert(category.clone(), *pct);
            }
        }
        splits
    }

    fn breakdown(&self, input: &BudgetInput, today: NaiveDate) -> StashResult<Breakdown> {
        let policy = self.config.cadence_policy;
        let mut breakdown = Breakdown::default();

        for income in &input.incomes {
            breakdown.income +=
                normalize_checked(income.amount, &income.cadence, policy, &income.label())?;
        }

        for expense in &input.fixed_expenses {
            let label = format!("expense '{}'", expense.name);
            let weekly = normalize_checked(expense.amount, &expense.cadence, policy, &label)?;
            breakdown.fixed += weekly;
            breakdown.expense_lines.push(weekly);
        }

        for goal in &input.goals {
            let weekly = weekly_requirement(goal, today);
            breakdown.sinking += weekly;
            breakdown.goal_lines.push(weekly);
        }

        Ok(breakdown)
    }
}
