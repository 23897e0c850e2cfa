//! Core data models for stashflow
//!
//! This module contains the data structures that flow through the allocation
//! engine: input records, the weekly plan it produces, diagnostics and the
//! persisted plan line items used for reporting.

pub mod budget_input;
pub mod cadence;
pub mod diagnostics;
pub mod money;
pub mod plan;
pub mod tier;

pub use budget_input::{
    BudgetInput, ExpenseLine, GoalLine, IncomeLine, InputValidationError, VariablePreferences,
};
pub use cadence::Cadence;
pub use diagnostics::{BudgetStatus, Diagnostics};
pub use money::{Money, MoneyParseError};
pub use plan::{week_start, CategoryAllocation, LineKind, PlanLineItem, WeeklyPlan};
pub use tier::PlanTier;
