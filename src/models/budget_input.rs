//! Budget input record
//!
//! The declared incomes, fixed obligations, savings goals and discretionary
//! preferences that the allocation engine turns into a weekly plan.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::cadence::Cadence;
use super::money::Money;

/// One recurring income stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeLine {
    pub amount: Money,
    #[serde(default)]
    pub cadence: Cadence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl IncomeLine {
    pub fn new(amount: Money, cadence: Cadence) -> Self {
        Self {
            amount,
            cadence,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Label used in logs and error messages
    pub fn label(&self) -> String {
        match &self.source {
            Some(source) => format!("income '{}'", source),
            None => "income".to_string(),
        }
    }
}

/// A fixed recurring obligation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub name: String,
    pub amount: Money,
    #[serde(default)]
    pub cadence: Cadence,
}

impl ExpenseLine {
    pub fn new(name: impl Into<String>, amount: Money, cadence: Cadence) -> Self {
        Self {
            name: name.into(),
            amount,
            cadence,
        }
    }
}

/// A savings target with a deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalLine {
    pub name: String,
    pub target_amount: Money,
    pub due_date: NaiveDate,
}

impl GoalLine {
    pub fn new(name: impl Into<String>, target_amount: Money, due_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            target_amount,
            due_date,
        }
    }
}

/// Discretionary spending intent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariablePreferences {
    /// Fraction of the remainder to save, in [0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_rate: Option<f64>,
    /// Category name -> share of variable spending (need not sum to 1)
    #[serde(default)]
    pub splits: BTreeMap<String, f64>,
}

impl VariablePreferences {
    pub fn with_save_rate(mut self, rate: f64) -> Self {
        self.save_rate = Some(rate);
        self
    }

    pub fn with_split(mut self, category: impl Into<String>, pct: f64) -> Self {
        self.splits.insert(category.into(), pct);
        self
    }
}

/// The full input record for one weekly plan computation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetInput {
    #[serde(default)]
    pub incomes: Vec<IncomeLine>,
    #[serde(default)]
    pub fixed_expenses: Vec<ExpenseLine>,
    #[serde(default)]
    pub variable_preferences: VariablePreferences,
    #[serde(default)]
    pub goals: Vec<GoalLine>,
}

impl BudgetInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_income(mut self, income: IncomeLine) -> Self {
        self.incomes.push(income);
        self
    }

    pub fn with_expense(mut self, expense: ExpenseLine) -> Self {
        self.fixed_expenses.push(expense);
        self
    }

    pub fn with_goal(mut self, goal: GoalLine) -> Self {
        self.goals.push(goal);
        self
    }

    pub fn with_preferences(mut self, prefs: VariablePreferences) -> Self {
        self.variable_preferences = prefs;
        self
    }

    /// Structural validation performed by callers before handing the record
    /// to the engine. The engine itself never calls this.
    pub fn validate(&self) -> Result<(), InputValidationError> {
        for income in &self.incomes {
            if income.amount.is_negative() {
                return Err(InputValidationError::NegativeAmount(income.label()));
            }
        }

        for expense in &self.fixed_expenses {
            if expense.amount.is_negative() {
                return Err(InputValidationError::NegativeAmount(format!(
                    "expense '{}'",
                    expense.name
                )));
            }
        }

        for goal in &self.goals {
            if !goal.target_amount.is_positive() {
                return Err(InputValidationError::NonPositiveGoal(goal.name.clone()));
            }
        }

        if let Some(rate) = self.variable_preferences.save_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err(InputValidationError::SaveRateOutOfRange(rate));
            }
        }

        for (category, pct) in &self.variable_preferences.splits {
            if *pct < 0.0 || !pct.is_finite() {
                return Err(InputValidationError::NegativeSplit(category.clone()));
            }
        }

        Ok(())
    }
}

/// Validation errors for budget input records
#[derive(Debug, Clone, PartialEq)]
pub enum InputValidationError {
    NegativeAmount(String),
    NonPositiveGoal(String),
    SaveRateOutOfRange(f64),
    NegativeSplit(String),
}

impl fmt::Display for InputValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(line) => write!(f, "Amount for {} cannot be negative", line),
            Self::NonPositiveGoal(name) => {
                write!(f, "Goal '{}' must have a positive target amount", name)
            }
            Self::SaveRateOutOfRange(rate) => {
                write!(f, "Save rate {} must be between 0 and 1", rate)
            }
            Self::NegativeSplit(category) => {
                write!(f, "Split for '{}' must be a non-negative number", category)
            }
        }
    }
}

impl std::error::Error for InputValidationError {}
