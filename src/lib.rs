//! stashflow - weekly budget allocation and savings projection
//!
//! This library turns a household's declared incomes, fixed obligations and
//! savings goals into a weekly spending plan, scores how healthy that plan
//! is, and projects how savings grow over time.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, engine defaults and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, cadences, inputs, plans)
//! - `services`: The allocation engine, scoring, tips and projections
//! - `export`: JSON, YAML and CSV output
//! - `reports`: Terminal reports for plans, projections and balances
//! - `display`: Shared terminal formatting
//! - `cli`: Command handlers for the `stashflow` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use stashflow::config::AllocationConfig;
//! use stashflow::models::{BudgetInput, Cadence, ExpenseLine, IncomeLine, Money, PlanTier};
//! use stashflow::services::AllocationService;
//!
//! let input = BudgetInput::new()
//!     .with_income(IncomeLine::new(Money::from_cents(200000), Cadence::Monthly))
//!     .with_expense(ExpenseLine::new("Rent", Money::from_cents(80000), Cadence::Monthly));
//!
//! let config = AllocationConfig::default();
//! let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
//! let plan = AllocationService::new(&config)
//!     .compute_weekly_plan(&input, PlanTier::Paid, today)
//!     .unwrap();
//!
//! assert_eq!(plan.income, Money::from_cents(46030));
//! assert_eq!(plan.save_amount, Money::from_cents(5524));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{StashError, StashResult};
