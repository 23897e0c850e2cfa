//! Reports module for stashflow
//!
//! Terminal and CSV renderings of weekly plans, growth projections and
//! planned-vs-actual balances.

pub mod balance;
pub mod projection;
pub mod weekly_plan;

pub use balance::BalanceReport;
pub use projection::{GrowthReport, ProjectionReport};
pub use weekly_plan::{SavingsOutlook, WeeklyPlanReport};
