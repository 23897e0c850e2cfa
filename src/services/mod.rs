//! Engine services for stashflow
//!
//! Pure computations over budget inputs and plans: cadence normalization,
//! allocation, scoring, tips, projections and report bucketing, plus the
//! spreadsheet importer that feeds them.

pub mod allocation;
pub mod cadence;
pub mod categorize;
pub mod health;
pub mod import;
pub mod limits;
pub mod projection;
pub mod sinking;
pub mod tips;

pub use allocation::{AllocationService, ENGINE_VERSION};
pub use categorize::{categorize, BalanceView, Bucket, BucketSummary};
pub use import::{generate_template, BudgetImporter, ImportReport};
pub use limits::{check_limits, LimitCheck};
pub use tips::diagnose;
