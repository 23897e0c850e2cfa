//! Export module for stashflow
//!
//! Writes computed plans and their line items out of the engine:
//! - CSV: planned-vs-actual variance per line (spreadsheet-compatible)
//! - JSON: machine-readable plan export, also readable back in
//! - YAML: human-readable plan export

pub mod csv;
pub mod json;
pub mod yaml;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Diagnostics, PlanLineItem, PlanTier, WeeklyPlan};

pub use self::csv::{export_allocations_csv, export_variance_csv};
pub use json::{export_plan_json, import_plan_json, EXPORT_SCHEMA_VERSION};
pub use yaml::export_plan_yaml;

/// A computed plan with everything needed to display or persist it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub tier: PlanTier,
    pub plan: WeeklyPlan,
    pub diagnostics: Diagnostics,
    pub line_items: Vec<PlanLineItem>,
}

impl PlanExport {
    pub fn new(
        tier: PlanTier,
        plan: WeeklyPlan,
        diagnostics: Diagnostics,
        line_items: Vec<PlanLineItem>,
    ) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            tier,
            plan,
            diagnostics,
            line_items,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.diagnostics.score > 100 {
            return Err(format!(
                "Health score {} is out of range",
                self.diagnostics.score
            ));
        }

        Ok(())
    }
}
