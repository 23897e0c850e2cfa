//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the engine services.

pub mod import;
pub mod limits;
pub mod plan;
pub mod project;
pub mod report;

use std::path::Path;

use chrono::NaiveDate;

use crate::error::{StashError, StashResult};
use crate::models::{BudgetInput, Money};
use crate::services::BudgetImporter;

pub use import::{handle_import_command, handle_template_command, ImportArgs, TemplateArgs};
pub use limits::{handle_limits_command, LimitsArgs};
pub use plan::{handle_plan_command, OutputFormat, PlanArgs};
pub use project::{handle_grow_command, handle_project_command, GrowArgs, ProjectArgs};
pub use report::{handle_report_command, ReportArgs};

/// Load a budget input from JSON, YAML or the CSV template, chosen by file
/// extension. Anything unrecognized is read as JSON.
pub fn load_budget_input(path: &Path) -> StashResult<BudgetInput> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let input = match extension.as_deref() {
        Some("csv") => {
            let report = BudgetImporter::new().import_file(path)?;
            for (line, msg) in &report.error_messages {
                tracing::warn!(line, "{}", msg);
            }
            report.input
        }
        Some("yaml") | Some("yml") => {
            let contents = read_file(path)?;
            serde_yaml::from_str(&contents)?
        }
        _ => {
            let contents = read_file(path)?;
            serde_json::from_str(&contents)?
        }
    };

    tracing::debug!(path = %path.display(), "loaded budget input");
    Ok(input)
}

fn read_file(path: &Path) -> StashResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| StashError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Parse a dollar amount from the command line
pub(crate) fn parse_money(s: &str, what: &str) -> StashResult<Money> {
    Money::parse(s).map_err(|e| StashError::Validation(format!("Invalid {}: {}", what, e)))
}

/// Parse a YYYY-MM-DD date from the command line
pub(crate) fn parse_date(s: &str) -> StashResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        StashError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
    })
}

/// Write `contents` to `path`, or print it when no path is given
pub(crate) fn write_or_print(contents: &str, path: Option<&Path>) -> StashResult<()> {
    match path {
        Some(path) => {
            std::fs::write(path, contents).map_err(|e| {
                StashError::Export(format!("Failed to write {}: {}", path.display(), e))
            })?;
            println!("Written to: {}", path.display());
        }
        None => print!("{}", contents),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_and_yaml() {
        let dir = TempDir::new().unwrap();

        let json = dir.path().join("budget.json");
        std::fs::write(
            &json,
            r#"{"incomes":[{"amount":200000,"cadence":"monthly"}],
                "fixed_expenses":[{"name":"Rent","amount":80000,"cadence":"monthly"}]}"#,
        )
        .unwrap();
        let input = load_budget_input(&json).unwrap();
        assert_eq!(input.incomes[0].amount.cents(), 200000);
        assert_eq!(input.fixed_expenses[0].name, "Rent");

        let yaml = dir.path().join("budget.yaml");
        std::fs::write(
            &yaml,
            "incomes:\n  - amount: 50000\n    cadence: weekly\ngoals: []\n",
        )
        .unwrap();
        let input = load_budget_input(&yaml).unwrap();
        assert_eq!(input.incomes[0].amount.cents(), 50000);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_budget_input(Path::new("/nonexistent/budget.json")).unwrap_err();
        assert!(matches!(err, StashError::Io(_)));
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_money("1,250.50", "amount").unwrap().cents(), 125050);
        assert!(parse_money("abc", "amount").unwrap_err().is_validation());
        assert!(parse_date("2026-13-01").unwrap_err().is_validation());
    }
}
