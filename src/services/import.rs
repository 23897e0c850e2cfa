//! Spreadsheet import for budget inputs
//!
//! Reads the five-column budget template (`Category,Type,Amount,Frequency,Description`)
//! into a [`BudgetInput`]. Rows that fail to parse are reported by line
//! number instead of aborting the whole import.

use std::collections::BTreeMap;
use std::io::{Read, Write};

use chrono::NaiveDate;
use csv::{Reader, ReaderBuilder, StringRecord, Writer};

use crate::error::{StashError, StashResult};
use crate::models::{BudgetInput, Cadence, ExpenseLine, GoalLine, IncomeLine, Money};

/// Column headers of the budget template
pub const TEMPLATE_HEADERS: [&str; 5] = ["Category", "Type", "Amount", "Frequency", "Description"];

const SAMPLE_ROWS: [[&str; 5]; 5] = [
    ["Salary", "Income", "2000.00", "monthly", "Day job"],
    ["Rent", "Fixed Expense", "800.00", "monthly", ""],
    ["Phone", "Fixed Expense", "45.00", "monthly", ""],
    ["Car Insurance", "Fixed Expense", "600.00", "annual", ""],
    ["Vacation", "Goal", "1200.00", "2027-06-01", "Summer trip"],
];

/// What a template row declares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowType {
    Income,
    FixedExpense,
    Goal,
}

impl RowType {
    /// Parse the Type column, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "fixed expense" | "fixed_expense" | "expense" => Some(Self::FixedExpense),
            "goal" => Some(Self::Goal),
            _ => None,
        }
    }
}

/// Result of an import
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Everything that parsed
    pub input: BudgetInput,
    /// Number of rows turned into input lines
    pub rows_imported: usize,
    /// Error messages keyed by file line number (the header is line 1)
    pub error_messages: BTreeMap<usize, String>,
}

impl ImportReport {
    pub fn has_errors(&self) -> bool {
        !self.error_messages.is_empty()
    }
}

/// Importer for the budget template format
#[derive(Debug, Default)]
pub struct BudgetImporter;

impl BudgetImporter {
    pub fn new() -> Self {
        Self
    }

    /// Import from any reader holding template CSV
    pub fn import_from_reader<R: Read>(&self, reader: R) -> StashResult<ImportReport> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        self.import_csv(&mut reader)
    }

    /// Import from a file on disk
    pub fn import_file(&self, path: &std::path::Path) -> StashResult<ImportReport> {
        let file = std::fs::File::open(path)
            .map_err(|e| StashError::Import(format!("Failed to open {}: {}", path.display(), e)))?;
        self.import_from_reader(file)
    }

    fn import_csv<R: Read>(&self, reader: &mut Reader<R>) -> StashResult<ImportReport> {
        let headers = reader
            .headers()
            .map_err(|e| StashError::Import(format!("Error reading CSV header: {}", e)))?
            .clone();
        check_headers(&headers)?;

        let mut report = ImportReport::default();

        for (idx, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    let line = e
                        .position()
                        .map_or(idx + 2, |pos| pos.line() as usize);
                    report
                        .error_messages
                        .insert(line, format!("Error reading CSV record: {}", e));
                    continue;
                }
            };

            let line = record
                .position()
                .map_or(idx + 2, |pos| pos.line() as usize);

            if record.iter().all(|field| field.is_empty()) {
                continue;
            }

            match self.apply_record(&record, &mut report.input) {
                Ok(()) => report.rows_imported += 1,
                Err(msg) => {
                    tracing::warn!(line, error = %msg, "skipping template row");
                    report.error_messages.insert(line, msg);
                }
            }
        }

        tracing::debug!(
            rows = report.rows_imported,
            errors = report.error_messages.len(),
            "imported budget template"
        );
        Ok(report)
    }

    /// Parse one record and append it to `input`
    fn apply_record(&self, record: &StringRecord, input: &mut BudgetInput) -> Result<(), String> {
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let category = field(0);
        if category.is_empty() {
            return Err("Missing category".to_string());
        }

        let row_type = RowType::parse(field(1)).ok_or_else(|| {
            format!(
                "Unknown type '{}' (expected Income, Fixed Expense or Goal)",
                field(1)
            )
        })?;

        let amount = Money::parse(field(2)).map_err(|e| e.to_string())?;
        if amount.is_negative() {
            return Err(format!("Negative amount for '{}'", category));
        }

        let frequency = field(3);
        let description = field(4);

        match row_type {
            RowType::Income => {
                let source = if description.is_empty() { category } else { description };
                input
                    .incomes
                    .push(IncomeLine::new(amount, parse_cadence(frequency)).with_source(source));
            }
            RowType::FixedExpense => {
                input
                    .fixed_expenses
                    .push(ExpenseLine::new(category, amount, parse_cadence(frequency)));
            }
            RowType::Goal => {
                let due = NaiveDate::parse_from_str(frequency, "%Y-%m-%d").map_err(|_| {
                    format!("Invalid goal date '{}' (expected YYYY-MM-DD)", frequency)
                })?;
                if !amount.is_positive() {
                    return Err(format!("Goal '{}' needs a positive target", category));
                }
                input.goals.push(GoalLine::new(category, amount, due));
            }
        }

        Ok(())
    }
}

/// Blank frequency means monthly; anything else goes through the cadence parser
fn parse_cadence(s: &str) -> Cadence {
    if s.is_empty() {
        Cadence::default()
    } else {
        Cadence::parse(s)
    }
}

fn check_headers(headers: &StringRecord) -> StashResult<()> {
    let mismatched: Vec<&str> = TEMPLATE_HEADERS
        .iter()
        .take(4)
        .enumerate()
        .filter(|&(idx, expected)| {
            headers
                .get(idx)
                .map_or(true, |found| !found.trim().eq_ignore_ascii_case(expected))
        })
        .map(|(_, expected)| *expected)
        .collect();

    if mismatched.is_empty() {
        Ok(())
    } else {
        Err(StashError::Import(format!(
            "Unexpected header; expected columns {} (mismatched: {})",
            TEMPLATE_HEADERS.join(","),
            mismatched.join(", ")
        )))
    }
}

/// Write the empty template: header plus a few sample rows
pub fn generate_template<W: Write>(writer: W) -> StashResult<()> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(TEMPLATE_HEADERS)
        .map_err(|e| StashError::Export(e.to_string()))?;
    for row in SAMPLE_ROWS {
        wtr.write_record(row)
            .map_err(|e| StashError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import(csv: &str) -> ImportReport {
        BudgetImporter::new().import_from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_row_type_parse() {
        assert_eq!(RowType::parse("Income"), Some(RowType::Income));
        assert_eq!(RowType::parse("  FIXED EXPENSE "), Some(RowType::FixedExpense));
        assert_eq!(RowType::parse("goal"), Some(RowType::Goal));
        assert_eq!(RowType::parse("Loan"), None);
    }

    #[test]
    fn test_import_all_row_types() {
        let report = import(
            "Category,Type,Amount,Frequency,Description\n\
             Salary,Income,\"2,000.00\",monthly,Day job\n\
             Tips,income,150,weekly,\n\
             Rent,Fixed Expense,800.00,Monthly,\n\
             Vacation,Goal,1200,2027-06-01,Summer\n",
        );

        assert!(!report.has_errors());
        assert_eq!(report.rows_imported, 4);

        let input = &report.input;
        assert_eq!(input.incomes.len(), 2);
        assert_eq!(input.incomes[0].amount.cents(), 200000);
        assert_eq!(input.incomes[0].source.as_deref(), Some("Day job"));
        assert_eq!(input.incomes[1].source.as_deref(), Some("Tips"));
        assert_eq!(input.incomes[1].cadence, Cadence::Weekly);
        assert_eq!(input.fixed_expenses[0].name, "Rent");
        assert_eq!(input.fixed_expenses[0].cadence, Cadence::Monthly);
        assert_eq!(
            input.goals[0].due_date,
            NaiveDate::from_ymd_opt(2027, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_bad_rows_are_reported_by_line() {
        let report = import(
            "Category,Type,Amount,Frequency,Description\n\
             Salary,Income,abc,monthly,\n\
             Rent,Fixed Expense,800,monthly,\n\
             Boat,Loan,100,monthly,\n\
             Trip,Goal,500,next summer,\n",
        );

        assert_eq!(report.rows_imported, 1);
        assert_eq!(report.error_messages.len(), 3);
        assert!(report.error_messages[&2].contains("Invalid money format"));
        assert!(report.error_messages[&4].contains("Unknown type"));
        assert!(report.error_messages[&5].contains("Invalid goal date"));
    }

    #[test]
    fn test_malformed_amounts_do_not_abort_import() {
        let report = import(
            "Category,Type,Amount,Frequency,Description\n\
             Rent,Fixed Expense,1.€5,monthly,\n\
             Salary,Income,92233720368547759,monthly,\n\
             Phone,Fixed Expense,45.00,monthly,\n",
        );

        assert_eq!(report.rows_imported, 1);
        assert_eq!(report.input.fixed_expenses.len(), 1);
        assert_eq!(report.input.fixed_expenses[0].name, "Phone");
        assert_eq!(report.input.fixed_expenses[0].amount.cents(), 4500);
        assert!(report.error_messages[&2].contains("Invalid money format"));
        assert!(report.error_messages[&3].contains("Invalid money format"));
    }

    #[test]
    fn test_unknown_frequency_passes_through() {
        let report = import(
            "Category,Type,Amount,Frequency,Description\n\
             Gym,Fixed Expense,30,fortnightly,\n\
             Netflix,Fixed Expense,15,,\n",
        );

        assert_eq!(
            report.input.fixed_expenses[0].cadence,
            Cadence::Other("fortnightly".to_string())
        );
        assert_eq!(report.input.fixed_expenses[1].cadence, Cadence::Monthly);
    }

    #[test]
    fn test_wrong_header_is_an_error() {
        let err = BudgetImporter::new()
            .import_from_reader("Date,Amount,Payee\n2025-01-01,10,Shop\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, StashError::Import(_)));
    }

    #[test]
    fn test_template_imports_cleanly() {
        let mut buf = Vec::new();
        generate_template(&mut buf).unwrap();

        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("Category,Type,Amount,Frequency,Description\n"));

        let report = BudgetImporter::new().import_from_reader(buf.as_slice()).unwrap();
        assert!(!report.has_errors());
        assert_eq!(report.rows_imported, SAMPLE_ROWS.len());
        assert_eq!(report.input.goals.len(), 1);
    }
}
