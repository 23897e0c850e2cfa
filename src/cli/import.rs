//! CLI commands for the spreadsheet template

use std::path::PathBuf;

use clap::Args;

use super::write_or_print;
use crate::error::{StashError, StashResult};
use crate::services::{generate_template, BudgetImporter};

#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Write the template here instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Filled-in budget template (CSV)
    pub file: PathBuf,

    /// Write the resulting budget input (JSON) here instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the template command
pub fn handle_template_command(args: TemplateArgs) -> StashResult<()> {
    let mut buf = Vec::new();
    generate_template(&mut buf)?;
    let text = String::from_utf8(buf).map_err(|e| StashError::Export(e.to_string()))?;
    write_or_print(&text, args.output.as_deref())
}

/// Handle the import command
pub fn handle_import_command(args: ImportArgs) -> StashResult<()> {
    let report = BudgetImporter::new().import_file(&args.file)?;

    eprintln!(
        "Imported {} row(s): {} income(s), {} fixed expense(s), {} goal(s)",
        report.rows_imported,
        report.input.incomes.len(),
        report.input.fixed_expenses.len(),
        report.input.goals.len()
    );
    for (line, msg) in &report.error_messages {
        eprintln!("  line {}: {}", line, msg);
    }

    let mut json = serde_json::to_string_pretty(&report.input)?;
    json.push('\n');
    write_or_print(&json, args.output.as_deref())
}
