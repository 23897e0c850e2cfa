//! CLI command for the planned-vs-actual balance report

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::{StashError, StashResult};
use crate::models::PlanLineItem;
use crate::reports::BalanceReport;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Line items JSON (as written by `plan --items`, with actuals filled in)
    pub file: PathBuf,

    /// Export variance to this CSV file instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the report command
pub fn handle_report_command(settings: &Settings, args: ReportArgs) -> StashResult<()> {
    let contents = std::fs::read_to_string(&args.file).map_err(|e| {
        StashError::Io(format!("Failed to read {}: {}", args.file.display(), e))
    })?;
    let items: Vec<PlanLineItem> = serde_json::from_str(&contents)?;

    let report = BalanceReport::generate(items).with_currency(&settings.currency_symbol);

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            StashError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Variance report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}
