//! CLI command for computing a weekly plan

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::{load_budget_input, parse_date};
use crate::config::Settings;
use crate::error::{StashError, StashResult};
use crate::export::{export_plan_json, export_plan_yaml, PlanExport};
use crate::models::PlanTier;
use crate::reports::WeeklyPlanReport;
use crate::services::{check_limits, diagnose, AllocationService};

/// Years shown in the savings outlook under the plan table
const OUTLOOK_YEARS: u32 = 10;

/// How `plan` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Budget input file (.json, .yaml or .csv template)
    pub file: PathBuf,

    /// Plan tier (free or paid); defaults to the configured tier
    #[arg(short, long, env = "STASHFLOW_TIER")]
    pub tier: Option<PlanTier>,

    /// Compute as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub today: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Reject unrecognized cadences instead of passing the amount through
    #[arg(long)]
    pub strict: bool,

    /// Fail when the input exceeds the free-tier limits
    #[arg(long)]
    pub enforce_limits: bool,

    /// Also write the plan's line items (JSON) for a later `report`
    #[arg(long)]
    pub items: Option<PathBuf>,
}

/// Handle the plan command
pub fn handle_plan_command(settings: &Settings, args: PlanArgs) -> StashResult<()> {
    let input = load_budget_input(&args.file)?;
    input.validate()?;

    let tier = args.tier.unwrap_or(settings.default_tier);
    let today = match &args.today {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let mut config = settings.allocation.clone();
    if args.strict {
        config = config.strict();
    }

    let limit_check = check_limits(&input, tier, &config.free_limits);
    if let Some(reason) = limit_check.reason() {
        if args.enforce_limits {
            return limit_check.into_result();
        }
        eprintln!("Warning: {}", reason);
    }

    let service = AllocationService::new(&config);
    let plan = service.compute_weekly_plan(&input, tier, today)?;
    let line_items = service.plan_line_items(&input, &plan, today)?;
    let diagnostics = diagnose(&plan, tier);

    if let Some(path) = &args.items {
        let file = File::create(path).map_err(|e| {
            StashError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &line_items)?;
        writer.flush()?;
        tracing::info!(path = %path.display(), count = line_items.len(), "wrote line items");
    }

    match args.format {
        OutputFormat::Table => {
            let report = WeeklyPlanReport::new(tier, plan, diagnostics)
                .with_currency(&settings.currency_symbol)
                .with_outlook(OUTLOOK_YEARS, config.annual_rate);
            println!("{}", report.format_terminal());
        }
        OutputFormat::Json => {
            let export = PlanExport::new(tier, plan, diagnostics, line_items);
            let mut stdout = std::io::stdout().lock();
            export_plan_json(&export, &mut stdout, true)?;
            stdout.flush()?;
        }
        OutputFormat::Yaml => {
            let export = PlanExport::new(tier, plan, diagnostics, line_items);
            let mut stdout = std::io::stdout().lock();
            export_plan_yaml(&export, &mut stdout)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
