//! CLI command for checking free-tier limits

use std::path::PathBuf;

use clap::Args;

use super::load_budget_input;
use crate::config::Settings;
use crate::error::StashResult;
use crate::models::PlanTier;
use crate::services::check_limits;

#[derive(Args, Debug)]
pub struct LimitsArgs {
    /// Budget input file (.json, .yaml or .csv template)
    pub file: PathBuf,

    /// Plan tier (free or paid); defaults to the configured tier
    #[arg(short, long)]
    pub tier: Option<PlanTier>,
}

/// Handle the limits command
pub fn handle_limits_command(settings: &Settings, args: LimitsArgs) -> StashResult<()> {
    let input = load_budget_input(&args.file)?;
    let tier = args.tier.unwrap_or(settings.default_tier);
    let limits = &settings.allocation.free_limits;

    match check_limits(&input, tier, limits).reason() {
        None => {
            println!("Within {} tier limits.", tier);
            if tier.is_free() {
                println!(
                    "  incomes {}/{}, fixed expenses {}/{}, goals {}/{}",
                    input.incomes.len(),
                    limits.max_incomes,
                    input.fixed_expenses.len(),
                    limits.max_fixed_expenses,
                    input.goals.len(),
                    limits.max_goals
                );
            }
        }
        Some(reason) => println!("{}", reason),
    }

    Ok(())
}
