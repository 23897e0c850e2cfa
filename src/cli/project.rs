//! CLI commands for growth projections

use clap::Args;

use super::parse_money;
use crate::config::Settings;
use crate::error::{StashError, StashResult};
use crate::reports::{GrowthReport, ProjectionReport};

#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Starting amount in dollars (e.g. 1000 or 1,000.00)
    pub principal: String,

    /// Annual growth rate as a fraction (0.08 = 8%)
    #[arg(short, long)]
    pub rate: Option<f64>,

    /// Horizons in years; defaults to the configured horizons
    #[arg(short, long, num_args = 1.., value_delimiter = ',')]
    pub years: Vec<u32>,
}

#[derive(Args, Debug)]
pub struct GrowArgs {
    /// Amount contributed each month, in dollars
    #[arg(short, long)]
    pub contribution: String,

    /// Starting balance in dollars
    #[arg(short, long, default_value = "0")]
    pub start: String,

    /// Number of monthly contributions
    #[arg(short, long, default_value_t = 12)]
    pub months: u32,

    /// Annual growth rate as a fraction (0.08 = 8%)
    #[arg(short, long)]
    pub rate: Option<f64>,
}

fn check_rate(rate: f64) -> StashResult<f64> {
    if rate.is_finite() && rate > -1.0 {
        Ok(rate)
    } else {
        Err(StashError::Validation(format!(
            "Growth rate {} must be a number above -1",
            rate
        )))
    }
}

/// Handle the project command
pub fn handle_project_command(settings: &Settings, args: ProjectArgs) -> StashResult<()> {
    let principal = parse_money(&args.principal, "principal")?;
    let rate = check_rate(args.rate.unwrap_or(settings.allocation.annual_rate))?;
    let horizons = if args.years.is_empty() {
        settings.projection_horizons.clone()
    } else {
        args.years
    };

    let report = ProjectionReport::generate(principal, rate, &horizons)
        .with_currency(&settings.currency_symbol);
    println!("{}", report.format_terminal());
    Ok(())
}

/// Handle the grow command
pub fn handle_grow_command(settings: &Settings, args: GrowArgs) -> StashResult<()> {
    let contribution = parse_money(&args.contribution, "contribution")?;
    let start = parse_money(&args.start, "starting balance")?;
    let rate = check_rate(args.rate.unwrap_or(settings.allocation.annual_rate))?;

    let report = GrowthReport::generate(start, contribution, args.months, rate)
        .with_currency(&settings.currency_symbol);
    println!("{}", report.format_terminal());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_rate() {
        assert_eq!(check_rate(0.08).unwrap(), 0.08);
        assert!(check_rate(-1.5).is_err());
        assert!(check_rate(f64::NAN).is_err());
    }
}
