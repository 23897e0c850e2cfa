use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stashflow::cli::{
    handle_grow_command, handle_import_command, handle_limits_command, handle_plan_command,
    handle_project_command, handle_report_command, handle_template_command, GrowArgs, ImportArgs,
    LimitsArgs, PlanArgs, ProjectArgs, ReportArgs, TemplateArgs,
};
use stashflow::config::{paths::StashPaths, settings::Settings};
use stashflow::services::generate_template;

#[derive(Parser)]
#[command(
    name = "stashflow",
    author = "Kaylee Beyene",
    version,
    about = "Weekly budget allocation and savings projections",
    long_about = "stashflow turns your incomes, bills and savings goals into a \
                  weekly spending plan, tells you how healthy it is, and shows \
                  how your savings could grow."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the weekly plan for a budget input file
    Plan(PlanArgs),

    /// Project the growth of a lump sum
    Project(ProjectArgs),

    /// Simulate monthly contributions growing over time
    Grow(GrowArgs),

    /// Print the spreadsheet import template
    Template(TemplateArgs),

    /// Convert a filled-in template into a budget input file
    Import(ImportArgs),

    /// Check a budget input against the free-tier limits
    Limits(LimitsArgs),

    /// Planned vs actual report for saved line items
    Report(ReportArgs),

    /// Create the settings file and an import template
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: bool) {
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = StashPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Plan(args)) => handle_plan_command(&settings, args)?,
        Some(Commands::Project(args)) => handle_project_command(&settings, args)?,
        Some(Commands::Grow(args)) => handle_grow_command(&settings, args)?,
        Some(Commands::Template(args)) => handle_template_command(args)?,
        Some(Commands::Import(args)) => handle_import_command(args)?,
        Some(Commands::Limits(args)) => handle_limits_command(&settings, args)?,
        Some(Commands::Report(args)) => handle_report_command(&settings, args)?,
        Some(Commands::Init) => {
            println!("Initializing stashflow at: {}", paths.base_dir().display());
            settings.save(&paths)?;

            let template = paths.template_file();
            if !template.exists() {
                let file = std::fs::File::create(&template)?;
                generate_template(file)?;
            }

            println!("Initialization complete!");
            println!();
            println!("Settings:        {}", paths.settings_file().display());
            println!("Import template: {}", template.display());
            println!();
            println!("Fill in the template, then run 'stashflow plan <file>'.");
        }
        Some(Commands::Config) => {
            println!("stashflow Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Default tier:        {}", settings.default_tier);
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Projection horizons: {:?}", settings.projection_horizons);
            println!("  Growth rate:         {}", settings.allocation.annual_rate);
            println!("  Free save rate:      {}", settings.allocation.free_save_rate);
            println!("  Cadence policy:      {:?}", settings.allocation.cadence_policy);
            println!("  Default splits:");
            for (category, pct) in &settings.allocation.default_splits {
                println!("    {:<16} {}", category, pct);
            }
        }
        None => {
            println!("stashflow - weekly budget allocation");
            println!();
            println!("Run 'stashflow --help' for usage information.");
        }
    }

    Ok(())
}
