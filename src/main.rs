use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sahla_budget::cli::{handle_export_command, handle_insight_command, CliContext, ExportArgs, InsightCommands};
use sahla_budget::config::{paths::SahlaPaths, settings::Settings};
use sahla_budget::storage::Snapshot;

#[derive(Parser)]
#[command(
    name = "sahla",
    version,
    about = "Shopping and budget insights for the household",
    long_about = "Sahla Budget reads the household's transaction snapshot and shows \
                  what was consumed, which supplier is cheapest, the best deal for \
                  each essential item, what needs restocking and how the month's \
                  budget is holding up."
)]
struct Cli {
    /// Snapshot file to read (default: <data dir>/data/snapshot.json)
    #[arg(long, global = true, env = "SAHLA_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Insight(InsightCommands),

    /// Export every view for a month to a file
    Export(ExportArgs),

    /// Create the settings file and data directories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    sahla_budget::init_tracing();

    let cli = Cli::parse();

    let paths = SahlaPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("Sahla Budget - shopping and budget insights");
            println!();
            println!("Run 'sahla --help' for usage information.");
            return Ok(());
        }
    };

    match command {
        Commands::Init => {
            if paths.is_initialized() {
                println!("Already initialized at: {}", paths.base_dir().display());
            } else {
                settings.save(&paths)?;
                println!("Initialized Sahla Budget at: {}", paths.base_dir().display());
                println!();
                println!(
                    "Place the app's backup at {} and run 'sahla deals' to start.",
                    paths.snapshot_file().display()
                );
            }
        }
        Commands::Config => print_config(&paths, &settings),
        Commands::Insight(cmd) => {
            let ctx = load_context(cli.snapshot, &paths, settings, Local::now().naive_local())?;
            handle_insight_command(&ctx, cmd)?;
        }
        Commands::Export(args) => {
            // The only clock reading of the run
            let exported_at = Utc::now();
            let now = exported_at.with_timezone(&Local).naive_local();
            let ctx = load_context(cli.snapshot, &paths, settings, now)?;
            handle_export_command(&ctx, args, exported_at)?;
        }
    }

    Ok(())
}

fn load_context(
    snapshot: Option<PathBuf>,
    paths: &SahlaPaths,
    settings: Settings,
    now: NaiveDateTime,
) -> Result<CliContext> {
    let snapshot_path = snapshot.unwrap_or_else(|| paths.snapshot_file());
    let snapshot = Snapshot::load(&snapshot_path)
        .with_context(|| format!("Failed to load snapshot {}", snapshot_path.display()))?;
    Ok(CliContext::new(snapshot, settings, now))
}

fn print_config(paths: &SahlaPaths, settings: &Settings) {
    println!("Sahla Budget Configuration");
    println!("==========================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Snapshot file:    {}", paths.snapshot_file().display());
    println!("Export directory: {}", paths.export_dir().display());
    println!();
    println!("Settings:");
    println!("  Language:             {}", settings.language);
    println!("  Currency:             {}", settings.currency_symbol);
    println!("  Restock window:       {} days", settings.restock_window_days);
    println!("  Advice transactions:  {}", settings.advice_transaction_limit);
    println!("  Chart months:         {}", settings.monthly_chart_months);
}
