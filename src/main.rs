use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_ledger::cli::{
    handle_expense_command, handle_export, handle_report_command, ExpenseCommands,
    ReportCommands,
};
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::services::ExpenseService;
use expense_ledger::LedgerResult;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal-based personal expense ledger",
    long_about = "Records expenses in a ledger file in the current directory \
                  (or EXPENSE_LEDGER_DIR) and reports spending by category, \
                  by month and overall."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Export all expenses to a CSV file
    Export {
        /// Output file (defaults to expenses_<timestamp>.csv); ".csv" is
        /// appended when missing
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config {
        /// Write the settings file with default values if it doesn't exist
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths);

    let Some(command) = cli.command else {
        println!("expense-ledger - record and review your spending");
        println!();
        println!("Run 'ledger --help' for usage information.");
        println!("Run 'ledger add \"Lunch\" 12.50 -c food' to record an expense.");
        return Ok(());
    };

    // config reports a broken settings file instead of failing on it
    match command {
        Commands::Config { init } => show_config(&paths, settings, init)?,
        Commands::Expense(cmd) => {
            let settings = settings?;
            let mut service = open_ledger(&paths, &settings);
            handle_expense_command(&mut service, &settings, cmd)?;
        }
        Commands::Report(cmd) => {
            let settings = settings?;
            handle_report_command(&open_ledger(&paths, &settings), &settings, cmd)?;
        }
        Commands::Export { output } => {
            let settings = settings?;
            handle_export(&open_ledger(&paths, &settings), output)?;
        }
    }

    Ok(())
}

fn open_ledger(paths: &LedgerPaths, settings: &Settings) -> ExpenseService {
    ExpenseService::open(paths.data_file()).with_month_bucketing(settings.month_bucketing)
}

fn show_config(paths: &LedgerPaths, settings: LedgerResult<Settings>, init: bool) -> Result<()> {
    println!("Expense Ledger Configuration");
    println!("============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Ledger file:    {}", paths.data_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!();

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            println!("Settings file is invalid: {}", e);
            println!("Fix or remove it to fall back to the defaults.");
            return Ok(());
        }
    };

    if init && !paths.settings_file().exists() {
        settings.save(paths)?;
        println!("Wrote default settings to {}", paths.settings_file().display());
        println!();
    }

    println!("Settings:");
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  Recent window:     {} days", settings.recent_window_days);
    println!("  Month bucketing:   {}", settings.month_bucketing);
    println!("  List date format:  {}", settings.list_date_format);
    Ok(())
}
