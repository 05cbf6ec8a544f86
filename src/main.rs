use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_budget_command, handle_delete_command, handle_export_command,
    handle_history_command, handle_list_command, handle_show_command, handle_summary_command,
    handle_update_command, AddArgs, BudgetArgs, DeleteArgs, ExportArgs, HistoryArgs, ListArgs,
    ShowArgs, SummaryArgs, UpdateArgs,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Simple command-line expense tracker",
    long_about = "Record, edit and summarize personal expenses, track a monthly \
                  budget and export to CSV. Data lives in a single JSON file \
                  under ~/.expense-tracker unless --data-dir is given."
)]
struct Cli {
    /// Directory holding the expense store, settings and audit log
    #[arg(long, global = true, env = "EXPENSE_TRACKER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add(AddArgs),

    /// Update fields of an existing expense
    Update(UpdateArgs),

    /// Delete an expense
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// List expenses
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a single expense
    Show(ShowArgs),

    /// Show total spending
    Summary(SummaryArgs),

    /// Set, clear or show the budget for a month
    Budget(BudgetArgs),

    /// Export expenses to CSV
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History(HistoryArgs),

    /// Show current configuration and paths
    Config {
        /// Write the default settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = TrackerPaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    // Commands that never touch the store
    let command = match cli.command {
        Commands::History(args) => return Ok(handle_history_command(&paths, args)?),
        Commands::Config { init } => return show_config(&paths, &settings, init),
        command => command,
    };

    let mut storage = Storage::open(paths, &settings)?;

    match command {
        Commands::Add(args) => handle_add_command(&mut storage, &settings, args)?,
        Commands::Update(args) => handle_update_command(&mut storage, &settings, args)?,
        Commands::Delete(args) => handle_delete_command(&mut storage, args)?,
        Commands::List(args) => handle_list_command(&storage, &settings, args)?,
        Commands::Show(args) => handle_show_command(&storage, &settings, args)?,
        Commands::Summary(args) => handle_summary_command(&storage, &settings, args)?,
        Commands::Budget(args) => handle_budget_command(&mut storage, &settings, args)?,
        Commands::Export(args) => handle_export_command(&storage, &settings, args)?,
        Commands::History(_) | Commands::Config { .. } => {}
    }

    Ok(())
}

fn show_config(paths: &TrackerPaths, settings: &Settings, init: bool) -> Result<()> {
    if init {
        settings.save(paths)?;
        println!("Settings written to {}", paths.settings_file().display());
        println!();
    }

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Store file:     {}", paths.store_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:     {}", settings.currency_symbol);
    println!("  Default export file: {}", settings.default_export_file);
    println!("  Audit enabled:       {}", settings.audit_enabled);

    Ok(())
}
