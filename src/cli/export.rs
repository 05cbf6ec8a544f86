//! Export CLI command
//!
//! Writes the filtered expenses to a CSV file.

use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::export::export_expenses_to_file;
use crate::services::{list_expenses, ExpenseFilter};
use crate::storage::Storage;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (defaults to the configured export file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only expenses in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only expenses in this month (1-12)
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Only expenses in this year
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// Handle `export`
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> TrackerResult<()> {
    let filter = ExpenseFilter::for_period(args.month, args.year, args.category.as_deref())?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&settings.default_export_file));

    let expenses = list_expenses(&storage.store, &filter);
    let count = export_expenses_to_file(&expenses, &output)?;

    println!("Exported {} rows to {}", count, output.display());
    Ok(())
}
