//! Summary CLI command

use clap::Args;

use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::reports::{SpendingSummary, SummaryPeriod};
use crate::storage::Storage;

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Month to summarize (1-12)
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Year to summarize (with --month, defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Only count expenses in this category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Handle `summary`
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    args: SummaryArgs,
) -> TrackerResult<()> {
    let period = SummaryPeriod::resolve(args.month, args.year)?;
    let summary =
        SpendingSummary::generate(&storage.store.expenses, period, args.category.as_deref());

    print!("{}", summary.format_terminal(&settings.currency_symbol));
    Ok(())
}
