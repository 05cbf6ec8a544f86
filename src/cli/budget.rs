//! Budget CLI command
//!
//! Sets, clears or reads the spending ceiling for one month.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_budget_status;
use crate::error::TrackerResult;
use crate::models::MonthKey;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::parse_amount;

/// Arguments for `budget`
#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Set the budget to this amount
    #[arg(short, long, allow_hyphen_values = true, conflicts_with = "clear")]
    pub set: Option<String>,

    /// Remove the budget for the month
    #[arg(long)]
    pub clear: bool,

    /// Month (1-12, defaults to the current month)
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Year (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// Handle `budget`
pub fn handle_budget_command(
    storage: &mut Storage,
    settings: &Settings,
    args: BudgetArgs,
) -> TrackerResult<()> {
    let month = MonthKey::resolve(
        args.month.filter(|&m| m != 0),
        args.year.filter(|&y| y != 0),
    )?;
    let symbol = settings.currency_symbol.as_str();
    let mut service = BudgetService::new(storage);

    if let Some(amount) = args.set {
        let amount = parse_amount(&amount)?;
        service.set(month, amount)?;
        println!(
            "Budget for {} set to {}",
            month,
            amount.format_with_symbol(symbol)
        );
        return Ok(());
    }

    if args.clear {
        let removed = service.clear(month)?;
        println!(
            "Budget for {} cleared (was {})",
            month,
            removed.format_with_symbol(symbol)
        );
        return Ok(());
    }

    match service.status(month) {
        Some(status) => print!("{}", format_budget_status(&status, symbol)),
        None => println!("No budget set for {}", month),
    }

    Ok(())
}
