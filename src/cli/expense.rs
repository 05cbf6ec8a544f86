//! Expense CLI commands
//!
//! Implements add, update, delete, list and show.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_budget_warning, format_expense_details, format_expense_table};
use crate::error::TrackerResult;
use crate::models::ExpenseId;
use crate::services::{
    get_expense, list_expenses, CreateExpenseInput, ExpenseChange, ExpenseFilter,
    ExpenseService, UpdateExpenseInput,
};
use crate::storage::Storage;

use super::{parse_amount, parse_optional_amount, parse_optional_date};

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    #[arg(short, long)]
    pub description: String,

    /// Amount spent (e.g., "20" or "12.50")
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,

    /// Date of the expense (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Category name (defaults to "General")
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `update`
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Expense ID
    #[arg(long)]
    pub id: ExpenseId,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New amount
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// New date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Expense ID
    #[arg(long)]
    pub id: ExpenseId,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
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

/// Arguments for `show`
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Expense ID
    pub id: ExpenseId,
}

/// Handle `add`
pub fn handle_add_command(
    storage: &mut Storage,
    settings: &Settings,
    args: AddArgs,
) -> TrackerResult<()> {
    let input = CreateExpenseInput {
        description: args.description,
        amount: parse_amount(&args.amount)?,
        date: parse_optional_date(args.date.as_deref())?,
        category: args.category,
    };

    let change = ExpenseService::new(storage).create(input)?;
    println!("Expense added successfully (ID: {})", change.expense.id);
    print_budget_warning(&change, settings);

    Ok(())
}

/// Handle `update`
pub fn handle_update_command(
    storage: &mut Storage,
    settings: &Settings,
    args: UpdateArgs,
) -> TrackerResult<()> {
    let input = UpdateExpenseInput {
        description: args.description,
        amount: parse_optional_amount(args.amount.as_deref())?,
        date: parse_optional_date(args.date.as_deref())?,
        category: args.category,
    };

    let change = ExpenseService::new(storage).update(args.id, input)?;
    println!("Expense updated successfully");
    print_budget_warning(&change, settings);

    Ok(())
}

/// Handle `delete`
pub fn handle_delete_command(storage: &mut Storage, args: DeleteArgs) -> TrackerResult<()> {
    ExpenseService::new(storage).delete(args.id)?;
    println!("Expense deleted successfully");
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    args: ListArgs,
) -> TrackerResult<()> {
    let filter = ExpenseFilter::for_period(args.month, args.year, args.category.as_deref())?;
    let expenses = list_expenses(&storage.store, &filter);

    print!("{}", format_expense_table(&expenses, &settings.currency_symbol));
    Ok(())
}

/// Handle `show`
pub fn handle_show_command(
    storage: &Storage,
    settings: &Settings,
    args: ShowArgs,
) -> TrackerResult<()> {
    let expense = get_expense(&storage.store, args.id)?;
    print!(
        "{}",
        format_expense_details(&expense, &settings.currency_symbol)
    );
    Ok(())
}

fn print_budget_warning(change: &ExpenseChange, settings: &Settings) {
    if let Some(warning) = &change.budget_warning {
        println!(
            "{}",
            format_budget_warning(warning, &settings.currency_symbol)
        );
    }
}
