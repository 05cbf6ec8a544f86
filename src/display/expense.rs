//! Expense display formatting
//!
//! Table and detail views of expenses for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::truncate;
use crate::models::{Expense, Money};

const DESCRIPTION_WIDTH: usize = 32;
const CATEGORY_WIDTH: usize = 16;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, symbol: &str) -> Self {
        Self {
            id: expense.id.value(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            description: truncate(&expense.description, DESCRIPTION_WIDTH),
            category: truncate(&expense.category, CATEGORY_WIDTH),
            amount: expense.amount.format_with_symbol(symbol),
        }
    }
}

/// Format a list of expenses as a table with a count and total footer
pub fn format_expense_table(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses.iter().map(|e| ExpenseRow::new(e, symbol)).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(4), Alignment::right());

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    let noun = if expenses.len() == 1 {
        "expense"
    } else {
        "expenses"
    };

    format!(
        "{}\n\n{} {}, total {}\n",
        table,
        expenses.len(),
        noun,
        total.format_with_symbol(symbol)
    )
}

/// Format a single expense in detail
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Created:     {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!(
        "Updated:     {}\n",
        expense.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use chrono::NaiveDate;

    fn expense(id: u64, description: &str, cents: i64, category: &str) -> Expense {
        Expense::new(
            ExpenseId::new(id),
            NaiveDate::from_ymd_opt(2025, 8, 14).unwrap(),
            description,
            Money::from_cents(cents),
            Some(category),
        )
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "$"), "No expenses found.\n");
    }

    #[test]
    fn test_table_contents() {
        let expenses = vec![
            expense(1, "Coffee", 750, "Beverage"),
            expense(2, "Lunch", 2000, "Food"),
        ];
        let output = format_expense_table(&expenses, "$");

        assert!(output.contains("Description"));
        assert!(output.contains("Beverage"));
        assert!(output.contains("$7.50"));
        assert!(output.contains("2025-08-14"));
        assert!(output.contains("2 expenses, total $27.50"));
    }

    #[test]
    fn test_table_truncates_long_descriptions() {
        let long = "A very long description that keeps going and going";
        let output = format_expense_table(&[expense(1, long, 100, "Food")], "$");

        assert!(!output.contains(long));
        assert!(output.contains("..."));
        assert!(output.contains("1 expense, total $1.00"));
    }

    #[test]
    fn test_details() {
        let output = format_expense_details(&expense(9, "Book", 1234, "General"), "€");
        assert!(output.contains("Expense:     9"));
        assert!(output.contains("Amount:      €12.34"));
    }
}
