//! CSV export of expenses
//!
//! One header row, then one row per expense in the order given. Amounts are
//! written with exactly two decimals and no currency symbol.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

/// Column headers of the exported file
pub const HEADER: [&str; 5] = ["id", "date", "description", "category", "amount"];

/// Write expenses as CSV to any writer, returning the number of rows written
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> TrackerResult<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    let export_err = |e: csv::Error| TrackerError::Export(e.to_string());

    csv_writer.write_record(HEADER).map_err(export_err)?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.format("%Y-%m-%d").to_string(),
                expense.description.clone(),
                expense.category.clone(),
                expense.amount.format_plain(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(expenses.len())
}

/// Create (or truncate) `path` and write the expenses to it
pub fn export_expenses_to_file(expenses: &[Expense], path: &Path) -> TrackerResult<usize> {
    let file = File::create(path).map_err(|e| {
        TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    export_expenses_csv(expenses, file)
}
