//! Data export
//!
//! Writes filtered expenses to CSV files.

pub mod csv;

pub use self::csv::{export_expenses_csv, export_expenses_to_file};
