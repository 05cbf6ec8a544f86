//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod export;
pub mod expense;
pub mod history;
pub mod summary;

pub use budget::{handle_budget_command, BudgetArgs};
pub use export::{handle_export_command, ExportArgs};
pub use expense::{
    handle_add_command, handle_delete_command, handle_list_command, handle_show_command,
    handle_update_command, AddArgs, DeleteArgs, ListArgs, ShowArgs, UpdateArgs,
};
pub use history::{handle_history_command, HistoryArgs};
pub use summary::{handle_summary_command, SummaryArgs};

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{parse_date, Money};

/// Parse an amount argument
pub(crate) fn parse_amount(input: &str) -> TrackerResult<Money> {
    Money::parse(input).map_err(|e| TrackerError::Validation(e.to_string()))
}

/// Parse an amount argument that may be omitted
pub(crate) fn parse_optional_amount(input: Option<&str>) -> TrackerResult<Option<Money>> {
    input.map(parse_amount).transpose()
}

/// Parse a date argument that may be omitted
pub(crate) fn parse_optional_date(input: Option<&str>) -> TrackerResult<Option<NaiveDate>> {
    input.map(parse_date).transpose()
}
