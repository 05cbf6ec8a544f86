//! Core data models for the expense tracker
//!
//! Expenses, the money type they are denominated in, and the month keys
//! used to group them.

pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use expense::{Expense, ExpenseValidationError, DEFAULT_CATEGORY};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use month::{parse_date, today, MonthKey, DATE_FORMAT};
