//! Expense model
//!
//! A single spending record. Field names on disk are snake_case to match the
//! store file format.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Category assigned when none is given
pub const DEFAULT_CATEGORY: &str = "General";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A spending record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the store
    pub id: ExpenseId,

    /// Day the money was spent
    pub date: NaiveDate,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Free-text category, compared case-insensitively
    #[serde(default = "default_category")]
    pub category: String,

    /// When the expense was recorded
    #[serde(default)]
    pub created_at: DateTime<Utc>,

    /// When the expense was last modified
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with both timestamps set to now
    ///
    /// The category falls back to [`DEFAULT_CATEGORY`] when blank. Call
    /// [`Expense::validate`] before storing.
    pub fn new(
        id: ExpenseId,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: Option<&str>,
    ) -> Self {
        let now = Utc::now();
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);

        Self {
            id,
            date,
            description: description.into().trim().to_string(),
            amount,
            category: category.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive category comparison
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.trim().to_lowercase()
    }

    /// Mark the expense as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} [{}] {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description is required"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero, got {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
