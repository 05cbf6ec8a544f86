//! Audit log entries
//!
//! One entry per change to an expense or a monthly budget. The constructors
//! take the domain values themselves and work out which fields changed.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Expense, ExpenseId, Money, MonthKey};

/// What happened to the subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Created => "created",
            Action::Updated => "updated",
            Action::Deleted => "deleted",
        })
    }
}

/// The record an entry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Subject {
    Expense(ExpenseId),
    Budget(MonthKey),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Expense(id) => write!(f, "expense #{}", id),
            Subject::Budget(month) => write!(f, "budget {}", month),
        }
    }
}

/// A single line of the audit log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change was made (UTC)
    pub timestamp: DateTime<Utc>,

    pub action: Action,

    pub subject: Subject,

    /// Expense description at the time of the change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Changed fields, e.g. `amount: $5.00 -> $7.50`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,
}

impl AuditEntry {
    fn new(action: Action, subject: Subject) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
            subject,
            label: None,
            changes: Vec::new(),
            before: None,
            after: None,
        }
    }

    pub fn expense_created(expense: &Expense) -> Self {
        Self {
            label: Some(expense.description.clone()),
            after: serde_json::to_value(expense).ok(),
            ..Self::new(Action::Created, Subject::Expense(expense.id))
        }
    }

    pub fn expense_updated(before: &Expense, after: &Expense) -> Self {
        Self {
            label: Some(after.description.clone()),
            changes: expense_changes(before, after),
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            ..Self::new(Action::Updated, Subject::Expense(after.id))
        }
    }

    pub fn expense_deleted(expense: &Expense) -> Self {
        Self {
            label: Some(expense.description.clone()),
            before: serde_json::to_value(expense).ok(),
            ..Self::new(Action::Deleted, Subject::Expense(expense.id))
        }
    }

    /// A budget was set, replacing `previous` if there was one
    pub fn budget_set(month: MonthKey, previous: Option<Money>, amount: Money) -> Self {
        let subject = Subject::Budget(month);
        match previous {
            Some(old) => Self {
                changes: vec![format!("amount: {} -> {}", old, amount)],
                before: serde_json::to_value(old).ok(),
                after: serde_json::to_value(amount).ok(),
                ..Self::new(Action::Updated, subject)
            },
            None => Self {
                after: serde_json::to_value(amount).ok(),
                ..Self::new(Action::Created, subject)
            },
        }
    }

    pub fn budget_cleared(month: MonthKey, amount: Money) -> Self {
        Self {
            before: serde_json::to_value(amount).ok(),
            ..Self::new(Action::Deleted, Subject::Budget(month))
        }
    }
}

/// One line per field that differs between two versions of an expense
fn expense_changes(before: &Expense, after: &Expense) -> Vec<String> {
    let mut changes = Vec::new();
    if before.date != after.date {
        changes.push(format!("date: {} -> {}", before.date, after.date));
    }
    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }
    if before.description != after.description {
        changes.push(format!(
            "description: '{}' -> '{}'",
            before.description, after.description
        ));
    }
    if before.category != after.category {
        changes.push(format!(
            "category: '{}' -> '{}'",
            before.category, after.category
        ));
    }
    changes
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.action,
            self.subject
        )?;
        if let Some(label) = &self.label {
            write!(f, " ({})", label)?;
        }
        if !self.changes.is_empty() {
            write!(f, "\n  {}", self.changes.join(", "))?;
        }
        Ok(())
    }
}
