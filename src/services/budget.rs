//! Budget service
//!
//! Monthly spending limits. Budgets are advisory: going over one produces a
//! warning next to the change that caused it and never blocks anything.

use chrono::NaiveDate;

use crate::audit::AuditEntry;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, MonthKey};
use crate::storage::{Storage, Store};

/// A month whose spending has gone over its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetWarning {
    pub month: MonthKey,
    pub budget: Money,
    pub spent: Money,
}

/// Budget, spending and what is left for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    pub month: MonthKey,
    pub budget: Money,
    pub spent: Money,
}

impl BudgetStatus {
    /// Budget minus spending; negative when over budget
    pub fn remaining(&self) -> Money {
        self.budget - self.spent
    }

    pub fn is_exceeded(&self) -> bool {
        self.spent > self.budget
    }
}

/// Check whether the month containing `date` is over its budget
///
/// Sums every expense in that month regardless of category. Months without
/// a positive budget never warn.
pub fn check_budget(store: &Store, date: NaiveDate) -> Option<BudgetWarning> {
    let month = MonthKey::from_date(date);
    let budget = store.active_budget(month)?;
    let spent = store.sum_for_month(month, None);

    (spent > budget).then_some(BudgetWarning {
        month,
        budget,
        spent,
    })
}

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a mut Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Set the budget for a month, replacing any existing one
    pub fn set(&mut self, month: MonthKey, amount: Money) -> TrackerResult<Option<Money>> {
        if !amount.is_positive() {
            return Err(TrackerError::Validation(format!(
                "Budget must be greater than zero, got {}",
                amount
            )));
        }

        let previous = self.storage.store.set_budget(month, amount);
        self.storage.save()?;

        self.storage
            .audit(AuditEntry::budget_set(month, previous, amount));

        Ok(previous)
    }

    /// Remove the budget for a month
    pub fn clear(&mut self, month: MonthKey) -> TrackerResult<Money> {
        let removed = self.storage.store.remove_budget(month).ok_or_else(|| {
            TrackerError::NotFound {
                entity_type: "Budget",
                identifier: month.to_string(),
            }
        })?;
        self.storage.save()?;

        self.storage
            .audit(AuditEntry::budget_cleared(month, removed));

        Ok(removed)
    }

    /// The active budget for a month
    ///
    /// `None` when no budget is set, or when the stored value is zero or
    /// negative.
    pub fn get(&self, month: MonthKey) -> Option<Money> {
        self.storage.store.active_budget(month)
    }

    /// Budget and spending for a month, if a budget is active
    pub fn status(&self, month: MonthKey) -> Option<BudgetStatus> {
        let budget = self.get(month)?;
        Some(BudgetStatus {
            month,
            budget,
            spent: self.storage.store.sum_for_month(month, None),
        })
    }
}
