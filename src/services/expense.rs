//! Expense service
//!
//! Business logic for expenses: creating, editing, deleting and querying,
//! with the budget check that follows every change to an expense's date or
//! amount.

use chrono::NaiveDate;

use crate::audit::AuditEntry;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{today, Expense, ExpenseId, Money, MonthKey};
use crate::storage::{Storage, Store};

use super::budget::{check_budget, BudgetWarning};

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

/// Options for filtering expenses
///
/// Every constraint is optional; an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Calendar month (1-12)
    pub month: Option<u32>,
    /// Calendar year
    pub year: Option<i32>,
    /// Category, compared case-insensitively
    pub category: Option<String>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from command-line style inputs
    ///
    /// A month of 0 and a blank category mean "no constraint". A month
    /// without a year is taken to mean the current year.
    pub fn for_period(
        month: Option<u32>,
        year: Option<i32>,
        category: Option<&str>,
    ) -> TrackerResult<Self> {
        let month = month.filter(|&m| m != 0);
        let year = year.filter(|&y| y != 0);

        if let Some(m) = month {
            // Validates the month range
            MonthKey::new(year.unwrap_or_else(|| MonthKey::current().year()), m)?;
        }
        let year = match (month, year) {
            (Some(_), None) => Some(MonthKey::current().year()),
            (_, year) => year,
        };

        let mut filter = Self {
            month,
            year,
            category: None,
        };
        if let Some(category) = category {
            filter = filter.category(category);
        }
        Ok(filter)
    }

    /// Filter by calendar month
    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    /// Filter by calendar year
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Filter by category (blank clears the constraint)
    pub fn category(mut self, category: &str) -> Self {
        let category = category.trim();
        self.category = (!category.is_empty()).then(|| category.to_string());
        self
    }

    /// Check whether an expense satisfies every constraint
    pub fn matches(&self, expense: &Expense) -> bool {
        use chrono::Datelike;

        if let Some(category) = &self.category {
            if !expense.in_category(category) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if expense.date.year() != year {
                return false;
            }
        }
        if let Some(month) = self.month {
            if expense.date.month() != month {
                return false;
            }
        }
        true
    }

    /// Matching expenses, sorted by date then ID
    pub fn apply<'e>(&self, expenses: impl IntoIterator<Item = &'e Expense>) -> Vec<Expense> {
        let mut matched: Vec<Expense> = expenses
            .into_iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        matched
    }
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub description: String,
    pub amount: Money,
    /// Defaults to today when absent
    pub date: Option<NaiveDate>,
    /// Defaults to "General" when absent or blank
    pub category: Option<String>,
}

/// Fields to change on an existing expense
///
/// `None` means "leave unchanged", which is distinct from any supplied
/// value. Blank descriptions and categories are also ignored.
#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
}

/// Result of a create or update
#[derive(Debug, Clone)]
pub struct ExpenseChange {
    pub expense: Expense,
    /// Set when the expense's month is now over its budget
    pub budget_warning: Option<BudgetWarning>,
}

/// Look up an expense by ID
pub fn get_expense(store: &Store, id: ExpenseId) -> TrackerResult<Expense> {
    store
        .find_by_id(id)
        .map(|(_, e)| e.clone())
        .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))
}

/// Expenses matching a filter, sorted by date then ID
pub fn list_expenses(store: &Store, filter: &ExpenseFilter) -> Vec<Expense> {
    filter.apply(&store.expenses)
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create a new expense
    pub fn create(&mut self, input: CreateExpenseInput) -> TrackerResult<ExpenseChange> {
        let expense = Expense::new(
            self.storage.store.next_id(),
            input.date.unwrap_or_else(today),
            input.description,
            input.amount,
            input.category.as_deref(),
        );

        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let id = self.storage.store.push(expense);
        self.storage.save()?;

        let expense = self.get(id)?;
        self.storage.audit(AuditEntry::expense_created(&expense));

        let budget_warning = check_budget(&self.storage.store, expense.date);
        Ok(ExpenseChange {
            expense,
            budget_warning,
        })
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> TrackerResult<Expense> {
        get_expense(&self.storage.store, id)
    }

    /// List expenses matching a filter, sorted by date then ID
    pub fn list(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        list_expenses(&self.storage.store, filter)
    }

    /// Update an expense
    ///
    /// Either every supplied field is applied or, on a validation failure,
    /// none is. `updated_at` is refreshed even when nothing else changes.
    pub fn update(
        &mut self,
        id: ExpenseId,
        input: UpdateExpenseInput,
    ) -> TrackerResult<ExpenseChange> {
        let before = self.get(id)?;
        let mut after = before.clone();

        if let Some(description) = non_blank(&input.description) {
            after.description = description.to_string();
        }
        if let Some(amount) = input.amount {
            after.amount = amount;
        }
        if let Some(date) = input.date {
            after.date = date;
        }
        if let Some(category) = non_blank(&input.category) {
            after.category = category.to_string();
        }

        after
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        after.touch();

        let slot = self
            .storage
            .store
            .find_by_id_mut(id)
            .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))?;
        *slot = after.clone();
        self.storage.save()?;

        self.storage
            .audit(AuditEntry::expense_updated(&before, &after));

        let budget_warning = check_budget(&self.storage.store, after.date);
        Ok(ExpenseChange {
            expense: after,
            budget_warning,
        })
    }

    /// Delete an expense
    pub fn delete(&mut self, id: ExpenseId) -> TrackerResult<Expense> {
        let removed = self
            .storage
            .store
            .remove(id)
            .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))?;
        self.storage.save()?;

        self.storage.audit(AuditEntry::expense_deleted(&removed));

        Ok(removed)
    }
}
