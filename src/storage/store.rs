//! The expense store
//!
//! Everything the tracker persists: the expenses, the monthly budgets and
//! the next ID counter. A store is loaded fresh for every command, mutated
//! in memory and written back whole.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseId, Money, MonthKey};

use super::file_io::{read_json, write_json_atomic};

/// The complete persisted state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Next identifier to hand out; never decremented
    #[serde(default)]
    next_id: u64,

    /// Expenses in insertion order
    #[serde(default, deserialize_with = "null_as_default")]
    pub expenses: Vec<Expense>,

    /// Spending limit per month
    #[serde(default, deserialize_with = "null_as_default")]
    pub budgets: BTreeMap<MonthKey, Money>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            next_id: ExpenseId::FIRST.value(),
            expenses: Vec::new(),
            budgets: BTreeMap::new(),
        }
    }

    /// Load the store from `path`, or an empty store if the file doesn't exist
    ///
    /// A file that exists but cannot be parsed is a corrupt store error.
    pub fn load(path: impl AsRef<Path>) -> TrackerResult<Self> {
        let path = path.as_ref();
        let mut store: Store = read_json(path)?;
        store.normalize().map_err(|reason| TrackerError::CorruptStore {
            path: path.display().to_string(),
            reason: reason.to_string(),
        })?;
        Ok(store)
    }

    /// Atomically write the store to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> TrackerResult<()> {
        write_json_atomic(path, self)
    }

    /// Repair counters written by older versions
    ///
    /// A zero counter becomes 1, and the counter is raised above the largest
    /// stored ID so new IDs never collide with existing ones. Fails when no
    /// ID is left to hand out.
    fn normalize(&mut self) -> Result<(), &'static str> {
        const EXHAUSTED: &str = "no expense IDs left to assign";

        let floor = match self.expenses.iter().map(|e| e.id.value()).max() {
            Some(max_id) => max_id.checked_add(1).ok_or(EXHAUSTED)?,
            None => ExpenseId::FIRST.value(),
        };
        self.next_id = self.next_id.max(floor).max(ExpenseId::FIRST.value());

        // push() advances the counter past the ID it hands out
        if self.next_id == u64::MAX {
            return Err(EXHAUSTED);
        }
        Ok(())
    }

    /// The ID the next added expense will receive
    pub fn next_id(&self) -> ExpenseId {
        ExpenseId::new(self.next_id)
    }

    /// Append an expense under a freshly allocated ID
    ///
    /// The expense's own `id` is overwritten; the counter advances by one.
    pub fn push(&mut self, mut expense: Expense) -> ExpenseId {
        let id = self.next_id();
        expense.id = id;
        self.expenses.push(expense);
        self.next_id = id.next().value();
        id
    }

    /// Find an expense and its position by ID
    pub fn find_by_id(&self, id: ExpenseId) -> Option<(usize, &Expense)> {
        self.expenses
            .iter()
            .enumerate()
            .find(|(_, e)| e.id == id)
    }

    /// Find an expense by ID for in-place modification
    pub fn find_by_id_mut(&mut self, id: ExpenseId) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|e| e.id == id)
    }

    /// Remove an expense, keeping the order of the rest
    pub fn remove(&mut self, id: ExpenseId) -> Option<Expense> {
        let (index, _) = self.find_by_id(id)?;
        Some(self.expenses.remove(index))
    }

    /// Total of all expenses in `month`, optionally limited to one category
    pub fn sum_for_month(&self, month: MonthKey, category: Option<&str>) -> Money {
        let category = category.map(str::trim).filter(|c| !c.is_empty());
        self.expenses
            .iter()
            .filter(|e| month.contains(e.date))
            .filter(|e| category.map_or(true, |c| e.in_category(c)))
            .map(|e| e.amount)
            .sum()
    }

    /// The budget configured for a month, whatever its value
    pub fn budget(&self, month: MonthKey) -> Option<Money> {
        self.budgets.get(&month).copied()
    }

    /// The budget for a month if it is positive
    ///
    /// Zero or negative budgets (only possible through hand edits) count as
    /// not set.
    pub fn active_budget(&self, month: MonthKey) -> Option<Money> {
        self.budget(month).filter(Money::is_positive)
    }

    /// Set or replace a month's budget
    pub fn set_budget(&mut self, month: MonthKey, amount: Money) -> Option<Money> {
        self.budgets.insert(month, amount)
    }

    /// Remove a month's budget
    pub fn remove_budget(&mut self, month: MonthKey) -> Option<Money> {
        self.budgets.remove(&month)
    }
}
