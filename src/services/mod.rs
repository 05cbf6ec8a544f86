//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, persistence and auditing of every change.

pub mod budget;
pub mod expense;

pub use budget::{check_budget, BudgetService, BudgetStatus, BudgetWarning};
pub use expense::{
    get_expense, list_expenses, CreateExpenseInput, ExpenseChange, ExpenseFilter,
    ExpenseService, UpdateExpenseInput,
};
