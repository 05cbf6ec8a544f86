//! Display formatting for terminal output

pub mod budget;
pub mod expense;

pub use budget::{format_budget_status, format_budget_warning};
pub use expense::{format_expense_details, format_expense_table};

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
