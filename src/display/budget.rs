//! Budget display formatting

use crate::services::{BudgetStatus, BudgetWarning};

/// The advisory line printed after a change pushes a month over budget
pub fn format_budget_warning(warning: &BudgetWarning, symbol: &str) -> String {
    format!(
        "Warning: budget for {} exceeded! Budget: {}, Spent: {}",
        warning.month,
        warning.budget.format_with_symbol(symbol),
        warning.spent.format_with_symbol(symbol)
    )
}

/// Budget, spending and remaining amount for a month
pub fn format_budget_status(status: &BudgetStatus, symbol: &str) -> String {
    let mut output = format!(
        "Budget for {}: {}\n",
        status.month,
        status.budget.format_with_symbol(symbol)
    );
    output.push_str(&format!(
        "Spent: {}, Remaining: {}\n",
        status.spent.format_with_symbol(symbol),
        status.remaining().format_with_symbol(symbol)
    ));
    if status.is_exceeded() {
        output.push_str("Over budget!\n");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MonthKey};

    #[test]
    fn test_warning_text() {
        let warning = BudgetWarning {
            month: MonthKey::new(2025, 8).unwrap(),
            budget: Money::from_cents(5000),
            spent: Money::from_cents(6000),
        };
        assert_eq!(
            format_budget_warning(&warning, "$"),
            "Warning: budget for 2025-08 exceeded! Budget: $50.00, Spent: $60.00"
        );
    }

    #[test]
    fn test_status_text() {
        let status = BudgetStatus {
            month: MonthKey::new(2025, 8).unwrap(),
            budget: Money::from_cents(5000),
            spent: Money::from_cents(6000),
        };
        let output = format_budget_status(&status, "$");

        assert!(output.contains("Budget for 2025-08: $50.00"));
        assert!(output.contains("Spent: $60.00, Remaining: -$10.00"));
        assert!(output.contains("Over budget!"));
    }
}
