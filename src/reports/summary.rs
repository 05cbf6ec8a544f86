//! Spending summary
//!
//! Totals for a period, optionally limited to one category, with a
//! per-category breakdown.

use std::collections::HashMap;
use std::fmt;

use crate::models::{Expense, Money, MonthKey};
use crate::services::ExpenseFilter;

/// The time span a summary covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryPeriod {
    All,
    Year(i32),
    Month(MonthKey),
}

impl SummaryPeriod {
    /// Resolve command-line inputs: a month without a year means the current year
    pub fn resolve(month: Option<u32>, year: Option<i32>) -> crate::error::TrackerResult<Self> {
        match (month.filter(|&m| m != 0), year.filter(|&y| y != 0)) {
            (Some(month), year) => Ok(Self::Month(MonthKey::resolve(Some(month), year)?)),
            (None, Some(year)) => Ok(Self::Year(year)),
            (None, None) => Ok(Self::All),
        }
    }

    /// The expense filter selecting this period
    pub fn filter(&self) -> ExpenseFilter {
        match self {
            Self::All => ExpenseFilter::new(),
            Self::Year(year) => ExpenseFilter::new().year(*year),
            Self::Month(key) => ExpenseFilter::new().year(key.year()).month(key.month()),
        }
    }
}

impl fmt::Display for SummaryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all time"),
            Self::Year(year) => write!(f, "{}", year),
            Self::Month(key) => write!(f, "{} {}", key.month_name(), key.year()),
        }
    }
}

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category name as first seen
    pub category: String,
    pub count: usize,
    pub total: Money,
}

/// Spending summary
#[derive(Debug, Clone)]
pub struct SpendingSummary {
    pub period: SummaryPeriod,
    /// Category the summary was limited to, if any
    pub category: Option<String>,
    pub total: Money,
    pub count: usize,
    /// Sorted by total descending, then name
    pub categories: Vec<CategoryTotal>,
}

impl SpendingSummary {
    /// Summarize the expenses in `period`, optionally limited to `category`
    pub fn generate<'e>(
        expenses: impl IntoIterator<Item = &'e Expense>,
        period: SummaryPeriod,
        category: Option<&str>,
    ) -> Self {
        let mut filter = period.filter();
        if let Some(category) = category {
            filter = filter.category(category);
        }

        let matched = filter.apply(expenses);

        // Categories compare case-insensitively; keep the first spelling seen
        let mut by_category: HashMap<String, CategoryTotal> = HashMap::new();
        for expense in &matched {
            let entry = by_category
                .entry(expense.category.to_lowercase())
                .or_insert_with(|| CategoryTotal {
                    category: expense.category.clone(),
                    count: 0,
                    total: Money::zero(),
                });
            entry.count += 1;
            entry.total += expense.amount;
        }

        let mut categories: Vec<CategoryTotal> = by_category.into_values().collect();
        categories.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            period,
            category: filter.category,
            total: matched.iter().map(|e| e.amount).sum(),
            count: matched.len(),
            categories,
        }
    }

    /// Share of the total spent in a category, in percent
    pub fn percentage(&self, category: &CategoryTotal) -> f64 {
        if self.total.is_zero() {
            0.0
        } else {
            category.total.cents() as f64 / self.total.cents() as f64 * 100.0
        }
    }

    /// The headline line, e.g. "Total expenses for August 2025 (Food): $20.00"
    pub fn headline(&self, symbol: &str) -> String {
        let mut line = String::from("Total expenses");
        if self.period != SummaryPeriod::All {
            line.push_str(&format!(" for {}", self.period));
        }
        if let Some(category) = &self.category {
            line.push_str(&format!(" ({})", category));
        }
        line.push_str(&format!(": {}", self.total.format_with_symbol(symbol)));
        line
    }

    /// Format the summary for terminal output
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = self.headline(symbol);
        output.push('\n');

        if self.categories.is_empty() || self.category.is_some() {
            return output;
        }

        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>12} {:>6} {:>7}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(58));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{:<30} {:>12} {:>6} {:>6.1}%\n",
                category.category,
                category.total.format_with_symbol(symbol),
                category.count,
                self.percentage(category)
            ));
        }

        output
    }
}
