//! Strongly-typed ID wrapper for expenses
//!
//! IDs are positive integers handed out by the store in increasing order.
//! Wrapping them keeps a stray count or index from being passed where an
//! ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The first ID a fresh store hands out
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Create an ID from a raw integer
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying integer
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The ID that follows this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExpenseId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Accept "#12" as printed in some listings
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next() {
        assert_eq!(ExpenseId::FIRST.next(), ExpenseId::new(2));
    }

    #[test]
    fn test_parse() {
        assert_eq!("7".parse::<ExpenseId>().unwrap(), ExpenseId::new(7));
        assert_eq!(" #7 ".parse::<ExpenseId>().unwrap(), ExpenseId::new(7));
        assert!("seven".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_string(&ExpenseId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
