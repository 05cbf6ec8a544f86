//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so sums and budget comparisons
//! are exact. On disk an amount is a plain JSON number with two decimal
//! places, e.g. `12.34`. Amounts are capped at [`Money::MAX`] so that every
//! value survives the trip through a JSON number unchanged.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

/// Largest magnitude accepted, in cents ($999,999,999.99)
const MAX_CENTS: i64 = 99_999_999_999;

impl Money {
    /// Largest amount that can be entered or stored
    pub const MAX: Money = Money(MAX_CENTS);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "10.5", "-10.50", "$10.50", "10".
    /// More than two fractional digits is rejected rather than silently
    /// truncated.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let invalid = || MoneyParseError::InvalidFormat(input.trim().to_string());

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s);

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooPrecise(input.trim().to_string()));
        }

        let too_large = || MoneyParseError::TooLarge(input.trim().to_string());

        // Digits are already checked, so a failed parse can only be overflow
        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| too_large())?
        };
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .filter(|&total| total <= MAX_CENTS)
            .ok_or_else(too_large)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }

    /// Format as a bare two-decimal number, e.g. `12.50`
    pub fn format_plain(&self) -> String {
        self.format_with_symbol("")
    }

    fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    fn from_f64(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        (value.is_finite() && cents.abs() <= MAX_CENTS as f64).then(|| Self(cents as i64))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::from_f64(value).ok_or_else(|| {
            serde::de::Error::custom(format!("amount {} is out of range", value))
        })
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    TooPrecise(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is required"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "Amount has more than two decimal places: {}", s)
            }
            MoneyParseError::TooLarge(s) => {
                write!(f, "Amount exceeds the maximum of {}: {}", Money::MAX, s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
