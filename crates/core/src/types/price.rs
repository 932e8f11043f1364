//! Type-safe price representation in whole currency units.
//!
//! Catalog prices are integers in the currency's standard unit (rupees for
//! the built-in catalog), so arithmetic is exact and never needs rounding.
//! All arithmetic saturates at `u64::MAX` instead of wrapping.

use core::fmt;
use core::iter::Sum;

use serde::{Deserialize, Serialize};

/// A price or monetary total in integer currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Currency symbol used when displaying prices.
    pub const SYMBOL: &'static str = "₹";

    /// Create a new price from whole currency units.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole currency units.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Sum of two amounts.
    #[must_use]
    pub const fn plus(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::plus)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

/// Formats with Indian digit grouping: the last three digits form one
/// group and every two digits before that form another (`₹1,00,000`).
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
        for (position, digit) in digits.chars().rev().enumerate() {
            if position == 3 || (position > 3 && (position - 3) % 2 == 0) {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        let grouped: String = grouped.chars().rev().collect();
        f.pad(&format!("{}{grouped}", Self::SYMBOL))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_small_amounts() {
        assert_eq!(Price::new(0).to_string(), "₹0");
        assert_eq!(Price::new(199).to_string(), "₹199");
        assert_eq!(format!("{:>6}", Price::new(199)), "  ₹199");
    }

    #[test]
    fn test_display_indian_grouping() {
        assert_eq!(Price::new(4999).to_string(), "₹4,999");
        assert_eq!(Price::new(29_990).to_string(), "₹29,990");
        assert_eq!(Price::new(100_000).to_string(), "₹1,00,000");
        assert_eq!(Price::new(12_345_678).to_string(), "₹1,23,45,678");
    }

    #[test]
    fn test_times_and_sum() {
        let total: Price = [Price::new(4999).times(2), Price::new(2999).times(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::new(12_997));
    }

    #[test]
    fn test_arithmetic_saturates() {
        assert_eq!(Price::new(u64::MAX).times(2), Price::new(u64::MAX));
        assert_eq!(Price::new(u64::MAX).plus(Price::new(1)), Price::new(u64::MAX));
    }

    #[test]
    fn test_serde_is_plain_number() {
        assert_eq!(serde_json::to_string(&Price::new(4999)).unwrap(), "4999");
        let parsed: Price = serde_json::from_str("3499").unwrap();
        assert_eq!(parsed.amount(), 3499);
        assert!(serde_json::from_str::<Price>("-1").is_err());
    }
}
