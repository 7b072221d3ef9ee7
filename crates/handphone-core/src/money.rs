//! # Money Module
//!
//! Provides the `Money` type and the currency formatter used by every price
//! the storefront shows.
//!
//! ## Whole Units
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog prices are whole Rupiah: 15999000 means Rp 15.999.000.        │
//! │  There is no minor unit, so Money is a plain i64 of whole units and    │
//! │  all arithmetic stays in integers.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use handphone_core::money::{CurrencyFormat, Money};
//!
//! let price = Money::from_units(15_999_000);
//! let line = price * 2;
//! assert_eq!(line.units(), 31_998_000);
//!
//! let idr = CurrencyFormat::idr();
//! assert_eq!(idr.format(price), "Rp\u{a0}15.999.000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction never wraps; display handles the sign
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from whole units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use handphone_core::money::Money;
    ///
    /// let unit_price = Money::from_units(11_999_000);
    /// assert_eq!(unit_price.multiply_quantity(3).units(), 35_997_000);
    /// ```
    ///
    /// Saturates at the `i64` bounds instead of overflowing.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain number with no currency decoration. Use [`CurrencyFormat`] for UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Currency Format
// =============================================================================

/// Locale rules for rendering [`Money`].
///
/// The default is Indonesian Rupiah as the `id-ID` locale prints it with no
/// fraction digits: `Rp 15.999.000`, with a non-breaking space after the
/// symbol and `.` as the thousands separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    /// ISO 4217 code
    pub code: String,

    /// Symbol placed before the amount
    pub symbol: String,

    /// Text between symbol and amount
    pub symbol_spacing: String,

    /// Digit group separator
    pub group_separator: char,
}

impl CurrencyFormat {
    /// Indonesian Rupiah (`id-ID`).
    pub fn idr() -> Self {
        CurrencyFormat {
            code: "IDR".to_string(),
            symbol: "Rp".to_string(),
            symbol_spacing: "\u{a0}".to_string(),
            group_separator: '.',
        }
    }

    /// Formats an amount, e.g. `Rp 18.999.000` or `-Rp 5.000`.
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}{}",
            sign,
            self.symbol,
            self.symbol_spacing,
            group_digits(amount.units().unsigned_abs(), self.group_separator)
        )
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::idr()
    }
}

/// Inserts `separator` every three digits from the right.
fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(15_999_000);
        assert_eq!(money.units(), 15_999_000);
        assert!(!money.is_zero());
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(1000);
        let b = Money::from_units(500);

        assert_eq!((a + b).units(), 1500);
        assert_eq!((a - b).units(), 500);
        assert_eq!((a * 3).units(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.units(), 1500);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 650].into_iter().map(Money::from_units).sum();
        assert_eq!(total.units(), 1000);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_units(5_000_000_000_000_000_000);
        assert_eq!(huge.multiply_quantity(3).units(), i64::MAX);
        assert_eq!((huge + huge).units(), i64::MAX);
        assert_eq!((Money::from_units(i64::MIN) - huge).units(), i64::MIN);

        let total: Money = [huge, huge, huge].into_iter().sum();
        assert_eq!(total.units(), i64::MAX);
    }

    #[test]
    fn test_format_idr() {
        let idr = CurrencyFormat::idr();
        assert_eq!(idr.format(Money::from_units(15_999_000)), "Rp\u{a0}15.999.000");
        assert_eq!(idr.format(Money::from_units(999)), "Rp\u{a0}999");
        assert_eq!(idr.format(Money::from_units(1000)), "Rp\u{a0}1.000");
        assert_eq!(idr.format(Money::zero()), "Rp\u{a0}0");
    }

    #[test]
    fn test_format_negative() {
        let idr = CurrencyFormat::idr();
        assert_eq!(idr.format(Money::from_units(-5000)), "-Rp\u{a0}5.000");
    }

    #[test]
    fn test_format_custom() {
        let usd = CurrencyFormat {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            symbol_spacing: String::new(),
            group_separator: ',',
        };
        assert_eq!(usd.format(Money::from_units(1_234_567)), "$1,234,567");
    }
}
