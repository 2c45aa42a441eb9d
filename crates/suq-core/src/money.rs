//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The front-ends this core serves previously summed cart totals in      │
//! │  floating point and rounded at display time. Here every amount is an   │
//! │  integer count of santim (1/100 birr), so cart totals, allocation     │
//! │  splits and commission payouts are exact by construction.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use suq_core::money::Money;
//!
//! // Create from santim (preferred)
//! let price = Money::from_santim(5000); // Br 50.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // Br 100.00
//! let total = price + Money::from_santim(3000);  // Br 80.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in santim (1/100 of a birr).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values (overpaid commission balances)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// EVERY monetary value in the system flows through this type:
/// product prices, cart line totals, allocation channel amounts,
/// commission payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from santim (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use suq_core::money::Money;
    ///
    /// let price = Money::from_santim(1050); // Represents Br 10.50
    /// assert_eq!(price.santim(), 1050);
    /// ```
    #[inline]
    pub const fn from_santim(santim: i64) -> Self {
        Money(santim)
    }

    /// Creates a Money value from major and minor units (birr and santim).
    ///
    /// ## Example
    /// ```rust
    /// use suq_core::money::Money;
    ///
    /// let price = Money::from_birr_santim(10, 50); // Br 10.50
    /// assert_eq!(price.santim(), 1050);
    ///
    /// let negative = Money::from_birr_santim(-5, 50); // -Br 5.50
    /// assert_eq!(negative.santim(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_birr_santim(-5, 50)` = -Br 5.50, not -Br 4.50
    #[inline]
    pub const fn from_birr_santim(birr: i64, santim: i64) -> Self {
        if birr < 0 {
            Money(birr * 100 - santim)
        } else {
            Money(birr * 100 + santim)
        }
    }

    /// Returns the value in santim (smallest currency unit).
    #[inline]
    pub const fn santim(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (birr) portion.
    #[inline]
    pub const fn birr(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (santim) portion (always 0-99).
    #[inline]
    pub const fn santim_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use suq_core::money::Money;
    ///
    /// let unit_price = Money::from_santim(5000); // Br 50.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.santim(), 10000); // Br 100.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a percentage rate given in basis points, rounding half-up.
    ///
    /// ## Arguments
    /// * `rate_bps` - Rate in basis points (500 = 5%, 700 = 7%, 1000 = 10%)
    ///
    /// ## Implementation
    /// Integer math in i128 to prevent overflow on large amounts:
    /// `(amount * bps + 5000) / 10000`
    /// The +5000 provides rounding (5000/10000 = 0.5)
    ///
    /// ## Example
    /// ```rust
    /// use suq_core::money::Money;
    ///
    /// let sales = Money::from_santim(999_900); // Br 9,999.00
    /// let commission = sales.apply_rate_bps(500); // 5%
    /// assert_eq!(commission.santim(), 49_995); // Br 499.95
    /// ```
    pub fn apply_rate_bps(&self, rate_bps: u32) -> Money {
        let result = (self.0 as i128 * rate_bps as i128 + 5000) / 10000;
        Money::from_santim(result as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Use frontend formatting for actual
/// UI display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}Br {}.{:02}",
            sign,
            self.birr().abs(),
            self.santim_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_santim() {
        let money = Money::from_santim(1050);
        assert_eq!(money.santim(), 1050);
        assert_eq!(money.birr(), 10);
        assert_eq!(money.santim_part(), 50);
    }

    #[test]
    fn test_from_birr_santim() {
        let money = Money::from_birr_santim(10, 50);
        assert_eq!(money.santim(), 1050);

        let negative = Money::from_birr_santim(-5, 50);
        assert_eq!(negative.santim(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_santim(1050)), "Br 10.50");
        assert_eq!(format!("{}", Money::from_santim(500)), "Br 5.00");
        assert_eq!(format!("{}", Money::from_santim(-550)), "-Br 5.50");
        assert_eq!(format!("{}", Money::from_santim(0)), "Br 0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_santim(1000);
        let b = Money::from_santim(500);

        assert_eq!((a + b).santim(), 1500);
        assert_eq!((a - b).santim(), 500);
        let result: Money = a * 3;
        assert_eq!(result.santim(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_santim(2000);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.santim(), 6000);
    }

    #[test]
    fn test_apply_rate_basic() {
        // Br 100.00 at 10% = Br 10.00
        let amount = Money::from_santim(10000);
        assert_eq!(amount.apply_rate_bps(1000).santim(), 1000);
    }

    #[test]
    fn test_apply_rate_with_rounding() {
        // Br 0.33 at 5% = 1.65 santim → rounds to 2 santim
        let amount = Money::from_santim(33);
        assert_eq!(amount.apply_rate_bps(500).santim(), 2);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_santim(100);
        assert!(positive.is_positive());

        let negative = Money::from_santim(-100);
        assert!(negative.is_negative());
    }
}
