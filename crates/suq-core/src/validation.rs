//! # Validation Module
//!
//! Shared input validators for cart and allocator operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (web / React Native)                                │
//! │  ├── Basic format checks (empty fields, numeric inputs)                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (shared core)                                    │
//! │  ├── The single source of truth for business-rule validation           │
//! │  └── Identical behavior on both front-ends, by construction            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Remote backend                                               │
//! │  └── Server-side checks, outside this repository                       │
//! │                                                                         │
//! │  Defense in depth: each layer catches what the previous one missed     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;

// =============================================================================
// String Validators
// =============================================================================

/// Requires a non-empty (after trimming) customer name.
///
/// ## Example
/// ```rust
/// use suq_core::validation::require_customer_name;
///
/// assert!(require_customer_name("Abebe").is_ok());
/// assert!(require_customer_name("   ").is_err());
/// ```
pub fn require_customer_name(name: &str) -> CoreResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyCustomerName);
    }
    Ok(())
}

/// Requires a non-empty (after trimming) bank selection.
pub fn require_bank_name(name: &str) -> CoreResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingBankSelection);
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Requires a non-negative monetary amount.
///
/// Zero is allowed: a partial sale may carry its whole weight on one
/// channel, and a fully-unpaid credit sale has a zero paid-now portion.
pub fn require_non_negative(field: &'static str, amount: Money) -> CoreResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::NegativeAmount { field });
    }
    Ok(())
}

/// Requires a positive quantity (>= 1).
pub fn require_positive_quantity(qty: i64) -> CoreResult<()> {
    if qty < 1 {
        return Err(ValidationError::QuantityOutOfRange {
            requested: qty,
            min: 1,
        });
    }
    Ok(())
}

/// Requires an amount that does not exceed the cart total.
///
/// The business rule observed on every sales screen: money counted at
/// the till may fall short of the total, but must never exceed it.
pub fn require_within_total(amount: Money, total: Money) -> CoreResult<()> {
    if amount > total {
        return Err(ValidationError::AmountExceedsTotal {
            amount_santim: amount.santim(),
            total_santim: total.santim(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_customer_name() {
        assert!(require_customer_name("Abebe").is_ok());
        assert!(require_customer_name("").is_err());
        assert!(require_customer_name("   ").is_err());
    }

    #[test]
    fn test_require_bank_name() {
        assert!(require_bank_name("CBE").is_ok());
        assert_eq!(
            require_bank_name("").unwrap_err(),
            ValidationError::MissingBankSelection
        );
    }

    #[test]
    fn test_require_non_negative() {
        assert!(require_non_negative("cash amount", Money::zero()).is_ok());
        assert!(require_non_negative("cash amount", Money::from_santim(100)).is_ok());
        assert_eq!(
            require_non_negative("cash amount", Money::from_santim(-1)).unwrap_err(),
            ValidationError::NegativeAmount {
                field: "cash amount"
            }
        );
    }

    #[test]
    fn test_require_positive_quantity() {
        assert!(require_positive_quantity(1).is_ok());
        assert!(require_positive_quantity(0).is_err());
        assert!(require_positive_quantity(-3).is_err());
    }

    #[test]
    fn test_require_within_total() {
        let total = Money::from_santim(10000);
        assert!(require_within_total(Money::from_santim(10000), total).is_ok());
        assert!(require_within_total(Money::from_santim(9999), total).is_ok());
        assert_eq!(
            require_within_total(Money::from_santim(10001), total).unwrap_err(),
            ValidationError::AmountExceedsTotal {
                amount_santim: 10001,
                total_santim: 10000,
            }
        );
    }
}
