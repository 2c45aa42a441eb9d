//! # Error Types
//!
//! Domain-specific error types for suq-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  suq-core errors (this file)                                           │
//! │  └── ValidationError  - Cart / allocator invariant violations          │
//! │                                                                         │
//! │  suq-session errors (separate crate)                                   │
//! │  ├── ApiError         - Remote backend failures (transport/rejection)  │
//! │  └── CheckoutError    - Validation OR Api, surfaced to the screen      │
//! │                                                                         │
//! │  Flow: ValidationError → CheckoutError → screen shows reason code      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (amounts, product ids)
//! 3. Errors are enum variants, never String
//! 4. Each variant carries a stable machine-readable code for the UI

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Invariant violations raised synchronously by cart and allocator
/// operations.
///
/// Always locally recoverable: the calling screen surfaces the message
/// (or maps [`ValidationError::code`] to a localized string) and lets
/// the operator correct the input. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A credit sale was attempted without naming the customer.
    #[error("customer name is required for a credit sale")]
    EmptyCustomerName,

    /// A monetary input was negative where only non-negative is allowed.
    #[error("{field} must not be negative")]
    NegativeAmount { field: &'static str },

    /// The paid / unpaid amounts exceed the cart total.
    ///
    /// ## When This Occurs
    /// - Partial sale: `cash + bank > total`
    /// - Credit sale: `unpaid > total`
    #[error("amount {amount_santim} exceeds cart total {total_santim} (santim)")]
    AmountExceedsTotal {
        amount_santim: i64,
        total_santim: i64,
    },

    /// A bank channel carries money but no bank was selected.
    #[error("a bank must be selected when paying through a bank")]
    MissingBankSelection,

    /// Quantity below the allowed minimum.
    ///
    /// Quantities above the stock ceiling are NOT an error: they are
    /// silently clamped to the line's `max_quantity` (see cart module).
    #[error("quantity {requested} is out of range (minimum {min})")]
    QuantityOutOfRange { requested: i64, min: i64 },

    /// The referenced product has no line in the cart.
    #[error("product {product_id} is not in the cart")]
    LineNotFound { product_id: String },
}

impl ValidationError {
    /// Stable machine-readable reason code for the calling UI.
    ///
    /// ## Usage in Frontend
    /// ```typescript
    /// try {
    ///   await submitSale(payload);
    /// } catch (e) {
    ///   switch (e.code) {
    ///     case 'AMOUNT_EXCEEDS_TOTAL':
    ///       showError(t('sale.overpayment'));
    ///       break;
    ///     case 'MISSING_BANK_SELECTION':
    ///       highlightBankPicker();
    ///       break;
    ///   }
    /// }
    /// ```
    pub const fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyCustomerName => "EMPTY_CUSTOMER_NAME",
            ValidationError::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
            ValidationError::AmountExceedsTotal { .. } => "AMOUNT_EXCEEDS_TOTAL",
            ValidationError::MissingBankSelection => "MISSING_BANK_SELECTION",
            ValidationError::QuantityOutOfRange { .. } => "QUANTITY_OUT_OF_RANGE",
            ValidationError::LineNotFound { .. } => "LINE_NOT_FOUND",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type CoreResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::AmountExceedsTotal {
            amount_santim: 11000,
            total_santim: 10000,
        };
        assert_eq!(
            err.to_string(),
            "amount 11000 exceeds cart total 10000 (santim)"
        );

        let err = ValidationError::NegativeAmount { field: "cash amount" };
        assert_eq!(err.to_string(), "cash amount must not be negative");
    }

    #[test]
    fn test_reason_codes() {
        assert_eq!(
            ValidationError::EmptyCustomerName.code(),
            "EMPTY_CUSTOMER_NAME"
        );
        assert_eq!(
            ValidationError::MissingBankSelection.code(),
            "MISSING_BANK_SELECTION"
        );
        assert_eq!(
            ValidationError::QuantityOutOfRange {
                requested: 0,
                min: 1
            }
            .code(),
            "QUANTITY_OUT_OF_RANGE"
        );
    }
}
