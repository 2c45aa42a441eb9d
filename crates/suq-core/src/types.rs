//! # Domain Types
//!
//! Core domain types used throughout suq-pos.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌──────────────────┐     │
//! │  │    Product      │   │  PaymentMode     │   │ PaymentAllocation│     │
//! │  │  ─────────────  │   │  ─────────────   │   │  ─────────────   │     │
//! │  │  id (opaque)    │   │  Cash            │   │  mode            │     │
//! │  │  name           │   │  Bank            │   │  cash_santim     │     │
//! │  │  selling price  │   │  Credit          │   │  bank_santim     │     │
//! │  │  import price   │   │  Partial         │   │  unpaid_santim   │     │
//! │  │  stock          │   │  CreditWith...   │   │  customer_name   │     │
//! │  └─────────────────┘   └──────────────────┘   └──────────────────┘     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐                            │
//! │  │ SecondaryMethod │   │  CommissionTier  │                            │
//! │  │  Cash | Bank    │   │  Base | Mid | Top│                            │
//! │  └─────────────────┘   └──────────────────┘                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The payment mode used to be a set of string literals
//! (`'cash' | 'bank' | 'credit' | 'partial'`) branched on ad hoc in every
//! sales screen. It is a closed sum type here: the compiler forces every
//! consumer to handle every mode.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Read-only reference data supplied by the remote catalog endpoint.
/// The cart never mutates a `Product`; it snapshots the fields it needs
/// into a [`crate::cart::CartLine`] at add time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier assigned by the backend.
    pub id: String,

    /// Display name shown to the operator and on receipts.
    pub name: String,

    /// Selling price in santim. Seeds the cart line's unit price.
    pub selling_price_santim: i64,

    /// Cost basis in santim. Used only in profit reporting, never in
    /// cart math.
    pub import_price_santim: i64,

    /// Current stock level, the ceiling for cart quantities.
    pub quantity_available: i64,

    /// Category tag, used only for catalog filtering in the UI.
    pub category: String,

    /// Whether the product is active (soft delete on the backend).
    pub is_active: bool,
}

impl Product {
    /// Returns the selling price as a Money type.
    #[inline]
    pub fn selling_price(&self) -> Money {
        Money::from_santim(self.selling_price_santim)
    }

    /// Returns the import (cost) price as a Money type.
    #[inline]
    pub fn import_price(&self) -> Money {
        Money::from_santim(self.import_price_santim)
    }
}

// =============================================================================
// Payment Mode
// =============================================================================

/// How a sale's total is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    /// Full total paid in physical cash.
    Cash,
    /// Full total paid through a named bank.
    Bank,
    /// Some or all of the total remains unpaid, tracked against a
    /// named customer. The paid-now portion (if any) defaults to cash.
    Credit,
    /// Split between cash and bank at time of sale.
    Partial,
    /// Credit sale whose paid-now portion goes through an explicit
    /// secondary channel (cash or a named bank).
    CreditWithSecondary,
}

/// The channel carrying the paid-now portion of a credit sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryMethod {
    Cash,
    Bank,
}

// =============================================================================
// Payment Allocation
// =============================================================================

/// The validated breakdown of how a cart total will be paid across
/// cash, bank and credit channels.
///
/// Produced only by the allocator functions in [`crate::allocator`];
/// constructing one by hand bypasses validation and is discouraged
/// outside tests.
///
/// ## Invariant
/// On every allocator success: `Money::zero() <= paid_now() <= total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAllocation {
    /// The chosen payment mode.
    pub mode: PaymentMode,

    /// Cash received now, in santim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_santim: Option<i64>,

    /// Bank transfer received now, in santim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_santim: Option<i64>,

    /// Amount left unpaid (credit sales), in santim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unpaid_santim: Option<i64>,

    /// Paid-now portion of a credit sale, in santim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_santim: Option<i64>,

    /// Bank receiving the bank channel amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,

    /// Bank receiving the secondary channel amount of a credit sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_bank_name: Option<String>,

    /// Customer the unpaid amount is tracked against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}

impl PaymentAllocation {
    /// Total amount settled at the time of sale, across all immediate
    /// channels (cash + bank + credit secondary).
    ///
    /// The unpaid portion of a credit sale is excluded: it is a
    /// receivable, not a payment.
    pub fn paid_now(&self) -> Money {
        let santim = self.cash_santim.unwrap_or(0)
            + self.bank_santim.unwrap_or(0)
            + self.secondary_santim.unwrap_or(0);
        Money::from_santim(santim)
    }

    /// Amount left owing by the customer, zero for non-credit modes.
    pub fn unpaid(&self) -> Money {
        Money::from_santim(self.unpaid_santim.unwrap_or(0))
    }
}

// =============================================================================
// Commission Tier
// =============================================================================

/// Commission rate band for a car-wash worker, keyed on their total
/// sales for the period.
///
/// ## Tier Table
/// ```text
/// total sales < Br 10,000              → Base (5%)
/// Br 10,000 <= total sales < Br 50,000 → Mid  (7%)
/// total sales >= Br 50,000             → Top  (10%)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CommissionTier {
    Base,
    Mid,
    Top,
}

impl CommissionTier {
    /// Lower bound of the Mid tier: Br 10,000.
    pub const MID_THRESHOLD: Money = Money::from_santim(1_000_000);

    /// Lower bound of the Top tier: Br 50,000.
    pub const TOP_THRESHOLD: Money = Money::from_santim(5_000_000);

    /// Selects the tier for a worker's total sales.
    pub fn for_sales(total_sales: Money) -> Self {
        if total_sales >= Self::TOP_THRESHOLD {
            CommissionTier::Top
        } else if total_sales >= Self::MID_THRESHOLD {
            CommissionTier::Mid
        } else {
            CommissionTier::Base
        }
    }

    /// The tier's commission rate in basis points.
    #[inline]
    pub const fn rate_bps(&self) -> u32 {
        match self {
            CommissionTier::Base => 500,
            CommissionTier::Mid => 700,
            CommissionTier::Top => 1000,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_prices() {
        let product = Product {
            id: "p-1".to_string(),
            name: "Detergent 1L".to_string(),
            selling_price_santim: 12000,
            import_price_santim: 9500,
            quantity_available: 8,
            category: "cleaning".to_string(),
            is_active: true,
        };
        assert_eq!(product.selling_price(), Money::from_santim(12000));
        assert_eq!(product.import_price(), Money::from_santim(9500));
    }

    #[test]
    fn test_commission_tier_selection() {
        assert_eq!(
            CommissionTier::for_sales(Money::from_santim(999_900)),
            CommissionTier::Base
        );
        assert_eq!(
            CommissionTier::for_sales(Money::from_santim(1_000_000)),
            CommissionTier::Mid
        );
        assert_eq!(
            CommissionTier::for_sales(Money::from_santim(4_999_999)),
            CommissionTier::Mid
        );
        assert_eq!(
            CommissionTier::for_sales(Money::from_santim(5_000_000)),
            CommissionTier::Top
        );
    }

    #[test]
    fn test_paid_now_excludes_unpaid() {
        let allocation = PaymentAllocation {
            mode: PaymentMode::Credit,
            cash_santim: None,
            bank_santim: None,
            unpaid_santim: Some(15000),
            secondary_santim: Some(5000),
            bank_name: None,
            secondary_bank_name: None,
            customer_name: Some("Abebe".to_string()),
        };
        assert_eq!(allocation.paid_now(), Money::from_santim(5000));
        assert_eq!(allocation.unpaid(), Money::from_santim(15000));
    }

    #[test]
    fn test_payment_mode_serializes_snake_case() {
        let json = serde_json::to_string(&PaymentMode::CreditWithSecondary).unwrap();
        assert_eq!(json, "\"credit_with_secondary\"");
    }
}
