//! # Payment Allocator
//!
//! Translates a chosen payment mode plus user-supplied amounts into a
//! validated [`PaymentAllocation`], or rejects it with a specific
//! reason, before the screen forwards it to the remote API.
//!
//! ## Allocation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Payment Allocation                                   │
//! │                                                                         │
//! │  Operator picks mode on the tender screen                              │
//! │       │                                                                 │
//! │       ├── Cash ───────────► allocate_cash(total)                       │
//! │       ├── Bank ───────────► allocate_bank(total, bank)                 │
//! │       ├── Credit ─────────► allocate_credit(total, customer, unpaid)   │
//! │       ├── Credit + channel► allocate_credit_with_secondary(...)        │
//! │       └── Cash + Bank ────► allocate_partial(total, cash, bank, bank?) │
//! │                                                                         │
//! │  Every function: pure, synchronous, no side effects.                   │
//! │  Success invariant: 0 <= paid_now() <= total                           │
//! │  Failure: ValidationError with a stable reason code                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One function per [`PaymentMode`] variant: the divergent payload
//! shapes that used to hang off string comparisons in the screens are
//! encoded in the signatures here.

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{PaymentAllocation, PaymentMode, SecondaryMethod};
use crate::validation::{
    require_bank_name, require_customer_name, require_non_negative, require_within_total,
};

/// Allocates the full total to cash. Always succeeds.
pub fn allocate_cash(total: Money) -> PaymentAllocation {
    PaymentAllocation {
        mode: PaymentMode::Cash,
        cash_santim: Some(total.santim()),
        bank_santim: None,
        unpaid_santim: None,
        secondary_santim: None,
        bank_name: None,
        secondary_bank_name: None,
        customer_name: None,
    }
}

/// Allocates the full total to a named bank.
///
/// ## Errors
/// `MissingBankSelection` if `bank_name` is empty.
pub fn allocate_bank(total: Money, bank_name: &str) -> CoreResult<PaymentAllocation> {
    require_bank_name(bank_name)?;

    Ok(PaymentAllocation {
        mode: PaymentMode::Bank,
        cash_santim: None,
        bank_santim: Some(total.santim()),
        unpaid_santim: None,
        secondary_santim: None,
        bank_name: Some(bank_name.trim().to_string()),
        secondary_bank_name: None,
        customer_name: None,
    })
}

/// Allocates a credit sale: `unpaid` stays owing against the named
/// customer, and any paid-now remainder (`total - unpaid`) defaults to
/// cash.
///
/// Use [`allocate_credit_with_secondary`] when the paid-now portion
/// goes through an explicit channel instead.
///
/// ## Errors
/// - `EmptyCustomerName` if `customer_name` is empty
/// - `NegativeAmount` if `unpaid < 0`
/// - `AmountExceedsTotal` if `unpaid > total`
pub fn allocate_credit(
    total: Money,
    customer_name: &str,
    unpaid: Money,
) -> CoreResult<PaymentAllocation> {
    allocate_credit_with_secondary(total, customer_name, unpaid, SecondaryMethod::Cash, None)
}

/// Allocates a credit sale whose paid-now portion goes through an
/// explicit secondary channel.
///
/// ## Errors
/// Same as [`allocate_credit`], plus `MissingBankSelection` when
/// `secondary == Bank` without a bank name.
pub fn allocate_credit_with_secondary(
    total: Money,
    customer_name: &str,
    unpaid: Money,
    secondary: SecondaryMethod,
    secondary_bank_name: Option<&str>,
) -> CoreResult<PaymentAllocation> {
    require_customer_name(customer_name)?;
    require_non_negative("unpaid amount", unpaid)?;
    require_within_total(unpaid, total)?;

    let secondary_bank_name = match secondary {
        SecondaryMethod::Cash => None,
        SecondaryMethod::Bank => {
            let name = secondary_bank_name.unwrap_or("");
            require_bank_name(name)?;
            Some(name.trim().to_string())
        }
    };

    // Fully-unpaid credit sales carry no paid-now channel at all
    let paid_now = total - unpaid;
    let secondary_santim = if paid_now.is_positive() {
        Some(paid_now.santim())
    } else {
        None
    };

    let mode = match secondary {
        SecondaryMethod::Cash => PaymentMode::Credit,
        SecondaryMethod::Bank => PaymentMode::CreditWithSecondary,
    };

    Ok(PaymentAllocation {
        mode,
        cash_santim: None,
        bank_santim: None,
        unpaid_santim: Some(unpaid.santim()),
        secondary_santim,
        bank_name: None,
        secondary_bank_name,
        customer_name: Some(customer_name.trim().to_string()),
    })
}

/// Allocates a sale split between cash and bank at time of sale.
///
/// Underpayment (`cash + bank < total`) is accepted: the screens this
/// core was extracted from only ever rejected overpayment, and a
/// partial sale carries no unpaid-amount bookkeeping field. Kept as
/// observed.
///
/// ## Errors
/// - `NegativeAmount` if either amount is negative
/// - `AmountExceedsTotal` if `cash + bank > total`
/// - `MissingBankSelection` if `bank > 0` without a bank name
pub fn allocate_partial(
    total: Money,
    cash: Money,
    bank: Money,
    bank_name: Option<&str>,
) -> CoreResult<PaymentAllocation> {
    require_non_negative("cash amount", cash)?;
    require_non_negative("bank amount", bank)?;
    require_within_total(cash + bank, total)?;

    let bank_name = if bank.is_positive() {
        let name = bank_name.unwrap_or("");
        require_bank_name(name)?;
        Some(name.trim().to_string())
    } else {
        None
    };

    Ok(PaymentAllocation {
        mode: PaymentMode::Partial,
        cash_santim: Some(cash.santim()),
        bank_santim: Some(bank.santim()),
        unpaid_santim: None,
        secondary_santim: None,
        bank_name,
        secondary_bank_name: None,
        customer_name: None,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
