//! # Commission Calculator
//!
//! Commission math for the car-wash sub-business.
//!
//! Workers earn a percentage of their total sales; the percentage
//! steps up at fixed sales thresholds (see [`CommissionTier`]).
//! Payouts happen in installments, so the pending balance is the
//! earned commission minus what has already been paid out.

use crate::money::Money;
use crate::types::CommissionTier;

/// Computes the commission earned on a worker's total sales.
///
/// Pure step function:
/// ```text
/// total sales < Br 10,000  → 5%
/// total sales < Br 50,000  → 7%
/// total sales >= Br 50,000 → 10%
/// ```
///
/// ## Example
/// ```rust
/// use suq_core::commission::compute_commission;
/// use suq_core::money::Money;
///
/// // Br 9,999.00 at 5% = Br 499.95
/// let earned = compute_commission(Money::from_santim(999_900));
/// assert_eq!(earned, Money::from_santim(49_995));
/// ```
pub fn compute_commission(total_sales: Money) -> Money {
    let tier = CommissionTier::for_sales(total_sales);
    total_sales.apply_rate_bps(tier.rate_bps())
}

/// Commission still owed to a worker: earned minus already paid.
///
/// May be negative when a worker has been overpaid. The balance is
/// passed through unclamped; the reporting screens display it as-is.
pub fn pending_commission(total_sales: Money, already_paid: Money) -> Money {
    compute_commission(total_sales) - already_paid
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commission_tier_anchors() {
        // Br 9,999 × 5% = Br 499.95
        assert_eq!(
            compute_commission(Money::from_santim(999_900)),
            Money::from_santim(49_995)
        );
        // Br 10,000 × 7% = Br 700.00 (tier boundary is inclusive)
        assert_eq!(
            compute_commission(Money::from_santim(1_000_000)),
            Money::from_santim(70_000)
        );
        // Br 50,000 × 10% = Br 5,000.00
        assert_eq!(
            compute_commission(Money::from_santim(5_000_000)),
            Money::from_santim(500_000)
        );
    }

    #[test]
    fn test_commission_on_zero_sales() {
        assert_eq!(compute_commission(Money::zero()), Money::zero());
    }

    #[test]
    fn test_pending_commission() {
        let sales = Money::from_santim(1_000_000); // earns Br 700
        assert_eq!(
            pending_commission(sales, Money::from_santim(30_000)),
            Money::from_santim(40_000)
        );
    }

    #[test]
    fn test_pending_commission_overpaid_goes_negative() {
        let sales = Money::from_santim(1_000_000); // earns Br 700
        let pending = pending_commission(sales, Money::from_santim(80_000));
        assert_eq!(pending, Money::from_santim(-10_000));
        assert!(pending.is_negative());
    }
}
