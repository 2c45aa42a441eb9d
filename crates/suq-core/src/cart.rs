//! # Cart Module
//!
//! The in-memory list of items an operator intends to sell, before
//! submission to the remote checkout endpoint.
//!
//! This logic used to be reimplemented near-identically on four screens
//! (web Sales, web Credit Register, mobile Sales, mobile Credit
//! Register). It lives here once; every screen binds user events to
//! these operations and stays dumb.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Screen Action            Cart Operation          State Change          │
//! │  ─────────────            ──────────────          ────────────          │
//! │                                                                         │
//! │  Tap product ───────────► add_item() ───────────► merge or insert line  │
//! │                                                                         │
//! │  Edit quantity ─────────► update_quantity() ────► clamp to stock        │
//! │                                                                         │
//! │  Edit price ────────────► update_unit_price() ──► overwrite             │
//! │                                                                         │
//! │  Tap remove ────────────► remove_item() ────────► drop line (idempotent)│
//! │                                                                         │
//! │  Checkout succeeded ────► clear() ──────────────► empty cart            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::validation::{require_non_negative, require_positive_quantity};

// =============================================================================
// Cart Line
// =============================================================================

/// One line per distinct product currently in the cart.
///
/// ## Snapshot Pattern
/// The line owns a copy of the product fields it needs (name, price,
/// stock ceiling) rather than a reference. The price is *seeded* from
/// the product's selling price but stays operator-editable: the
/// business allows price overrides at sale time.
///
/// `max_quantity` is the stock level at the time the product was added
/// and is never refreshed against live stock afterwards. A cart held
/// open while inventory changes clamps against a stale ceiling; the
/// backend re-checks stock at submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product ID (foreign key by value).
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price in santim. Seeded from the product, then editable.
    pub unit_price_santim: i64,

    /// Quantity in cart. Invariant: `1 <= quantity <= max_quantity`.
    pub quantity: i64,

    /// Stock ceiling snapshot taken at add time.
    pub max_quantity: i64,
}

impl CartLine {
    /// Creates a new cart line from a product, clamping the initial
    /// quantity to available stock.
    fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price_santim: product.selling_price_santim,
            quantity: quantity.min(product.quantity_available),
            max_quantity: product.quantity_available,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_santim(self.unit_price_santim)
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product again
///   increases its quantity)
/// - For every line: `1 <= quantity <= max_quantity`, `unit_price >= 0`
/// - Insertion order is preserved for display; totals ignore it
///
/// ## Lifecycle
/// Created empty per checkout session, mutated by the operations below,
/// cleared on successful checkout or explicit cancel. Never persisted
/// by this core.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product to the cart or increases its quantity if already
    /// present.
    ///
    /// ## Behavior
    /// - Already in cart: quantity grows by `quantity_delta`, clamped
    ///   to the line's `max_quantity`. Pushing past the ceiling is NOT
    ///   an error; the quantity simply stops at the ceiling, mirroring
    ///   the quantity inputs on the sales screens.
    /// - Not in cart: a new line is created with
    ///   `quantity = min(quantity_delta, stock)`, price seeded from the
    ///   product's selling price, and the stock ceiling snapshotted.
    /// - Out of stock (`quantity_available < 1`): a no-op, like every
    ///   other clamp against the ceiling. A line below quantity 1 is
    ///   never created.
    ///
    /// ## Errors
    /// `QuantityOutOfRange` if `quantity_delta < 1`.
    pub fn add_item(&mut self, product: &Product, quantity_delta: i64) -> CoreResult<()> {
        require_positive_quantity(quantity_delta)?;

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id)
        {
            line.quantity = (line.quantity + quantity_delta).min(line.max_quantity);
            return Ok(());
        }

        // No stock means no quantity to clamp to; skip rather than
        // create a zero-quantity line
        if product.quantity_available < 1 {
            return Ok(());
        }

        self.lines.push(CartLine::from_product(product, quantity_delta));
        Ok(())
    }

    /// Removes a line from the cart by product ID.
    ///
    /// Idempotent: removing an absent product is a no-op, so a double
    /// tap on the remove button never errors.
    pub fn remove_item(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Sets the quantity of a line, clamped to its stock ceiling.
    ///
    /// ## Errors
    /// - `QuantityOutOfRange` if `new_quantity < 1` (removal is an
    ///   explicit operation, not a quantity of zero)
    /// - `LineNotFound` if the product has no line in the cart
    pub fn update_quantity(&mut self, product_id: &str, new_quantity: i64) -> CoreResult<()> {
        require_positive_quantity(new_quantity)?;

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
            .ok_or_else(|| ValidationError::LineNotFound {
                product_id: product_id.to_string(),
            })?;

        line.quantity = new_quantity.min(line.max_quantity);
        Ok(())
    }

    /// Overwrites the unit price of a line (operator price override).
    ///
    /// ## Errors
    /// - `NegativeAmount` if `new_price` is negative (zero is allowed:
    ///   giveaway items)
    /// - `LineNotFound` if the product has no line in the cart
    pub fn update_unit_price(&mut self, product_id: &str, new_price: Money) -> CoreResult<()> {
        require_non_negative("unit price", new_price)?;

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
            .ok_or_else(|| ValidationError::LineNotFound {
                product_id: product_id.to_string(),
            })?;

        line.unit_price_santim = new_price.santim();
        Ok(())
    }

    /// Calculates the cart total: `sum(quantity × unit price)`.
    ///
    /// Pure, no side effects. Exact in santim, so the "rounded to two
    /// decimal places" of the display layer is a formatting concern
    /// only.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, l| acc + l.line_total())
    }

    /// Clears all lines (used after successful checkout or cancel).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_santim: i64, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            selling_price_santim: price_santim,
            import_price_santim: price_santim / 2,
            quantity_available: stock,
            category: "general".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn test_add_item_creates_line_with_seeded_price() {
        let mut cart = Cart::new();
        let product = test_product("1", 5000, 10);

        cart.add_item(&product, 2).unwrap();

        assert_eq!(cart.line_count(), 1);
        let line = &cart.lines[0];
        assert_eq!(line.unit_price_santim, 5000);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.max_quantity, 10);
    }

    #[test]
    fn test_add_same_product_merges_line() {
        let mut cart = Cart::new();
        let product = test_product("1", 5000, 10);

        cart.add_item(&product, 2).unwrap();
        cart.add_item(&product, 3).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_quantity_clamps_to_stock_ceiling() {
        let mut cart = Cart::new();
        let product = test_product("1", 5000, 3);

        // Repeated adds never push past the ceiling
        for _ in 0..10 {
            cart.add_item(&product, 1).unwrap();
        }
        assert_eq!(cart.lines[0].quantity, 3);

        // Initial add larger than stock is clamped too
        let mut cart = Cart::new();
        cart.add_item(&product, 99).unwrap();
        assert_eq!(cart.lines[0].quantity, 3);
    }

    #[test]
    fn test_add_out_of_stock_product_is_a_no_op() {
        let mut cart = Cart::new();
        let product = test_product("1", 5000, 0);

        cart.add_item(&product, 2).unwrap();

        assert!(cart.is_empty());

        // Repeated adds change nothing either; the line invariant
        // holds for everything that is in the cart
        cart.add_item(&product, 1).unwrap();
        assert!(cart.lines.iter().all(|l| l.quantity >= 1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_item_rejects_non_positive_delta() {
        let mut cart = Cart::new();
        let product = test_product("1", 5000, 3);

        assert_eq!(
            cart.add_item(&product, 0).unwrap_err().code(),
            "QUANTITY_OUT_OF_RANGE"
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        let product = test_product("1", 5000, 10);
        cart.add_item(&product, 1).unwrap();

        cart.remove_item("1");
        cart.remove_item("1"); // second removal is a no-op

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_clamps_and_validates() {
        let mut cart = Cart::new();
        let product = test_product("1", 5000, 4);
        cart.add_item(&product, 1).unwrap();

        cart.update_quantity("1", 9).unwrap();
        assert_eq!(cart.lines[0].quantity, 4); // clamped to stock

        assert_eq!(
            cart.update_quantity("1", 0).unwrap_err().code(),
            "QUANTITY_OUT_OF_RANGE"
        );
        assert_eq!(
            cart.update_quantity("missing", 2).unwrap_err().code(),
            "LINE_NOT_FOUND"
        );
    }

    #[test]
    fn test_update_unit_price_override() {
        let mut cart = Cart::new();
        let product = test_product("1", 5000, 4);
        cart.add_item(&product, 2).unwrap();

        cart.update_unit_price("1", Money::from_santim(4500)).unwrap();
        assert_eq!(cart.total(), Money::from_santim(9000));

        assert_eq!(
            cart.update_unit_price("1", Money::from_santim(-1))
                .unwrap_err()
                .code(),
            "NEGATIVE_AMOUNT"
        );
    }

    #[test]
    fn test_total_correctness() {
        // [(qty=2, price=Br 50), (qty=1, price=Br 30)] → Br 130.00
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 5000, 10), 2).unwrap();
        cart.add_item(&test_product("b", 3000, 10), 1).unwrap();

        assert_eq!(cart.total(), Money::from_santim(13000));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 5000, 10), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }
}
