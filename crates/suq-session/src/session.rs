//! # Cart Session State
//!
//! Owns the single cart a checkout session holds.
//!
//! ## Thread Safety
//! The core cart is a plain mutable value; it only needs protection at
//! the seam where UI event handlers may run concurrently. The session
//! wraps it in `Arc<Mutex<T>>`:
//! 1. Multiple handlers may access/modify the cart
//! 2. Only one should modify it at a time
//! 3. Read and write paths both acquire the lock briefly
//!
//! ## Why Not RwLock?
//! Cart operations are quick and most of them modify state. A RwLock
//! would add complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use suq_core::cart::Cart;

/// Thread-safe handle to the session's cart.
///
/// Created empty per checkout session (typically one screen's
/// lifetime); cleared on successful checkout or explicit cancel.
#[derive(Debug, Clone, Default)]
pub struct CartSession {
    cart: Arc<Mutex<Cart>>,
}

impl CartSession {
    /// Creates a new session with an empty cart.
    pub fn new() -> Self {
        CartSession {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use suq_session::CartSession;
    ///
    /// let session = CartSession::new();
    /// let total = session.with_cart(|cart| cart.total());
    /// assert!(total.is_zero());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_cart_mut(|cart| cart.add_item(&product, 1))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
