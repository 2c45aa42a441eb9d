//! # Checkout Orchestration
//!
//! The one place where a validated cart and payment allocation become a
//! submission to the remote backend.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Flow                                     │
//! │                                                                         │
//! │  Screen collects tender input                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  allocator::allocate_*() ──► PaymentAllocation (validated, pure)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  submit(api, session, allocation, comment)  ◄── THIS MODULE            │
//! │       │                                                                 │
//! │       ├── cart empty? ───────────────► CheckoutError::EmptyCart        │
//! │       ├── allocation vs live total? ─► ValidationError                 │
//! │       ├── build CheckoutRequest (snapshot + request id)                │
//! │       ├── api.submit_checkout(...)                                     │
//! │       │     ├── success ────► clear cart, return receipt               │
//! │       │     ├── declined ───► cart KEPT, CheckoutError::Declined       │
//! │       │     └── transport ──► cart KEPT, CheckoutError::Api            │
//! │       ▼                                                                 │
//! │  Screen shows receipt or reason code                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart is cleared only after the backend confirms `success`; any
//! failure leaves it intact so the operator can correct and resubmit.

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use suq_core::error::ValidationError;
use suq_core::money::Money;
use suq_core::types::PaymentAllocation;
use suq_core::validation::require_within_total;

use crate::api::{ApiError, CheckoutLine, CheckoutRequest, PosApi};
use crate::session::CartSession;

// =============================================================================
// Checkout Error
// =============================================================================

/// Everything that can go wrong between "operator confirms" and
/// "backend accepts".
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Nothing to sell.
    #[error("cart is empty")]
    EmptyCart,

    /// The allocation no longer fits the cart (e.g. the cart changed
    /// after the tender screen computed its total).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API client could not deliver the request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The backend received the request and refused it.
    #[error("checkout declined: {message}")]
    Declined { message: String },
}

// =============================================================================
// Checkout Receipt
// =============================================================================

/// Confirmation handed back to the screen after a successful checkout.
#[derive(Debug, Clone)]
pub struct CheckoutReceipt {
    pub request_id: Uuid,
    pub total: Money,
    pub line_count: usize,
}

// =============================================================================
// Submit
// =============================================================================

/// Submits the session's cart with the given payment allocation.
///
/// On `success` from the backend the cart is cleared and a
/// [`CheckoutReceipt`] returned; on any failure the cart is left
/// untouched.
///
/// The allocation is re-checked against the live cart total before
/// sending: the tender screen computed it from a snapshot, and the cart
/// may have changed since.
pub async fn submit<A: PosApi>(
    api: &A,
    session: &CartSession,
    allocation: PaymentAllocation,
    comment: Option<String>,
) -> Result<CheckoutReceipt, CheckoutError> {
    let (lines, total) = session.with_cart(|cart| {
        (
            cart.lines.iter().map(CheckoutLine::from).collect::<Vec<_>>(),
            cart.total(),
        )
    });

    if lines.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    // Paid-now plus receivable must still fit the cart being sold
    require_within_total(allocation.paid_now() + allocation.unpaid(), total)?;

    let request = CheckoutRequest {
        request_id: Uuid::new_v4(),
        total_santim: total.santim(),
        lines,
        allocation,
        comment,
        submitted_at: Utc::now(),
    };

    debug!(
        request_id = %request.request_id,
        total = %total,
        lines = request.lines.len(),
        mode = ?request.allocation.mode,
        "submitting checkout"
    );

    let response = match api.submit_checkout(&request).await {
        Ok(response) => response,
        Err(err) => {
            warn!(request_id = %request.request_id, error = %err, "checkout transport failure");
            return Err(err.into());
        }
    };

    if !response.success {
        let message = response
            .message
            .unwrap_or_else(|| "no reason given".to_string());
        warn!(request_id = %request.request_id, %message, "checkout declined by backend");
        return Err(CheckoutError::Declined { message });
    }

    session.with_cart_mut(|cart| cart.clear());
    info!(
        request_id = %request.request_id,
        total = %total,
        "checkout committed, cart cleared"
    );

    Ok(CheckoutReceipt {
        request_id: request.request_id,
        total,
        line_count: request.lines.len(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::api::{ApiResponse, CommissionRecord};
    use suq_core::allocator::{allocate_cash, allocate_partial};
    use suq_core::types::Product;

    /// Scripted in-memory backend: answers every submit with a fixed
    /// response and records what it was sent.
    struct ScriptedApi {
        response: Result<ApiResponse, ApiError>,
        submitted: Mutex<Vec<CheckoutRequest>>,
    }

    impl ScriptedApi {
        fn accepting() -> Self {
            ScriptedApi {
                response: Ok(ApiResponse::ok()),
                submitted: Mutex::new(Vec::new()),
            }
        }

        fn with_response(response: Result<ApiResponse, ApiError>) -> Self {
            ScriptedApi {
                response,
                submitted: Mutex::new(Vec::new()),
            }
        }

        fn submission_count(&self) -> usize {
            self.submitted.lock().unwrap().len()
        }
    }

    impl PosApi for ScriptedApi {
        async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
            Ok(Vec::new())
        }

        async fn submit_checkout(
            &self,
            request: &CheckoutRequest,
        ) -> Result<ApiResponse, ApiError> {
            self.submitted.lock().unwrap().push(request.clone());
            self.response.clone()
        }

        async fn fetch_commissions(&self) -> Result<Vec<CommissionRecord>, ApiError> {
            Ok(Vec::new())
        }

        async fn pay_commission(
            &self,
            _worker_id: &str,
            _amount: Money,
        ) -> Result<ApiResponse, ApiError> {
            Ok(ApiResponse::ok())
        }
    }

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

    #[tokio::test]
    async fn test_end_to_end_cash_checkout() {
        // Product A (Br 100, stock 5) × 3, product B (Br 20, stock 10) × 2
        let session = CartSession::new();
        session
            .with_cart_mut(|c| c.add_item(&test_product("a", 10000, 5), 3))
            .unwrap();
        session
            .with_cart_mut(|c| c.add_item(&test_product("b", 2000, 10), 2))
            .unwrap();

        let total = session.with_cart(|c| c.total());
        assert_eq!(total, Money::from_santim(34000)); // Br 340.00

        let api = ScriptedApi::accepting();
        let receipt = submit(&api, &session, allocate_cash(total), None)
            .await
            .unwrap();

        assert_eq!(receipt.total, Money::from_santim(34000));
        assert_eq!(receipt.line_count, 2);
        assert_eq!(api.submission_count(), 1);
        assert!(session.with_cart(|c| c.is_empty()));
    }

    #[tokio::test]
    async fn test_declined_checkout_keeps_cart() {
        let session = CartSession::new();
        session
            .with_cart_mut(|c| c.add_item(&test_product("a", 10000, 5), 1))
            .unwrap();

        let api =
            ScriptedApi::with_response(Ok(ApiResponse::declined("stock changed on the server")));
        let total = session.with_cart(|c| c.total());
        let err = submit(&api, &session, allocate_cash(total), None)
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::Declined { ref message }
            if message == "stock changed on the server"));
        assert!(!session.with_cart(|c| c.is_empty()));
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_cart() {
        let session = CartSession::new();
        session
            .with_cart_mut(|c| c.add_item(&test_product("a", 10000, 5), 1))
            .unwrap();

        let api = ScriptedApi::with_response(Err(ApiError::Transport("connection reset".into())));
        let total = session.with_cart(|c| c.total());
        let err = submit(&api, &session, allocate_cash(total), None)
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::Api(ApiError::Transport(_))));
        assert!(!session.with_cart(|c| c.is_empty()));
    }

    #[tokio::test]
    async fn test_empty_cart_never_reaches_the_api() {
        let session = CartSession::new();
        let api = ScriptedApi::accepting();

        let err = submit(&api, &session, allocate_cash(Money::zero()), None)
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::EmptyCart));
        assert_eq!(api.submission_count(), 0);
    }

    #[tokio::test]
    async fn test_stale_allocation_is_rejected() {
        // Tender screen computed the split against Br 200, then an item
        // was removed and the live total dropped to Br 100
        let session = CartSession::new();
        session
            .with_cart_mut(|c| c.add_item(&test_product("a", 10000, 5), 1))
            .unwrap();

        let stale_total = Money::from_santim(20000);
        let allocation = allocate_partial(
            stale_total,
            Money::from_santim(15000),
            Money::from_santim(5000),
            Some("CBE"),
        )
        .unwrap();

        let api = ScriptedApi::accepting();
        let err = submit(&api, &session, allocation, None).await.unwrap_err();

        assert!(matches!(
            err,
            CheckoutError::Validation(ValidationError::AmountExceedsTotal { .. })
        ));
        assert_eq!(api.submission_count(), 0);
        assert!(!session.with_cart(|c| c.is_empty()));
    }

    #[tokio::test]
    async fn test_comment_travels_with_the_request() {
        let session = CartSession::new();
        session
            .with_cart_mut(|c| c.add_item(&test_product("a", 10000, 5), 1))
            .unwrap();

        let api = ScriptedApi::accepting();
        let total = session.with_cart(|c| c.total());
        submit(
            &api,
            &session,
            allocate_cash(total),
            Some("regular customer".to_string()),
        )
        .await
        .unwrap();

        let sent = api.submitted.lock().unwrap();
        assert_eq!(sent[0].comment.as_deref(), Some("regular customer"));
    }
}
