//! # External API Boundary
//!
//! The contract between this workspace and the remote action-based
//! backend. The backend itself (PHP endpoints, storage, auth) is not
//! part of this repository; embedding applications implement [`PosApi`]
//! against it.
//!
//! ## Responsibility Split
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Who Owns What                                      │
//! │                                                                         │
//! │  PosApi implementation (embedding app)    This workspace                │
//! │  ─────────────────────────────────────    ──────────────                │
//! │  • Auth-token attachment                  • Payload construction        │
//! │  • Retry/backoff on transient failures    • Validation before send      │
//! │  • HTTP transport, timeouts               • Cart lifecycle              │
//! │  • Mapping HTTP errors to ApiError        • Never retries, never        │
//! │                                             reinterprets errors         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use suq_core::cart::CartLine;
use suq_core::commission::pending_commission;
use suq_core::money::Money;
use suq_core::types::{PaymentAllocation, Product};

// =============================================================================
// API Error
// =============================================================================

/// Failures produced by a [`PosApi`] implementation.
///
/// The session layer passes these through untouched; the UI decides
/// how to display them.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never got a usable response (network down, timeout
    /// after the implementation's own retries were exhausted).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered but refused the request.
    #[error("request rejected: {message}")]
    Rejected { message: String },
}

// =============================================================================
// API Response
// =============================================================================

/// The backend's uniform result envelope.
///
/// Every action endpoint answers with a `success` flag and an optional
/// human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    /// A successful response with no message.
    pub fn ok() -> Self {
        ApiResponse {
            success: true,
            message: None,
        }
    }

    /// A failed response carrying a reason.
    pub fn declined(message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            message: Some(message.into()),
        }
    }
}

// =============================================================================
// Checkout Payload
// =============================================================================

/// One sold line as the backend expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutLine {
    pub product_id: String,
    pub name: String,
    pub unit_price_santim: i64,
    pub quantity: i64,
    pub line_total_santim: i64,
}

impl From<&CartLine> for CheckoutLine {
    fn from(line: &CartLine) -> Self {
        CheckoutLine {
            product_id: line.product_id.clone(),
            name: line.name.clone(),
            unit_price_santim: line.unit_price_santim,
            quantity: line.quantity,
            line_total_santim: line.line_total().santim(),
        }
    }
}

/// The full checkout submission payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Client-generated id so the backend can de-duplicate a submission
    /// that was retried by the transport layer.
    pub request_id: Uuid,

    /// Snapshot of the cart at submission time.
    pub lines: Vec<CheckoutLine>,

    /// Cart total in santim, as computed client-side.
    pub total_santim: i64,

    /// The validated payment breakdown.
    pub allocation: PaymentAllocation,

    /// Free-text operator comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// When the operator confirmed the sale.
    pub submitted_at: DateTime<Utc>,
}

// =============================================================================
// Commission Records
// =============================================================================

/// A car-wash worker's commission standing, as fetched from the
/// backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRecord {
    pub worker_id: String,
    pub worker_name: String,
    /// Total sales attributed to the worker this period, in santim.
    pub total_sales_santim: i64,
    /// Commission already paid out, in santim.
    pub paid_santim: i64,
}

impl CommissionRecord {
    /// Commission still owed to the worker (earned minus paid).
    ///
    /// Negative when overpaid; displayed as-is.
    pub fn pending(&self) -> Money {
        pending_commission(
            Money::from_santim(self.total_sales_santim),
            Money::from_santim(self.paid_santim),
        )
    }
}

// =============================================================================
// PosApi Trait
// =============================================================================

/// The remote backend, as seen from this workspace.
///
/// Implementations wrap the action-based HTTP endpoints and own every
/// transport concern. This workspace calls the trait and nothing else.
pub trait PosApi {
    /// Fetches the product catalog.
    fn fetch_products(&self) -> impl std::future::Future<Output = Result<Vec<Product>, ApiError>> + Send;

    /// Submits a completed checkout.
    fn submit_checkout(
        &self,
        request: &CheckoutRequest,
    ) -> impl std::future::Future<Output = Result<ApiResponse, ApiError>> + Send;

    /// Fetches commission standings for all car-wash workers.
    fn fetch_commissions(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<CommissionRecord>, ApiError>> + Send;

    /// Records a commission payout to a worker.
    fn pay_commission(
        &self,
        worker_id: &str,
        amount: Money,
    ) -> impl std::future::Future<Output = Result<ApiResponse, ApiError>> + Send;
}

// =============================================================================
// Unit Tests
// =============================================================================
