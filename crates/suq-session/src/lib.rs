//! # suq-session: Session State and the External API Boundary
//!
//! Sits between the pure [`suq_core`] logic and the embedding
//! application (web bridge or React Native bridge).
//!
//! ## Module Organization
//! ```text
//! suq_session/
//! ├── lib.rs          ◄─── You are here (exports + tracing setup)
//! ├── session.rs      ◄─── CartSession: thread-safe cart ownership
//! ├── api.rs          ◄─── PosApi trait, DTOs, ApiError
//! └── checkout.rs     ◄─── submit(): payload → backend → clear cart
//! ```
//!
//! ## Dependency Injection, Not Globals
//! The previous generation of this system read an auth token and a
//! module-level HTTP client out of ambient context from deep inside
//! screens. Here the collaborator is explicit: anything that talks to
//! the backend receives a [`api::PosApi`] implementation as an
//! argument. Tests inject a scripted fake; apps inject their HTTP
//! client.

pub mod api;
pub mod checkout;
pub mod session;

pub use api::{ApiError, ApiResponse, CheckoutRequest, CommissionRecord, PosApi};
pub use checkout::{submit, CheckoutError, CheckoutReceipt};
pub use session::CartSession;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// Called once at startup by the embedding application.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=suq=trace` - Show trace for suq crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,suq=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
