//! # suq-core: Pure Business Logic for suq-pos
//!
//! This crate is the **heart** of suq-pos. It contains the business
//! logic shared by the web and React Native front-ends as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        suq-pos Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Front-ends (web app / React Native app)            │   │
//! │  │    Sales ──► Credit Register ──► Car Wash ──► Reports          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    suq-session                                  │   │
//! │  │    CartSession, Checkout, PosApi boundary                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ suq-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │ allocator │  │commission │  │ ethiopic  │  │   │
//! │  │   │ CartLine  │  │ cash/bank │  │   tiers   │  │ calendar  │  │   │
//! │  │   │  totals   │  │credit/part│  │  pending  │  │conversion │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO RETRIES • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        Remote action-based API (PHP backend, not here)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, PaymentMode, PaymentAllocation)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation errors with stable reason codes
//! - [`validation`] - Shared business rule validators
//! - [`cart`] - The shopping cart and its invariants
//! - [`allocator`] - Payment allocation, one function per mode
//! - [`commission`] - Car-wash commission tiers
//! - [`ethiopic`] - Gregorian → Ethiopian calendar conversion
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic and synchronous
//! 2. **No I/O**: Network, database and file access are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are santim (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use suq_core::allocator::allocate_partial;
//! use suq_core::cart::Cart;
//! use suq_core::money::Money;
//! use suq_core::types::Product;
//!
//! let product = Product {
//!     id: "p-1".into(),
//!     name: "Soap bar".into(),
//!     selling_price_santim: 2500,
//!     import_price_santim: 1800,
//!     quantity_available: 40,
//!     category: "cleaning".into(),
//!     is_active: true,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_item(&product, 4).unwrap();
//! assert_eq!(cart.total(), Money::from_santim(10000)); // Br 100.00
//!
//! // Br 60 cash + Br 40 through CBE
//! let allocation = allocate_partial(
//!     cart.total(),
//!     Money::from_santim(6000),
//!     Money::from_santim(4000),
//!     Some("CBE"),
//! )
//! .unwrap();
//! assert_eq!(allocation.paid_now(), cart.total());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocator;
pub mod cart;
pub mod commission;
pub mod error;
pub mod ethiopic;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use suq_core::Money` instead of
// `use suq_core::money::Money`

pub use cart::{Cart, CartLine};
pub use error::{CoreResult, ValidationError};
pub use ethiopic::EthiopicDate;
pub use money::Money;
pub use types::*;
