//! # paisa-core: Pure Business Logic for Paisa POS
//!
//! This crate is the **heart** of Paisa POS: the billing aggregation and
//! reporting engine for a small retail/charity counter. It contains all
//! business rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Paisa POS Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │              UI layer (external collaborator)                 │ │
//! │  │   bill form ──► history table ──► report table ──► print     │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                   │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │           paisa-store (BillingService + ledger)               │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                   │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │               ★ paisa-core (THIS CRATE) ★                     │ │
//! │  │                                                               │ │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌────────┐ │ │
//! │  │  │  money  │ │  types  │ │  cart   │ │ catalog │ │ report │ │ │
//! │  │  │  Money  │ │ Invoice │ │  Cart   │ │ Catalog │ │ fold + │ │ │
//! │  │  │  paise  │ │ Product │ │CartLine │ │CSV parse│ │  CSV   │ │ │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └────────┘ │ │
//! │  │                                                               │ │
//! │  │  NO I/O • NO STORAGE • NO CLOCK • PURE FUNCTIONS             │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Invoice, InvoiceLine, PaymentMode)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The mutable in-progress line-item list
//! - [`catalog`] - Purchasable products and CSV bulk import
//! - [`report`] - Sales aggregation fold and CSV export
//! - [`csv`] - Minimal CSV split/quote helpers
//! - [`validation`] - Input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: aggregation is a deterministic, re-runnable fold
//! 2. **Integer Money**: all monetary values are paise (i64), never floats
//! 3. **Snapshots, not references**: invoice lines are frozen copies, so
//!    later catalog or cart mutation can never rewrite history
//! 4. **Explicit Errors**: all errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod csv;
pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use report::{ProductSales, SalesReport};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sentinel customer name for bills with no customer details.
///
/// Walk-in sales are the common case at the counter; the invoice still needs
/// a non-empty customer field for display and history search.
pub const WALK_IN_CUSTOMER: &str = "Walk-in";

/// Seed for the persisted bill counter.
///
/// The counter is incremented *before* use, so the first bill ever issued
/// carries the number 1226. Carried over from the running installation so
/// historical bill numbers stay unique.
pub const BILL_COUNTER_SEED: u64 = 1225;

/// Maximum quantity on a single cart line.
///
/// ## Business Reason
/// Nothing at the counter sells ten thousand units on one line; a larger
/// number is a mis-key. The cap also keeps `unit_price × quantity` far from
/// i64 overflow, so line subtotals can never wrap.
pub const MAX_LINE_QUANTITY: i64 = 9_999;
