//! # Domain Types
//!
//! Core domain types used throughout Paisa POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Product     │   │    Invoice     │   │  InvoiceLine   │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (UUID)     │   │  bill_id       │   │  product_id    │      │
//! │  │  code (lookup) │   │  date          │   │  name (frozen) │      │
//! │  │  name          │   │  payment_mode  │   │  unit_price    │      │
//! │  │  price         │   │  lines         │   │  quantity      │      │
//! │  └────────────────┘   │  grand_total   │   │  subtotal      │      │
//! │                       └────────────────┘   └────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! A product has:
//! - `id`: UUID v4 - immutable, the aggregation join key
//! - `code`: business identifier (imported catalog/book number) - the key a
//!   cashier types, potentially mutable across imports
//!
//! ## Snapshot Pattern
//! An `InvoiceLine` is a frozen by-value copy of a cart line. Once an Invoice
//! is in the ledger, deleting or renaming the catalog product changes nothing
//! in history: lines are self-contained values, not foreign-key references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Business lookup code (e.g. the catalog/book number from a bulk
    /// import). May be empty for manually added products.
    pub code: String,

    /// Display name shown to the cashier and on the bill.
    pub name: String,

    /// Unit price. Non-negative; zero is allowed (free/giveaway items).
    pub price: Money,
}

impl Product {
    /// Creates a product with a freshly generated UUID.
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: uuid::Uuid::new_v4().to_string(),
            code: code.into(),
            name: name.into(),
            price,
        }
    }

    /// Checks whether a typed query resolves to this product.
    ///
    /// Matching is exact (no prefix or fuzzy search) against the business
    /// code or the display name.
    pub fn matches(&self, query: &str) -> bool {
        (!self.code.is_empty() && self.code == query) || self.name == query
    }
}

// =============================================================================
// Payment Mode
// =============================================================================

/// How the customer paid. Stored on the invoice for history display and
/// never interpreted beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    Cash,
    #[serde(rename = "UPI")]
    Upi,
}

impl Default for PaymentMode {
    fn default() -> Self {
        PaymentMode::Cash
    }
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMode::Cash => write!(f, "Cash"),
            PaymentMode::Upi => write!(f, "UPI"),
        }
    }
}

// =============================================================================
// Invoice Line
// =============================================================================

/// A line item on a finalized invoice.
/// Uses the snapshot pattern to freeze product data at billing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    /// Product UUID at time of sale (frozen). Aggregation join key.
    pub product_id: String,

    /// Product name at time of sale (frozen). Display key.
    pub name: String,

    /// Unit price actually charged (frozen; may differ from the catalog
    /// price when the cashier overrides it).
    pub unit_price: Money,

    /// Quantity sold. Always positive.
    pub quantity: i64,

    /// Line subtotal, computed as `unit_price × quantity` when the line was
    /// created and never independently mutated.
    pub subtotal: Money,
}

// =============================================================================
// Invoice
// =============================================================================

/// A finalized, immutable billing record.
///
/// An Invoice is a value: it is constructed complete by the ledger's
/// finalize operation and never mutated afterwards. The only ledger
/// operations are append, delete-by-id, and clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Unique bill identifier, `<YYYYMMDD>-<counter>`.
    pub bill_id: String,

    /// Moment of finalization.
    pub date: DateTime<Utc>,

    /// Customer name; [`crate::WALK_IN_CUSTOMER`] when none was given.
    pub customer_name: String,

    /// Optional customer phone number, kept verbatim.
    pub customer_phone: Option<String>,

    /// Payment mode chosen at the counter.
    pub payment_mode: PaymentMode,

    /// Ordered line snapshots, copied by value from the cart.
    pub lines: Vec<InvoiceLine>,

    /// Sum of line subtotals, recomputed at finalize time.
    pub grand_total: Money,
}

// =============================================================================
// Business Profile
// =============================================================================

/// The one-time setup record for the outlet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    /// Outlet name printed on bills and shown in the header.
    pub business_name: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_matches_code_or_name_exactly() {
        let p = Product::new("B1", "Widget", Money::from_paise(1250));

        assert!(p.matches("B1"));
        assert!(p.matches("Widget"));
        assert!(!p.matches("B"));
        assert!(!p.matches("widget"));
        assert!(!p.matches(""));
    }

    #[test]
    fn test_product_with_empty_code_only_matches_name() {
        let p = Product::new("", "Loose Candle", Money::from_paise(500));

        assert!(p.matches("Loose Candle"));
        assert!(!p.matches(""));
    }

    #[test]
    fn test_payment_mode_serialization() {
        assert_eq!(serde_json::to_string(&PaymentMode::Cash).unwrap(), "\"Cash\"");
        assert_eq!(serde_json::to_string(&PaymentMode::Upi).unwrap(), "\"UPI\"");
        assert_eq!(PaymentMode::default(), PaymentMode::Cash);
    }

    #[test]
    fn test_invoice_round_trips_through_json() {
        let invoice = Invoice {
            bill_id: "20260828-1226".to_string(),
            date: Utc::now(),
            customer_name: "Walk-in".to_string(),
            customer_phone: None,
            payment_mode: PaymentMode::Upi,
            lines: vec![InvoiceLine {
                product_id: "p-1".to_string(),
                name: "Pen".to_string(),
                unit_price: Money::from_paise(1000),
                quantity: 3,
                subtotal: Money::from_paise(3000),
            }],
            grand_total: Money::from_paise(3000),
        };

        let json = serde_json::to_string(&invoice).unwrap();
        let back: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, invoice);
    }
}
