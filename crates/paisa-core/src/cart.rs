//! # Cart
//!
//! The mutable, in-progress line-item list for the bill currently being
//! built at the counter.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                │
//! │                                                                     │
//! │  Cashier Action             Operation            State Change       │
//! │  ──────────────             ─────────            ────────────       │
//! │  Type code + qty ─────────► add_line() ────────► lines.push(line)   │
//! │  Click remove ────────────► remove_line() ─────► lines.retain(..)   │
//! │  Clear bill ──────────────► clear() ───────────► lines.clear()      │
//! │  Finalize ────────────────► snapshot_lines() ──► frozen copies out  │
//! │                                                                     │
//! │  NOTE: repeat adds of the same product are SEPARATE rows.           │
//! │        The cashier may sell the same book twice at two prices.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - A line's subtotal is `unit_price × quantity`, fixed at creation
//! - A failed `add_line` leaves the cart untouched (all-or-nothing)
//! - Line ids are unique within the cart (UUID v4)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::InvoiceLine;
use crate::validation::{validate_quantity, validate_unit_price};

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the in-progress bill.
///
/// ## Price Freezing
/// `unit_price` is whatever was charged at add time - usually the catalog
/// price, but the cashier may override it. Later catalog edits never touch
/// existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Unique within the cart (UUID v4).
    pub line_id: String,

    /// Resolved product UUID (frozen).
    pub product_id: String,

    /// Product name at add time (frozen).
    pub name: String,

    /// Unit price actually charged (frozen).
    pub unit_price: Money,

    /// Quantity. Always positive.
    pub quantity: i64,
}

impl CartLine {
    /// The line subtotal, `unit_price × quantity`.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.unit_price * self.quantity
    }

    /// Freezes this line into an invoice snapshot.
    pub fn to_invoice_line(&self) -> InvoiceLine {
        InvoiceLine {
            product_id: self.product_id.clone(),
            name: self.name.clone(),
            unit_price: self.unit_price,
            quantity: self.quantity,
            subtotal: self.subtotal(),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The in-progress line-item list. Destroyed (cleared) on finalize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Resolves a product and appends a new line.
    ///
    /// ## Arguments
    /// * `catalog` - where the query is resolved
    /// * `query` - exact product code or display name
    /// * `unit_price` - the price actually charged (cashier may override the
    ///   catalog price)
    /// * `quantity` - must be a positive integer
    ///
    /// ## Errors
    /// - [`CoreError::ProductNotFound`] when no catalog product matches
    /// - [`CoreError::InvalidInput`] for a negative price or non-positive
    ///   quantity
    ///
    /// On any error the cart is unchanged. Repeat adds of the same product
    /// produce separate rows; lines are never merged.
    ///
    /// ## Returns
    /// The id of the freshly created line.
    pub fn add_line(
        &mut self,
        catalog: &Catalog,
        query: &str,
        unit_price: Money,
        quantity: i64,
    ) -> CoreResult<String> {
        let product = catalog
            .find(query.trim())
            .ok_or_else(|| CoreError::ProductNotFound(query.trim().to_string()))?;

        validate_unit_price(unit_price)?;
        validate_quantity(quantity)?;

        let line = CartLine {
            line_id: Uuid::new_v4().to_string(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price,
            quantity,
        };
        let line_id = line.line_id.clone();
        self.lines.push(line);
        Ok(line_id)
    }

    /// Removes the line with the given id. No-op (not an error) when absent.
    pub fn remove_line(&mut self, line_id: &str) {
        self.lines.retain(|l| l.line_id != line_id);
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all current line subtotals; zero for an empty cart.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Copies every line by value into invoice snapshots, in order.
    ///
    /// The copies are fully detached: mutating the cart afterwards cannot
    /// retroactively alter an invoice built from them.
    pub fn snapshot_lines(&self) -> Vec<InvoiceLine> {
        self.lines.iter().map(CartLine::to_invoice_line).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
