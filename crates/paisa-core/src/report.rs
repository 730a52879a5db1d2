//! # Sales Report
//!
//! Derives per-product and total-revenue statistics from the invoice ledger.
//!
//! ## Aggregation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Sales Aggregation                               │
//! │                                                                     │
//! │  ledger: [Invoice, Invoice, ...]                                    │
//! │       │                                                             │
//! │       ▼  for every invoice                                          │
//! │  total_revenue += invoice.grand_total                               │
//! │       │                                                             │
//! │       ▼  for every line of every invoice                            │
//! │  rows[line.product_id].quantity += line.quantity                    │
//! │  rows[line.product_id].income   += line.subtotal                    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  sort rows by income, descending (stable: ties keep first-seen      │
//! │  order), then render table / CSV                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Product Identity
//! Aggregation joins on the `product_id` frozen into each line snapshot, not
//! on a live catalog lookup. A product deleted or renamed in the catalog
//! therefore still appears correctly in historical reports, under the name
//! captured when it was first sold.
//!
//! The fold is pure and deterministic: re-running it over an unchanged
//! ledger yields an identical report.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::csv::quote_field;
use crate::money::Money;
use crate::types::Invoice;

// =============================================================================
// Report Types
// =============================================================================

/// Accumulated sales for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    /// Snapshot product id (the aggregation key).
    pub product_id: String,

    /// Display name, as captured on the first line seen for this product.
    pub name: String,

    /// Total quantity sold across all invoices.
    pub quantity: i64,

    /// Total income, the sum of line subtotals.
    pub income: Money,
}

/// The full sales report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    /// Sum of every invoice's grand total.
    pub total_revenue: Money,

    /// Per-product rows, sorted by descending income; ties keep the order
    /// in which the product first appeared in the ledger.
    pub rows: Vec<ProductSales>,
}

impl SalesReport {
    /// Renders the report as CSV, identical in content to the on-screen
    /// table: `name,quantity,income` with the name double-quoted (embedded
    /// quotes doubled) and income to exactly two decimal places.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("Item Name,Total Quantity,Total Income\n");
        for row in &self.rows {
            csv.push_str(&format!(
                "{},{},{}\n",
                quote_field(&row.name),
                row.quantity,
                row.income.fixed2()
            ));
        }
        csv
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Folds the full ledger into a [`SalesReport`].
///
/// Pure function, no side effects: safe to re-run at any time, and two runs
/// over the same ledger produce identical output.
pub fn aggregate(invoices: &[Invoice]) -> SalesReport {
    let mut total_revenue = Money::zero();
    let mut rows: Vec<ProductSales> = Vec::new();
    // product_id → index into rows, so first-appearance order is preserved
    let mut index: HashMap<String, usize> = HashMap::new();

    for invoice in invoices {
        total_revenue += invoice.grand_total;

        for line in &invoice.lines {
            match index.get(&line.product_id) {
                Some(&i) => {
                    rows[i].quantity += line.quantity;
                    rows[i].income += line.subtotal;
                }
                None => {
                    index.insert(line.product_id.clone(), rows.len());
                    rows.push(ProductSales {
                        product_id: line.product_id.clone(),
                        name: line.name.clone(),
                        quantity: line.quantity,
                        income: line.subtotal,
                    });
                }
            }
        }
    }

    // Vec::sort_by is stable, so equal incomes keep first-seen order.
    rows.sort_by(|a, b| b.income.cmp(&a.income));

    SalesReport { total_revenue, rows }
}

// =============================================================================
// Unit Tests
// =============================================================================
