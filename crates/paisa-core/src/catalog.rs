//! # Catalog
//!
//! The set of purchasable products (code, display name, unit price).
//!
//! Populated two ways:
//! - **Bulk import**: a CSV stock export replaces the whole catalog.
//! - **Manual add**: a single product is appended.
//!
//! There is no update-in-place: corrections are delete + re-add. The catalog
//! is only a lookup table for building cart lines; historical invoices carry
//! their own frozen copies of product data, so changing or clearing the
//! catalog never alters reporting on past sales.

use serde::{Deserialize, Serialize};

use crate::csv::split_record;
use crate::money::Money;
use crate::types::Product;

// =============================================================================
// CSV Column Layout
// =============================================================================
// The stock export this importer accepts is positional: a header row, then
// one product per row with the business code in the first column, the display
// name in the second, and the price in the fifth. In-between columns are
// ignored.

const CODE_COL: usize = 0;
const NAME_COL: usize = 1;
const PRICE_COL: usize = 4;
const MIN_COLS: usize = 5;

// =============================================================================
// Catalog
// =============================================================================

/// The in-memory product catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog { products: Vec::new() }
    }

    /// Creates a catalog from an existing product list (e.g. loaded from
    /// storage).
    pub fn from_products(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Resolves a typed query by exact match against product code or name.
    /// Returns the first match in catalog order.
    pub fn find(&self, query: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.matches(query))
    }

    /// Appends a manually entered product.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes a product by id. No-op when absent.
    pub fn remove(&mut self, product_id: &str) {
        self.products.retain(|p| p.id != product_id);
    }

    /// Replaces the whole catalog (bulk-import semantics).
    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Parses a CSV stock export into a product list.
    ///
    /// ## Rules
    /// - The first row is a header and is always skipped; blank rows are
    ///   skipped too
    /// - Rows with fewer than five columns are skipped
    /// - A row whose name column is empty is skipped entirely
    /// - The price column is stripped of every character except digits and
    ///   `.` before parsing; a missing or empty price yields a zero price
    /// - Rows are NOT deduplicated, neither against each other nor against
    ///   an existing catalog - the import replaces wholesale
    ///
    /// ## Example
    /// ```rust
    /// use paisa_core::catalog::Catalog;
    ///
    /// let csv = "Code,Name,Shelf,Stock,Price\n\"B1\",\"Widget\",,,\"₹12.50\"\n";
    /// let products = Catalog::parse_csv(csv);
    /// assert_eq!(products.len(), 1);
    /// assert_eq!(products[0].price.paise(), 1250);
    /// ```
    pub fn parse_csv(text: &str) -> Vec<Product> {
        let mut products = Vec::new();

        for (index, line) in text.lines().enumerate() {
            if index == 0 || line.trim().is_empty() {
                continue;
            }

            let cols = split_record(line);
            if cols.len() < MIN_COLS {
                continue;
            }

            let code = cols[CODE_COL].trim();
            let name = cols[NAME_COL].trim();
            if name.is_empty() {
                continue;
            }

            // Unparseable prices degrade to zero rather than rejecting the
            // whole import; the row is still visible and can be re-added.
            let price = Money::parse_price(&cols[PRICE_COL]).unwrap_or_else(|_| Money::zero());

            products.push(Product::new(code, name, price));
        }

        products
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Code,Name,Author,Shelf,Price\n";

    #[test]
    fn test_parse_csv_basic_row() {
        let csv = format!("{}\"B1\",\"Widget\",,,\"₹12.50\"\n", HEADER);
        let products = Catalog::parse_csv(&csv);

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].code, "B1");
        assert_eq!(products[0].name, "Widget");
        assert_eq!(products[0].price, Money::from_paise(1250));
    }

    #[test]
    fn test_parse_csv_skips_header_and_blank_lines() {
        let csv = format!("{}\n\"B1\",\"Widget\",,,\"10\"\n\n", HEADER);
        assert_eq!(Catalog::parse_csv(&csv).len(), 1);
    }

    #[test]
    fn test_parse_csv_skips_rows_without_a_name() {
        let csv = format!("{}\"B1\",\"\",,,\"10\"\n\"B2\",\"Kept\",,,\"10\"\n", HEADER);
        let products = Catalog::parse_csv(&csv);

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Kept");
    }

    #[test]
    fn test_parse_csv_skips_short_rows() {
        let csv = format!("{}\"B1\",\"Widget\"\n", HEADER);
        assert!(Catalog::parse_csv(&csv).is_empty());
    }

    #[test]
    fn test_parse_csv_empty_price_becomes_zero() {
        let csv = format!("{}\"B1\",\"Widget\",,,\n", HEADER);
        let products = Catalog::parse_csv(&csv);
        assert_eq!(products[0].price, Money::zero());
    }

    #[test]
    fn test_parse_csv_does_not_deduplicate() {
        let csv = format!("{}\"B1\",\"Widget\",,,\"10\"\n\"B1\",\"Widget\",,,\"10\"\n", HEADER);
        let products = Catalog::parse_csv(&csv);

        assert_eq!(products.len(), 2);
        // Same row twice still gets distinct ids.
        assert_ne!(products[0].id, products[1].id);
    }

    #[test]
    fn test_find_matches_code_then_name() {
        let mut catalog = Catalog::new();
        catalog.add(Product::new("B1", "Widget", Money::from_paise(1000)));
        catalog.add(Product::new("B2", "Gadget", Money::from_paise(2000)));

        assert_eq!(catalog.find("B2").unwrap().name, "Gadget");
        assert_eq!(catalog.find("Widget").unwrap().code, "B1");
        assert!(catalog.find("B3").is_none());
    }

    #[test]
    fn test_replace_all_is_wholesale() {
        let mut catalog = Catalog::new();
        catalog.add(Product::new("OLD", "Old Thing", Money::zero()));

        catalog.replace_all(vec![Product::new("NEW", "New Thing", Money::zero())]);

        assert_eq!(catalog.len(), 1);
        assert!(catalog.find("OLD").is_none());
        assert!(catalog.find("NEW").is_some());
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let mut catalog = Catalog::new();
        let p = Product::new("B1", "Widget", Money::zero());
        let id = p.id.clone();
        catalog.add(p);

        catalog.remove("no-such-id");
        assert_eq!(catalog.len(), 1);

        catalog.remove(&id);
        assert!(catalog.is_empty());
    }
}
