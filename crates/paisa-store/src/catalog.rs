//! # Catalog Persistence
//!
//! Loads and saves the product catalog as one whole-value JSON record, and
//! applies the two mutation paths: wholesale CSV import and manual append.

use paisa_core::{Catalog, Product};
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::kv::{self, keys, KvStore};

/// Loads the catalog; an absent record is an empty catalog.
pub fn load(kv: &dyn KvStore) -> StoreResult<Catalog> {
    let products: Vec<Product> = kv::get_json(kv, keys::PRODUCTS)?.unwrap_or_default();
    debug!(products = products.len(), "loaded catalog");
    Ok(Catalog::from_products(products))
}

/// Persists the catalog wholesale.
pub fn save(kv: &mut dyn KvStore, catalog: &Catalog) -> StoreResult<()> {
    kv::set_json(kv, keys::PRODUCTS, &catalog.products())
}

/// Parses a CSV stock export and replaces the catalog with it.
///
/// Returns the number of imported products. Rows are not deduplicated
/// against anything; the previous catalog is gone entirely.
pub fn import_csv(kv: &mut dyn KvStore, catalog: &mut Catalog, text: &str) -> StoreResult<usize> {
    let products = Catalog::parse_csv(text);
    catalog.replace_all(products);
    save(kv, catalog)?;
    info!(products = catalog.len(), "imported catalog from CSV");
    Ok(catalog.len())
}

/// Appends one manually entered product and persists.
pub fn add_product(kv: &mut dyn KvStore, catalog: &mut Catalog, product: Product) -> StoreResult<()> {
    debug!(code = %product.code, name = %product.name, "adding product");
    catalog.add(product);
    save(kv, catalog)
}

/// Removes a product by id and persists. No-op removal still rewrites the
/// record.
pub fn remove_product(kv: &mut dyn KvStore, catalog: &mut Catalog, product_id: &str) -> StoreResult<()> {
    catalog.remove(product_id);
    save(kv, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;
    use paisa_core::Money;

    #[test]
    fn test_load_absent_is_empty() {
        let kv = MemoryKv::new();
        assert!(load(&kv).unwrap().is_empty());
    }

    #[test]
    fn test_add_and_reload() {
        let mut kv = MemoryKv::new();
        let mut catalog = load(&kv).unwrap();

        add_product(
            &mut kv,
            &mut catalog,
            Product::new("B1", "Widget", Money::from_paise(1250)),
        )
        .unwrap();

        let reloaded = load(&kv).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.find("B1").unwrap().price, Money::from_paise(1250));
    }

    #[test]
    fn test_import_replaces_previous_catalog() {
        let mut kv = MemoryKv::new();
        let mut catalog = Catalog::new();
        add_product(&mut kv, &mut catalog, Product::new("OLD", "Old", Money::zero())).unwrap();

        let csv = "Code,Name,Author,Shelf,Price\n\"B1\",\"Widget\",,,\"₹12.50\"\n";
        let count = import_csv(&mut kv, &mut catalog, csv).unwrap();

        assert_eq!(count, 1);
        assert!(load(&kv).unwrap().find("OLD").is_none());
        assert!(load(&kv).unwrap().find("B1").is_some());
    }
}
