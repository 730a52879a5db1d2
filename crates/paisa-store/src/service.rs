//! # Billing Service
//!
//! The single owning application context: catalog, cart, gate, and the
//! storage handle live here, and every operation the UI needs is a method.
//! Nothing in the system is global mutable state.
//!
//! ## Operation Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      BillingService                                 │
//! │                                                                     │
//! │  Setup        setup(), profile(), is_set_up()                       │
//! │  Catalog      import_catalog_csv(), add_product(), remove_product() │
//! │  Cart         add_cart_line(), remove_cart_line(), clear_cart()     │
//! │  Billing      checkout()  ← finalize + clear cart                   │
//! │  History  🔒  invoices(), delete_invoice(), clear_history()         │
//! │  Report   🔒  sales_report(), export_report_csv()                   │
//! │  Gate         unlock(), is_unlocked()                               │
//! │  Admin        reset_all()                                           │
//! │                                                                     │
//! │  🔒 = requires the gate to be unlocked (read access to the ledger   │
//! │       and aggregator views; cart/catalog writes are never gated)    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Destructive operations (`delete_invoice`, `clear_history`, `reset_all`)
//! are irreversible; asking the user "are you sure?" is the UI's job.

use paisa_core::{
    report, BusinessProfile, Cart, Catalog, CoreError, Invoice, Money, PaymentMode, Product,
    SalesReport,
};
use tracing::info;

use crate::error::StoreResult;
use crate::gate::AccessGate;
use crate::kv::{keys, KvStore};
use crate::{catalog, ledger, profile};

/// The owning service struct for one billing session.
#[derive(Debug)]
pub struct BillingService<K: KvStore> {
    kv: K,
    catalog: Catalog,
    cart: Cart,
    gate: AccessGate,
}

impl<K: KvStore> BillingService<K> {
    /// Opens a session over the given store, loading the catalog.
    pub fn open(kv: K) -> StoreResult<Self> {
        let catalog = catalog::load(&kv)?;
        Ok(BillingService {
            kv,
            catalog,
            cart: Cart::new(),
            gate: AccessGate::new(),
        })
    }

    // =========================================================================
    // Setup
    // =========================================================================

    /// Persists the business profile and the shared secret.
    pub fn setup(&mut self, profile: BusinessProfile, secret: &str) -> StoreResult<()> {
        profile::save_profile(&mut self.kv, &profile)?;
        profile::save_secret(&mut self.kv, secret)
    }

    /// The persisted business profile, if setup has run.
    pub fn profile(&self) -> StoreResult<Option<BusinessProfile>> {
        profile::load_profile(&self.kv)
    }

    pub fn is_set_up(&self) -> StoreResult<bool> {
        Ok(self.profile()?.is_some())
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replaces the catalog wholesale from a CSV stock export; returns the
    /// number of imported products.
    pub fn import_catalog_csv(&mut self, text: &str) -> StoreResult<usize> {
        catalog::import_csv(&mut self.kv, &mut self.catalog, text)
    }

    /// Appends one manually entered product.
    pub fn add_product(&mut self, code: &str, name: &str, price: Money) -> StoreResult<()> {
        paisa_core::validation::validate_unit_price(price)?;
        if name.trim().is_empty() {
            return Err(CoreError::invalid_input("name", "must not be empty").into());
        }
        catalog::add_product(
            &mut self.kv,
            &mut self.catalog,
            Product::new(code.trim(), name.trim(), price),
        )
    }

    /// Removes a product by id (corrections are delete + re-add).
    pub fn remove_product(&mut self, product_id: &str) -> StoreResult<()> {
        catalog::remove_product(&mut self.kv, &mut self.catalog, product_id)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds a line to the in-progress bill. Returns the new line id.
    pub fn add_cart_line(
        &mut self,
        query: &str,
        unit_price: Money,
        quantity: i64,
    ) -> StoreResult<String> {
        Ok(self.cart.add_line(&self.catalog, query, unit_price, quantity)?)
    }

    pub fn remove_cart_line(&mut self, line_id: &str) {
        self.cart.remove_line(line_id);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    // =========================================================================
    // Billing
    // =========================================================================

    /// Finalizes the current cart into an invoice, persists it, and clears
    /// the cart. After a successful checkout the cart is always empty.
    pub fn checkout(
        &mut self,
        customer_name: &str,
        customer_phone: &str,
        payment_mode: PaymentMode,
    ) -> StoreResult<Invoice> {
        let invoice = ledger::finalize(
            &mut self.kv,
            &self.cart,
            customer_name,
            customer_phone,
            payment_mode,
        )?;
        self.cart.clear();
        Ok(invoice)
    }

    // =========================================================================
    // Gate
    // =========================================================================

    /// Attempts to unlock the history/report views.
    pub fn unlock(&mut self, secret: &str) -> StoreResult<()> {
        self.gate.attempt(&self.kv, secret)
    }

    pub fn is_unlocked(&self) -> bool {
        self.gate.is_unlocked()
    }

    fn require_unlocked(&self) -> StoreResult<()> {
        if self.gate.is_unlocked() {
            Ok(())
        } else {
            Err(CoreError::AuthFailed.into())
        }
    }

    // =========================================================================
    // History & Report (gated reads)
    // =========================================================================

    /// All invoices, most recent first.
    pub fn invoices(&self) -> StoreResult<Vec<Invoice>> {
        self.require_unlocked()?;
        ledger::list(&self.kv)
    }

    /// Deletes one invoice by bill id; no-op when absent. The bill number is
    /// never reissued.
    pub fn delete_invoice(&mut self, bill_id: &str) -> StoreResult<()> {
        self.require_unlocked()?;
        ledger::delete_by_id(&mut self.kv, bill_id)
    }

    /// Empties the billing history irreversibly. Numbering continues.
    pub fn clear_history(&mut self) -> StoreResult<()> {
        self.require_unlocked()?;
        ledger::clear(&mut self.kv)
    }

    /// Aggregates the full ledger into the sales report.
    pub fn sales_report(&self) -> StoreResult<SalesReport> {
        self.require_unlocked()?;
        Ok(report::aggregate(&ledger::load(&self.kv)?))
    }

    /// The sales report rendered as CSV, identical in content to the
    /// on-screen table.
    pub fn export_report_csv(&self) -> StoreResult<String> {
        Ok(self.sales_report()?.to_csv())
    }

    // =========================================================================
    // Admin
    // =========================================================================

    /// Removes every persisted record and resets all in-memory state: the
    /// explicit administrative wipe (profile, secret, catalog, history, and
    /// the bill counter).
    pub fn reset_all(&mut self) -> StoreResult<()> {
        for key in keys::ALL {
            self.kv.remove(key)?;
        }
        self.catalog = Catalog::new();
        self.cart = Cart::new();
        self.gate = AccessGate::new();
        info!("reset: all persisted data removed");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
