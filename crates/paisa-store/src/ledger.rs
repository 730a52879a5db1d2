//! # Invoice Ledger
//!
//! Append-only (with explicit delete/clear) store of finalized invoices;
//! the durable source of truth for reporting.
//!
//! ## Finalize Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Finalize a Bill                                │
//! │                                                                     │
//! │  1. Reject an empty cart (EmptyCart)                                │
//! │  2. Obtain the next bill id (numbering, counter persisted first)    │
//! │  3. Snapshot the cart's lines BY VALUE                              │
//! │  4. Recompute grand total from the snapshots                        │
//! │  5. Stamp the current time                                          │
//! │  6. Append to the ledger record and persist                         │
//! │                                                                     │
//! │  The ledger does NOT clear the cart - that belongs to the caller    │
//! │  (BillingService::checkout does it right after this returns).       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! If persisting the ledger fails after the counter advanced, the number is
//! simply never reused - the same rule as deleting a bill.

use chrono::{DateTime, Utc};
use paisa_core::{Cart, CoreError, Invoice, PaymentMode, WALK_IN_CUSTOMER};
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::kv::{self, keys, KvStore};
use crate::numbering;

/// Loads all invoices in insertion (chronological) order.
pub fn load(kv: &dyn KvStore) -> StoreResult<Vec<Invoice>> {
    Ok(kv::get_json(kv, keys::HISTORY)?.unwrap_or_default())
}

/// Returns all invoices most-recently-finalized first, for display.
/// The underlying storage order stays insertion order.
pub fn list(kv: &dyn KvStore) -> StoreResult<Vec<Invoice>> {
    let mut invoices = load(kv)?;
    invoices.reverse();
    Ok(invoices)
}

/// Finalizes the cart into a new immutable invoice and appends it.
///
/// ## Errors
/// [`CoreError::EmptyCart`] when the cart has zero lines; storage errors
/// from the counter or ledger writes.
///
/// ## Arguments
/// * `customer_name` - blank defaults to the walk-in sentinel
/// * `customer_phone` - blank becomes `None`
pub fn finalize(
    kv: &mut dyn KvStore,
    cart: &Cart,
    customer_name: &str,
    customer_phone: &str,
    payment_mode: PaymentMode,
) -> StoreResult<Invoice> {
    finalize_at(kv, cart, customer_name, customer_phone, payment_mode, Utc::now())
}

/// [`finalize`] with an explicit timestamp, for tests.
pub fn finalize_at(
    kv: &mut dyn KvStore,
    cart: &Cart,
    customer_name: &str,
    customer_phone: &str,
    payment_mode: PaymentMode,
    now: DateTime<Utc>,
) -> StoreResult<Invoice> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }

    let bill_id = numbering::next_bill_id_at(kv, now)?;
    let lines = cart.snapshot_lines();
    let grand_total = lines.iter().map(|l| l.subtotal).sum();

    let customer_name = customer_name.trim();
    let customer_phone = customer_phone.trim();

    let invoice = Invoice {
        bill_id,
        date: now,
        customer_name: if customer_name.is_empty() {
            WALK_IN_CUSTOMER.to_string()
        } else {
            customer_name.to_string()
        },
        customer_phone: if customer_phone.is_empty() {
            None
        } else {
            Some(customer_phone.to_string())
        },
        payment_mode,
        lines,
        grand_total,
    };

    let mut history = load(kv)?;
    history.push(invoice.clone());
    kv::set_json(kv, keys::HISTORY, &history)?;

    info!(
        bill_id = %invoice.bill_id,
        lines = invoice.lines.len(),
        grand_total = %invoice.grand_total,
        "finalized bill"
    );
    Ok(invoice)
}

/// Removes the invoice with the given bill id. No-op when absent.
///
/// Destructive and irreversible; obtaining user confirmation first is the
/// caller's concern.
pub fn delete_by_id(kv: &mut dyn KvStore, bill_id: &str) -> StoreResult<()> {
    let mut history = load(kv)?;
    let before = history.len();
    history.retain(|b| b.bill_id != bill_id);

    if history.len() == before {
        debug!(bill_id, "delete: no such bill");
        return Ok(());
    }

    kv::set_json(kv, keys::HISTORY, &history)?;
    info!(bill_id, "deleted bill");
    Ok(())
}

/// Empties the ledger irreversibly. The bill counter is untouched.
pub fn clear(kv: &mut dyn KvStore) -> StoreResult<()> {
    kv::set_json(kv, keys::HISTORY, &Vec::<Invoice>::new())?;
    info!("cleared billing history");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;
    use chrono::TimeZone;
    use paisa_core::{Catalog, Money, Product};

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, d, 10, 0, 0).unwrap()
    }

    fn catalog() -> Catalog {
        let mut c = Catalog::new();
        c.add(Product::new("B1", "Pen", Money::from_paise(1000)));
        c.add(Product::new("B2", "Book", Money::from_paise(5000)));
        c
    }

    fn full_cart() -> Cart {
        let c = catalog();
        let mut cart = Cart::new();
        cart.add_line(&c, "Pen", Money::from_paise(1000), 3).unwrap();
        cart.add_line(&c, "Book", Money::from_paise(5000), 1).unwrap();
        cart
    }

    #[test]
    fn test_finalize_empty_cart_is_rejected() {
        let mut kv = MemoryKv::new();
        let err = finalize(&mut kv, &Cart::new(), "", "", PaymentMode::Cash).unwrap_err();

        assert!(matches!(err, crate::StoreError::Core(CoreError::EmptyCart)));
        // nothing was persisted, the counter did not advance
        assert!(kv.get(keys::HISTORY).unwrap().is_none());
        assert!(kv.get(keys::BILL_NO).unwrap().is_none());
    }

    #[test]
    fn test_finalize_grand_total_matches_cart() {
        let mut kv = MemoryKv::new();
        let cart = full_cart();

        let invoice =
            finalize_at(&mut kv, &cart, "", "", PaymentMode::Cash, day(28)).unwrap();

        assert_eq!(invoice.bill_id, "20260828-1226");
        assert_eq!(invoice.grand_total, cart.total());
        assert_eq!(invoice.grand_total.fixed2(), "80.00");
        assert_eq!(invoice.customer_name, WALK_IN_CUSTOMER);
        assert_eq!(invoice.customer_phone, None);
    }

    #[test]
    fn test_finalize_snapshots_are_immune_to_cart_mutation() {
        let mut kv = MemoryKv::new();
        let mut cart = full_cart();

        let invoice = finalize(&mut kv, &cart, "A. Sen", "99999", PaymentMode::Upi).unwrap();
        cart.clear();

        let stored = load(&kv).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], invoice);
        assert_eq!(stored[0].lines.len(), 2);
        assert_eq!(stored[0].customer_name, "A. Sen");
        assert_eq!(stored[0].customer_phone.as_deref(), Some("99999"));
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let mut kv = MemoryKv::new();
        let invoice = finalize(&mut kv, &full_cart(), "R. Bose", "", PaymentMode::Cash).unwrap();

        let listed = list(&kv).unwrap();
        assert_eq!(listed, vec![invoice]);
    }

    #[test]
    fn test_list_is_reverse_insertion_order() {
        let mut kv = MemoryKv::new();
        let first = finalize(&mut kv, &full_cart(), "", "", PaymentMode::Cash).unwrap();
        let second = finalize(&mut kv, &full_cart(), "", "", PaymentMode::Cash).unwrap();

        // storage keeps insertion order, display reverses it
        let stored = load(&kv).unwrap();
        assert_eq!(stored[0].bill_id, first.bill_id);

        let listed = list(&kv).unwrap();
        assert_eq!(listed[0].bill_id, second.bill_id);
        assert_eq!(listed[1].bill_id, first.bill_id);
    }

    #[test]
    fn test_bill_ids_are_unique_across_finalizes() {
        let mut kv = MemoryKv::new();
        let a = finalize(&mut kv, &full_cart(), "", "", PaymentMode::Cash).unwrap();
        let b = finalize(&mut kv, &full_cart(), "", "", PaymentMode::Cash).unwrap();

        assert_ne!(a.bill_id, b.bill_id);
    }

    #[test]
    fn test_delete_by_id_then_missing_is_noop() {
        let mut kv = MemoryKv::new();
        let a = finalize(&mut kv, &full_cart(), "", "", PaymentMode::Cash).unwrap();
        let b = finalize(&mut kv, &full_cart(), "", "", PaymentMode::Cash).unwrap();

        delete_by_id(&mut kv, &a.bill_id).unwrap();
        assert!(list(&kv).unwrap().iter().all(|i| i.bill_id != a.bill_id));

        // deleting again is a no-op, not an error
        delete_by_id(&mut kv, &a.bill_id).unwrap();
        assert_eq!(list(&kv).unwrap(), vec![b]);
    }

    #[test]
    fn test_clear_keeps_the_counter() {
        let mut kv = MemoryKv::new();
        finalize_at(&mut kv, &full_cart(), "", "", PaymentMode::Cash, day(28)).unwrap();

        clear(&mut kv).unwrap();
        assert!(load(&kv).unwrap().is_empty());

        // numbering continues where it left off
        let next = finalize_at(&mut kv, &full_cart(), "", "", PaymentMode::Cash, day(29)).unwrap();
        assert_eq!(next.bill_id, "20260829-1227");
    }
}
