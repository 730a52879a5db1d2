//! # Bill Numbering
//!
//! Produces unique, monotonically increasing, date-stamped bill ids.
//!
//! ## Scheme
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Bill Id Generation                                │
//! │                                                                     │
//! │  persisted counter (plain integer string under "billNo")            │
//! │       │  absent/unreadable → seed 1225                              │
//! │       ▼                                                             │
//! │  counter + 1  ──► persist ──► "<YYYYMMDD>-<counter>"                │
//! │                                                                     │
//! │  e.g. first id ever issued: 20260828-1226                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The numeric suffix is strictly increasing across calls with no gaps and
//! no reuse, regardless of date rollovers and regardless of what later
//! happens to the invoice (deleting a bill never frees its number). The
//! counter lives independently of the ledger record, so clearing history
//! does not restart numbering.
//!
//! Two concurrent processes can race read-increment-persist and mint the
//! same id; single-writer use is assumed.

use chrono::{DateTime, Utc};
use paisa_core::BILL_COUNTER_SEED;
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::kv::{keys, KvStore};

/// Issues the next bill id, date-stamped with the current moment.
pub fn next_bill_id(kv: &mut dyn KvStore) -> StoreResult<String> {
    next_bill_id_at(kv, Utc::now())
}

/// Issues the next bill id with an explicit timestamp.
///
/// The date prefix reflects the moment of generation, not the invoice's
/// later-displayed date. Split out from [`next_bill_id`] so date rollover
/// is testable.
pub fn next_bill_id_at(kv: &mut dyn KvStore, now: DateTime<Utc>) -> StoreResult<String> {
    let next = read_counter(kv)? + 1;
    kv.set(keys::BILL_NO, next.to_string().as_bytes())?;

    let id = format!("{}-{}", now.format("%Y%m%d"), next);
    debug!(bill_id = %id, "issued bill id");
    Ok(id)
}

/// Reads the persisted counter; absent or unreadable values fall back to
/// the seed (matching the long-running installation this replaces).
fn read_counter(kv: &dyn KvStore) -> StoreResult<u64> {
    let Some(bytes) = kv.get(keys::BILL_NO)? else {
        return Ok(BILL_COUNTER_SEED);
    };

    match std::str::from_utf8(&bytes).ok().and_then(|s| s.trim().parse().ok()) {
        Some(n) => Ok(n),
        None => {
            warn!(
                seed = BILL_COUNTER_SEED,
                "bill counter unreadable, reseeding; ids issued before the \
                 corruption may be minted again"
            );
            Ok(BILL_COUNTER_SEED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_first_id_uses_seed_plus_one() {
        let mut kv = MemoryKv::new();
        let id = next_bill_id_at(&mut kv, day(2026, 8, 28)).unwrap();
        assert_eq!(id, "20260828-1226");
    }

    #[test]
    fn test_suffixes_strictly_increase_with_no_gaps() {
        let mut kv = MemoryKv::new();
        let suffixes: Vec<u64> = (0..5)
            .map(|_| {
                let id = next_bill_id_at(&mut kv, day(2026, 8, 28)).unwrap();
                id.rsplit('-').next().unwrap().parse().unwrap()
            })
            .collect();

        assert_eq!(suffixes, vec![1226, 1227, 1228, 1229, 1230]);
    }

    #[test]
    fn test_counter_survives_date_rollover() {
        let mut kv = MemoryKv::new();

        let a = next_bill_id_at(&mut kv, day(2026, 12, 31)).unwrap();
        let b = next_bill_id_at(&mut kv, day(2027, 1, 1)).unwrap();

        assert_eq!(a, "20261231-1226");
        assert_eq!(b, "20270101-1227");
    }

    #[test]
    fn test_unreadable_counter_reseeds() {
        let mut kv = MemoryKv::new();
        kv.set(keys::BILL_NO, b"not a number").unwrap();

        let id = next_bill_id_at(&mut kv, day(2026, 8, 28)).unwrap();
        assert_eq!(id, "20260828-1226");
    }

    #[test]
    fn test_counter_is_persisted_as_plain_integer_string() {
        let mut kv = MemoryKv::new();
        next_bill_id_at(&mut kv, day(2026, 8, 28)).unwrap();

        assert_eq!(kv.get(keys::BILL_NO).unwrap().unwrap(), b"1226");
    }
}
