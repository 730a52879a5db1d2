//! # Business Profile & Shared Secret
//!
//! The one-time setup records: the outlet's business profile and the shared
//! secret gating the history/report views. The secret is stored as plain
//! text by design - anything stronger than plaintext equality is an explicit
//! non-goal for this tool.

use paisa_core::BusinessProfile;
use tracing::info;

use crate::error::StoreResult;
use crate::kv::{self, keys, KvStore};

/// Loads the business profile; `None` until setup has run.
pub fn load_profile(kv: &dyn KvStore) -> StoreResult<Option<BusinessProfile>> {
    kv::get_json(kv, keys::BUSINESS)
}

/// Persists the business profile.
pub fn save_profile(kv: &mut dyn KvStore, profile: &BusinessProfile) -> StoreResult<()> {
    kv::set_json(kv, keys::BUSINESS, profile)?;
    info!(business = %profile.business_name, "saved business profile");
    Ok(())
}

/// Loads the shared secret; `None` until setup has run.
pub fn load_secret(kv: &dyn KvStore) -> StoreResult<Option<String>> {
    kv::get_json(kv, keys::SECRET)
}

/// Persists the shared secret.
pub fn save_secret(kv: &mut dyn KvStore, secret: &str) -> StoreResult<()> {
    kv::set_json(kv, keys::SECRET, &secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;

    #[test]
    fn test_profile_roundtrip() {
        let mut kv = MemoryKv::new();
        assert!(load_profile(&kv).unwrap().is_none());

        let profile = BusinessProfile {
            business_name: "Sthirpara Unit".to_string(),
        };
        save_profile(&mut kv, &profile).unwrap();

        assert_eq!(load_profile(&kv).unwrap(), Some(profile));
    }

    #[test]
    fn test_secret_roundtrip() {
        let mut kv = MemoryKv::new();
        assert!(load_secret(&kv).unwrap().is_none());

        save_secret(&mut kv, "1234").unwrap();
        assert_eq!(load_secret(&kv).unwrap().as_deref(), Some("1234"));
    }
}
