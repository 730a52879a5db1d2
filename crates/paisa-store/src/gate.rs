//! # Access Gate
//!
//! A single shared-secret check gating *read* access to the billing history
//! and the sales report. It does not protect writes to the cart or catalog.
//!
//! One boolean, process-lifetime, in-memory: unlocking is permanent until
//! the process exits and is never persisted. There is no session expiry,
//! lockout, or rate limiting. The same flag gates both views.

use paisa_core::CoreError;
use tracing::{info, warn};

use crate::error::StoreResult;
use crate::kv::KvStore;
use crate::profile;

/// The history/report access gate.
#[derive(Debug, Default)]
pub struct AccessGate {
    unlocked: bool,
}

impl AccessGate {
    /// Creates a locked gate.
    pub fn new() -> Self {
        AccessGate::default()
    }

    /// Whether the gate has been unlocked this process lifetime.
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Compares `input` against the persisted shared secret with exact
    /// equality.
    ///
    /// On match the gate unlocks and stays unlocked. On mismatch - or when
    /// no secret has been configured yet - the state is left unchanged and
    /// [`CoreError::AuthFailed`] is returned.
    pub fn attempt(&mut self, kv: &dyn KvStore, input: &str) -> StoreResult<()> {
        match profile::load_secret(kv)? {
            Some(secret) if secret == input => {
                self.unlocked = true;
                info!("history/report views unlocked");
                Ok(())
            }
            _ => {
                warn!("failed unlock attempt");
                Err(CoreError::AuthFailed.into())
            }
        }
    }
}
