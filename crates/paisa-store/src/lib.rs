//! # paisa-store: Persistence Layer for Paisa POS
//!
//! This crate provides durable storage for the billing engine: a small set
//! of independently keyed, whole-value JSON records behind a key-value
//! abstraction, plus the [`BillingService`] orchestration struct that owns
//! all process-wide state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Paisa POS Data Flow                           │
//! │                                                                     │
//! │  UI action (add line, finalize, view report)                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  paisa-store (THIS CRATE)                     │ │
//! │  │                                                               │ │
//! │  │  ┌──────────────┐   ┌──────────────────┐   ┌──────────────┐  │ │
//! │  │  │ BillingService│  │   repositories   │   │   KvStore    │  │ │
//! │  │  │ (service.rs) │   │ catalog, ledger, │   │  (kv.rs)     │  │ │
//! │  │  │              │──►│ numbering,       │──►│ MemoryKv     │  │ │
//! │  │  │ cart + gate  │   │ profile          │   │ FileKv       │  │ │
//! │  │  └──────────────┘   └──────────────────┘   └──────────────┘  │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  one file per key: billing_app_products, billing_app_history, ...   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - Storage abstraction and backends
//! - [`error`] - Persistence error types
//! - [`catalog`] - Catalog persistence and bulk import
//! - [`numbering`] - Monotonic date-stamped bill ids
//! - [`ledger`] - Append-only invoice ledger
//! - [`profile`] - Business profile and shared secret
//! - [`gate`] - Access gate for history/report views
//! - [`service`] - The owning [`BillingService`] application context
//!
//! ## Concurrency Model
//! Single-threaded and synchronous throughout: one active session reads and
//! writes the store, operations run to completion, and there are no locks.
//! Two concurrent writers (e.g. two open instances) can race the counter;
//! that is an accepted limitation, not a guarantee.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod gate;
pub mod kv;
pub mod ledger;
pub mod numbering;
pub mod profile;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use gate::AccessGate;
pub use kv::{FileKv, KvStore, MemoryKv};
pub use service::BillingService;
