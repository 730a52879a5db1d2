//! # Seed Binary
//!
//! Seeds a data directory with a demo profile, secret, and catalog so the
//! billing flow can be exercised against real files.
//!
//! ## Usage
//! ```bash
//! cargo run -p paisa-store --bin seed -- [data-dir]
//! # default data dir: ./paisa-data
//! ```

use paisa_core::{BusinessProfile, Money};
use paisa_store::{BillingService, FileKv, StoreResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEMO_CATALOG: &[(&str, &str, i64)] = &[
    ("B1", "Pen", 1000),
    ("B2", "Notebook", 4500),
    ("B3", "Story Book", 5000),
    ("B4", "Candle", 500),
];

fn main() -> StoreResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let dir = std::env::args().nth(1).unwrap_or_else(|| "paisa-data".to_string());
    let kv = FileKv::open(&dir)?;
    let mut service = BillingService::open(kv)?;

    if service.is_set_up()? {
        info!(%dir, "store already set up, leaving data untouched");
        return Ok(());
    }

    service.setup(
        BusinessProfile {
            business_name: "Demo Counter".to_string(),
        },
        "1234",
    )?;

    for (code, name, paise) in DEMO_CATALOG {
        service.add_product(code, name, Money::from_paise(*paise))?;
    }

    info!(
        %dir,
        products = service.catalog().len(),
        "seeded demo store (secret: 1234)"
    );
    Ok(())
}
