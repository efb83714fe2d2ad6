//! Test tracing setup

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

static TRACING: Lazy<()> = Lazy::new(|| {
    // Another test harness may already have installed a subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
});

/// Installs a test-writer subscriber once per process, filtered by `RUST_LOG`
pub fn init_test_tracing() {
    Lazy::force(&TRACING);
}
