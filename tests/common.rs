// tests/common.rs
//! Shared test utilities: tracing setup

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test-friendly logging once per test binary; respects RUST_LOG
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}
