//! Shared test utilities for controller integration tests.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "slct_core=debug";

/// Install a fmt subscriber writing through the test harness. Safe to call
/// from every test; later calls find the global subscriber already set.
pub fn init_test_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    drop(tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init());
}
