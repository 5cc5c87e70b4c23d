//! Browser console logging.

/// Build version stamped by `build.rs`.
pub const VERSION: &str = env!("GIT_VERSION");

/// Install the panic hook and route `log` (and `tracing` via its `log`
/// feature) to the browser console. Calling twice is harmless.
pub fn init(level: log::Level) {
    console_error_panic_hook::set_once();
    drop(console_log::init_with_level(level));
    log::info!("slct {VERSION} logging initialised");
}
