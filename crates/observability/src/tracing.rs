//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Filtering comes from `RUST_LOG`, defaulting to `info`. Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_filter(None);
}

/// Initialize with an explicit filter directive (e.g. `"debug"` or
/// `"domainkit_events=trace"`), overriding the environment.
///
/// Useful for tests and embedded hosts that do not own the environment.
pub fn init_with_directives(directives: &str) {
    init_with_filter(Some(directives));
}

fn init_with_filter(directives: Option<&str>) {
    let filter = match directives {
        Some(d) => EnvFilter::new(d),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    // JSON logs + timestamps; repeated init attempts are ignored.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
