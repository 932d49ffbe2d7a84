use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured stdout tracing. Call once at service startup.
///
/// JSON output filtered by `RUST_LOG`; when unset, `info` globally and
/// `debug` for the calling service's crate (e.g. `campus_school`).
/// Subsequent calls are ignored.
pub fn init_tracing(service_crate: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(service_crate)));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}

fn default_directives(service_crate: &str) -> String {
    format!("info,{service_crate}=debug,tower_http=info")
}
