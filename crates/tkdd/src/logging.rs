use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr, keeping stdout clean for reports.
///
/// The level can be set via the `level` parameter or overridden entirely
/// with the `RUST_LOG` environment variable. Core library internals stay
/// at warn unless `RUST_LOG` says otherwise.
pub fn init(level: &str) {
    let default_filter = format!("tkdd={level},tkdd_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(false),
        )
        .init();
}
