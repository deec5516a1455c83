//! Tracing subscriber setup shared by both binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` wins over `verbose`.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "dollarwords_server=debug,dollarwords_client=debug,info"
    } else {
        "dollarwords_server=info,dollarwords_client=info,warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}
