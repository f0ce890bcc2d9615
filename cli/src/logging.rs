//! Tracing initialisation for the CLI.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "warn";

/// Install a stderr subscriber. `verbose` raises `failpolicy_core` to `debug`.
pub fn init_tracing(verbose: bool) {
    let mut directives =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_DIRECTIVES.to_string());
    if verbose {
        directives.push_str(",failpolicy_core=debug");
    }

    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
