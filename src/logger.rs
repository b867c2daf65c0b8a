// Logging setup.
// Compact tracing output on stderr, filtered by RUST_LOG or the verbosity flag.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Dependencies log at warn; this crate at info, or debug when verbose.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,aocfetch=debug"
    } else {
        "warn,aocfetch=info"
    }
}

pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
