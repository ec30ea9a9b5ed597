// crates/wirebin-cli/src/logging.rs

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Human-readable events on stderr. `RUST_LOG` wins unless `-v` was given.
pub fn setup_logging(verbose: bool) {
    let dirs = if verbose { "debug" } else { "warn" };
    let filter = if verbose {
        EnvFilter::new(dirs)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(dirs))
    };

    let main_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(main_layer)
        .init()
}
