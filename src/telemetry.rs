use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set: only warnings and errors reach stderr.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a `tracing` subscriber writing to stderr.
///
/// Verbosity follows `RUST_LOG` (e.g. `RUST_LOG=order_desk=info`), falling back to
/// [`DEFAULT_FILTER`]. Calling it twice is harmless: the second call is ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
