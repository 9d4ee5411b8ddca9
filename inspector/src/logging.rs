//! Diagnostic tracing for `link-inspect`.
//!
//! Output goes to stderr only; stdout is reserved for the rendered outcome so
//! callers can parse it.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. When unset, defaults to `warn`, or `debug` if `verbose`.
///
/// # Example
/// ```bash
/// RUST_LOG=link_inspect=debug link-inspect -l step.link -f stdout -p contains -r OK
/// ```
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
