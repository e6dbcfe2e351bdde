//! Logging setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// The filter used when `RUST_LOG` is not set.
const fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "bookshelf=debug,info"
    } else {
        "bookshelf=info,warn"
    }
}

/// Install a global compact `tracing` subscriber. `RUST_LOG` takes precedence over `verbose`.
///
/// Does nothing if a global subscriber has already been installed.
#[inline]
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // An existing subscriber (e.g. one installed by a test harness) is left in place.
    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .try_init()
        .is_err()
    {
        tracing::debug!("A global subscriber was already installed");
    }
}
