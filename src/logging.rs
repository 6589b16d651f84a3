//! Diagnostics via `tracing`.
//!
//! Output goes to stderr in compact format and is controlled by `RUST_LOG`.
//! The terminal UI passes `"off"` as its default so nothing draws over the
//! alternate screen; redirect stderr to a file when debugging it:
//!
//! ```bash
//! RUST_LOG=wealth_board=debug cargo run 2> board.log
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global subscriber. `default_filter` applies when `RUST_LOG` is unset.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second init (e.g. from tests) is not an error worth reporting
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
