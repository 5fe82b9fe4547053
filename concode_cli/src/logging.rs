//! Logging setup for the CLI.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// Level comes from `RUST_LOG` (default `info`), e.g. `RUST_LOG=concode_core=debug`.
/// Output goes to stderr so JSON on stdout stays clean.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}
