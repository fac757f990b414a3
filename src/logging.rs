// src/logging.rs
// =============================================================================
// tracing setup for the binary.
//
// RUST_LOG wins when set. Otherwise we log our own crate at info (debug with
// --verbose) and everything else at warn. Output goes to stderr so that
// `--json` output on stdout stays machine-readable.
// =============================================================================

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "warn,getmembers=debug"
    } else {
        "warn,getmembers=info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // try_init: a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
