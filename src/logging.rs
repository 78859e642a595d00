// SPDX-License-Identifier: MPL-2.0
//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` takes precedence; otherwise the crate logs at `info`, or at
//! `debug` with `--verbose`.

use tracing_subscriber::EnvFilter;

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "sequestered_atelier=debug,warn"
    } else {
        "sequestered_atelier=info,warn"
    }
}

/// Installs the global subscriber. Later calls leave the first one in place.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
    {
        eprintln!("logging already initialized: {err}");
    }
}
