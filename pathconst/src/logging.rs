//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` takes precedence; otherwise `-v` enables info and `-vv`
//! enables debug output for the pathconst crates.

use std::io;

use tracing_subscriber::EnvFilter;

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbosity {
            0 => "warn",
            1 => "warn,pathconst=info,pathconst_codegen=info",
            _ => "warn,pathconst=debug,pathconst_codegen=debug",
        })
    });

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
