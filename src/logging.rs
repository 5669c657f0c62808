//! Diagnostic logging. Records go to stderr so they never interleave with the
//! menu on stdout. Verbosity defaults to `warn` and follows `RUST_LOG` when
//! set.

use env_logger::{Builder, Env, Target};

const DEFAULT_FILTER: &str = "warn";

/// Install the global logger. A second call is a no-op.
pub fn init_logging() {
    let result = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stderr)
        .format_timestamp_millis()
        .try_init();

    if result.is_ok() {
        log::debug!(
            "logging ready, {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );
    }
}
