//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "FRAUDLENS_LOG";

/// Initialize the global tracing subscriber.
///
/// Reads `FRAUDLENS_LOG` for per-module levels, e.g.
/// `FRAUDLENS_LOG=fraudlens_analysis::forest=debug,fraudlens=info`.
/// Falls back to `default_directive` when unset or invalid.
///
/// Idempotent: only the first call installs a subscriber. Libraries never
/// call this; binaries, benches, and tests do.
pub fn init_tracing_with(default_directive: &str) {
    let default_directive = default_directive.to_string();
    INIT.call_once(move || {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// [`init_tracing_with`] using `fraudlens=info`.
pub fn init_tracing() {
    init_tracing_with("fraudlens=info");
}
