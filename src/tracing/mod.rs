//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the psr-core tracing/logging system.
///
/// Reads the `PSR_LOG` environment variable for per-subsystem log levels.
/// Format: `PSR_LOG=psr_core::references=debug,psr_core::pipeline=info`
///
/// Falls back to `psr_core=info` if `PSR_LOG` is not set or is invalid.
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("PSR_LOG")
            .unwrap_or_else(|_| EnvFilter::new("psr_core=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
