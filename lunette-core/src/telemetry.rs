//! Opt-in tracing setup.
//!
//! The runtime emits `tracing` events regardless; nothing is printed unless
//! the host installs a subscriber. With the `telemetry` feature enabled,
//! [`init_tracing`] installs a default one (env-filtered, compact format).
//! Note that a subscriber writing to stdout will fight the terminal UI;
//! point `RUST_LOG` output at a file or use it for headless runs.

/// Install a default `tracing` subscriber when the `telemetry` feature is
/// enabled.
///
/// Returns `true` when initialization succeeds, `false` when the feature is
/// disabled or a global subscriber was already set.
#[must_use]
pub fn init_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
