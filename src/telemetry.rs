//! Opt-in log output for programs using plotkit
//!
//! The library only emits `tracing` events. Nothing is printed unless the host
//! installs a subscriber, either its own or the one from
//! [`init_default_tracing`] (requires the `telemetry` feature).

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

/// Install a compact stderr subscriber filtered by `RUST_LOG`
///
/// Returns `true` when the subscriber was installed. Returns `false` when the
/// `telemetry` feature is disabled or when the host already set a global
/// subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter
///
/// `RUST_LOG` still wins when it is set and valid.
#[must_use]
pub fn init_tracing_with(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
