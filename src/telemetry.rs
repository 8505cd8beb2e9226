//! Opt-in tracing bootstrap for hosts embedding `planboard-rs`.
//!
//! The engine itself only emits `tracing` events; installing a
//! subscriber is left to the host. Hosts that do not want to wire their
//! own can enable the `telemetry` feature and call
//! `init_default_tracing` once at startup.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`.
///
/// Returns `true` on success, `false` when the feature is disabled or a
/// global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
