//! Tracing subscriber bootstrap for the bookstore binaries.

use bookstore_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Crates whose INFO output drowns out request logs.
const QUIET_TARGETS: &[(&str, &str)] = &[
    ("hyper", "warn"),
    ("h2", "warn"),
    ("tower_http", "info"),
    ("async_graphql", "warn"),
];

/// Build the filter from `RUST_LOG` when set, otherwise from the configured
/// level plus the quiet-target overrides.
fn build_env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let mut directives = vec![level.to_string()];
    for (target, lvl) in QUIET_TARGETS {
        directives.push(format!("{}={}", target, lvl));
    }

    let filter_str = directives.join(",");
    EnvFilter::try_new(&filter_str)
        .map_err(|e| anyhow::anyhow!("invalid tracing filter '{}': {}", filter_str, e))
}

/// Install the global tracing subscriber.
///
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = build_env_filter(&settings.log_level)?;

    let installed = match settings.log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true),
            )
            .try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(
            target: "bookstore-telemetry",
            level = %settings.log_level,
            format = ?settings.log_format,
            "tracing subscriber installed"
        );
    }

    Ok(())
}
