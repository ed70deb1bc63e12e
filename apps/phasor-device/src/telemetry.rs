use std::io::IsTerminal;
use std::sync::OnceLock;

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Overrides the configured log filter when set.
pub const LOG_ENV_VAR: &str = "PHASOR_LOG";

static INITIALISED: OnceLock<()> = OnceLock::new();

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("tracing already initialised")]
    AlreadyInitialised,
    #[error("invalid log filter {filter:?}: {source}")]
    Filter {
        filter: String,
        #[source]
        source: ParseError,
    },
    #[error("failed to install subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Build the filter from `PHASOR_LOG`, falling back to `fallback` when the
/// variable is unset or blank.
pub fn resolve_filter(fallback: &str) -> Result<EnvFilter, TelemetryError> {
    let from_env = std::env::var(LOG_ENV_VAR).ok();
    resolve_filter_from(from_env.as_deref(), fallback)
}

/// Like [`resolve_filter`] with the environment value passed in. A value that
/// is present but does not parse is an error, not a silent fallback.
pub fn resolve_filter_from(
    from_env: Option<&str>,
    fallback: &str,
) -> Result<EnvFilter, TelemetryError> {
    let directives = match from_env.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => fallback,
    };
    EnvFilter::try_new(directives).map_err(|source| TelemetryError::Filter {
        filter: directives.to_owned(),
        source,
    })
}

/// Install the global subscriber. Logs go to stderr so frame output on
/// stdout stays machine-readable. The once-guard is only set after a
/// successful install, so a failed attempt reports its real cause again.
pub fn init_tracing(fallback_filter: &str) -> Result<(), TelemetryError> {
    if INITIALISED.get().is_some() {
        return Err(TelemetryError::AlreadyInitialised);
    }
    let filter = resolve_filter(fallback_filter)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);
    Registry::default().with(filter).with(fmt_layer).try_init()?;
    // a concurrent winner already set it; either way tracing is installed
    let _ = INITIALISED.set(());
    Ok(())
}
