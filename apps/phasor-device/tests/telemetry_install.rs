//! Runs in its own process: a foreign subscriber is installed first.

use phasor_device::telemetry::{init_tracing, TelemetryError, LOG_ENV_VAR};

#[test]
fn failed_install_keeps_reporting_the_install_error() {
    if std::env::var(LOG_ENV_VAR).is_ok() {
        return;
    }
    tracing::subscriber::set_global_default(tracing_subscriber::registry()).unwrap();

    assert!(matches!(init_tracing("info"), Err(TelemetryError::Install(_))));
    assert!(matches!(init_tracing("info"), Err(TelemetryError::Install(_))));
}
