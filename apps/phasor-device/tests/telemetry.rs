use phasor_device::telemetry::{
    init_tracing, resolve_filter, resolve_filter_from, TelemetryError, LOG_ENV_VAR,
};
use tracing::level_filters::LevelFilter;

#[test]
fn bad_fallback_filter_is_reported() {
    if std::env::var(LOG_ENV_VAR).is_ok() {
        return;
    }
    let err = resolve_filter("phasor=verbose").unwrap_err();
    assert!(matches!(err, TelemetryError::Filter { .. }));
}

#[test]
fn bad_env_filter_is_reported_not_dropped() {
    match resolve_filter_from(Some("phasor=verbose"), "info") {
        Err(TelemetryError::Filter { filter, .. }) => assert_eq!(filter, "phasor=verbose"),
        other => panic!("expected filter error, got {other:?}"),
    }
}

#[test]
fn env_filter_wins_over_fallback() {
    let filter = resolve_filter_from(Some("phasor_core=trace"), "info").unwrap();
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
}

#[test]
fn blank_env_filter_uses_fallback() {
    let filter = resolve_filter_from(Some("  "), "warn").unwrap();
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    assert!(resolve_filter_from(None, "debug").is_ok());
}

#[test]
fn second_init_is_rejected() {
    init_tracing("debug").unwrap();
    assert!(matches!(
        init_tracing("debug"),
        Err(TelemetryError::AlreadyInitialised)
    ));
}
