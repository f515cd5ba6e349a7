//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence; otherwise the filter is derived from
//! `LOG_LEVEL`. Development logs are human-readable, production logs are
//! JSON lines.

use axum::extract::Request;
use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppEnv, ServerConfig};

/// Value of the `service` field carried by every log line.
pub const SERVICE_NAME: &str = "movie-app-api";

/// Crates whose events pass the default filter.
const LOG_TARGETS: [&str; 4] = ["marquee_api", "marquee_core", "marquee_db", "tower_http"];

/// Normalise a `LOG_LEVEL` value; unknown values fall back to `info`.
pub fn normalize_level(raw: &str) -> &'static str {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" | "warning" => "warn",
        "error" => "error",
        _ => "info",
    }
}

/// Default `EnvFilter` directive string for a `LOG_LEVEL` value.
pub fn default_directives(raw_level: &str) -> String {
    let level = normalize_level(raw_level);
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global tracing subscriber. Call once, before anything logs.
pub fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directives(&config.log_level).into());

    let registry = tracing_subscriber::registry().with(filter);

    match config.app_env {
        AppEnv::Production => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        AppEnv::Development => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    service_span().in_scope(|| {
        tracing::info!(
            level = normalize_level(&config.log_level),
            env = %config.app_env,
            "Logger initialized"
        );
    });
}

/// Root span for process-level work (startup, shutdown).
pub fn service_span() -> Span {
    tracing::info_span!("service", service = SERVICE_NAME)
}

/// Per-request span; events emitted while handling the request inherit its
/// `service` field.
pub fn request_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        service = SERVICE_NAME,
        method = %request.method(),
        uri = %request.uri(),
        version = ?request.version(),
    )
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    #[test]
    fn known_levels_pass_through() {
        assert_eq!(normalize_level("debug"), "debug");
        assert_eq!(normalize_level("WARN"), "warn");
        assert_eq!(normalize_level("error"), "error");
    }

    #[test]
    fn unknown_level_defaults_to_info() {
        assert_eq!(normalize_level("verbose"), "info");
        assert_eq!(normalize_level(""), "info");
    }

    #[test]
    fn spans_carry_service_field() {
        let subscriber = tracing_subscriber::registry();
        tracing::subscriber::with_default(subscriber, || {
            let request = Request::builder()
                .uri("/api/movies")
                .body(Body::empty())
                .unwrap();

            for span in [service_span(), request_span(&request)] {
                let metadata = span.metadata().expect("span should be enabled");
                assert!(metadata.fields().field("service").is_some());
            }
        });
        assert_eq!(SERVICE_NAME, "movie-app-api");
    }

    #[test]
    fn directives_cover_workspace_crates() {
        assert_eq!(
            default_directives("debug"),
            "marquee_api=debug,marquee_core=debug,marquee_db=debug,tower_http=debug"
        );
    }
}
