//! Log subscriber setup.

use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,web_server=debug,quill_infra=debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    /// One JSON object per event, carrying the request span's fields.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub format: LogFormat,
    /// `RUST_LOG`-style directives.
    pub filter: String,
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            format: var("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(LogFormat::Pretty),
            filter: var("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FILTER.to_string()),
        }
    }
}

/// Install the global subscriber. Unparseable directives fall back to the default filter.
pub fn init_telemetry(config: &TelemetryConfig) {
    let (filter, rejected) = match EnvFilter::try_new(&config.filter) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_FILTER), Some(e)),
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true).with_span_list(false))
            .init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
    }

    if let Some(e) = rejected {
        tracing::warn!(filter = %config.filter, "Ignoring invalid log filter: {}", e);
    }
    tracing::info!(format = ?config.format, "Logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let pairs = pairs.to_vec();
        move |key: &str| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
    }

    #[test]
    fn test_defaults_to_pretty_output() {
        let config = TelemetryConfig::from_lookup(lookup(&[]));
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.filter, DEFAULT_FILTER);
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_reads_format_and_filter() {
        let config = TelemetryConfig::from_lookup(lookup(&[
            ("LOG_FORMAT", "JSON"),
            ("RUST_LOG", "warn,web_server=trace"),
        ]));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.filter, "warn,web_server=trace");
    }

    #[test]
    fn test_blank_filter_uses_default() {
        let config = TelemetryConfig::from_lookup(lookup(&[("RUST_LOG", "  "), ("LOG_FORMAT", "text")]));
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.filter, DEFAULT_FILTER);
    }
}
