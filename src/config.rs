use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    /// Artificial latency before a business report is returned.
    pub report_delay: Duration,
    /// Artificial latency before a regenerated headline is returned.
    pub headline_delay: Duration,
    pub request_timeout: Duration,
    pub otel_service_name: String,
    pub otel_exporter_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: "development".to_string(),
            report_delay: Duration::from_millis(1000),
            headline_delay: Duration::from_millis(800),
            request_timeout: Duration::from_secs(30),
            otel_service_name: "growthpro-api".to_string(),
            otel_exporter_endpoint: "http://localhost:4317".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Ok(Self {
            port: parse_var("PORT", defaults.port)?,
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            report_delay: Duration::from_millis(parse_var(
                "REPORT_DELAY_MS",
                defaults.report_delay.as_millis() as u64,
            )?),
            headline_delay: Duration::from_millis(parse_var(
                "HEADLINE_DELAY_MS",
                defaults.headline_delay.as_millis() as u64,
            )?),
            request_timeout: Duration::from_secs(parse_var(
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )?),
            otel_service_name: env::var("OTEL_SERVICE_NAME")
                .unwrap_or(defaults.otel_service_name),
            otel_exporter_endpoint: env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or(defaults.otel_exporter_endpoint),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_value(name, env::var(name).ok(), default)
}

fn parse_value<T>(name: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got {raw:?}")),
        None => Ok(default),
    }
}
