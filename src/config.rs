use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g. "127.0.0.1:3000")
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Projects API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// OpenTelemetry configuration
    #[serde(default)]
    pub otel: OtelConfig,
}

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the backend serving /api/v1/projects
    #[serde(default = "default_api_url")]
    pub url: String,

    /// Revalidation interval for the published listing, in seconds.
    /// Zero refetches on every page render.
    #[serde(default = "default_revalidate")]
    pub revalidate: u64,
}

fn default_api_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_revalidate() -> u64 {
    60
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            revalidate: default_revalidate(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtelConfig {
    /// OTLP endpoint (if None, uses OTEL_EXPORTER_OTLP_ENDPOINT env var)
    pub endpoint: Option<String>,

    /// Deployment environment name
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            environment: default_environment(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - FOLIO_LISTEN
    /// - FOLIO_API_URL
    /// - FOLIO_API_REVALIDATE
    /// - FOLIO_OTEL_ENDPOINT
    /// - FOLIO_OTEL_ENVIRONMENT
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            // Merge FOLIO_ prefixed env vars with nested structure
            .merge(Env::prefixed("FOLIO_").split("_"))
            .extract()
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Serialize)]
struct ConfigDefaults {
    listen: String,
    api: ApiConfig,
    otel: OtelConfig,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            api: ApiConfig::default(),
            otel: OtelConfig::default(),
        }
    }
}
