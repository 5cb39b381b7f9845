use serde::Deserialize;
use service_core::config::{self as core_config, load_settings};
use service_core::error::AppError;

/// Where registration payloads are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Stdout,
    Memory,
}

#[derive(Debug, Clone)]
pub struct MedicoConfig {
    pub common: core_config::Config,
    pub log_level: String,
    /// When set, spans are exported over OTLP to this endpoint.
    pub otlp_endpoint: Option<String>,
    pub output: OutputKind,
}

#[derive(Debug, Deserialize)]
struct ServiceSettings {
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default)]
    otlp_endpoint: Option<String>,
    #[serde(default)]
    output: OutputKind,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl MedicoConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let settings: ServiceSettings = load_settings()?;

        Ok(MedicoConfig {
            common,
            log_level: settings.log_level,
            otlp_endpoint: settings.otlp_endpoint.filter(|e| !e.is_empty()),
            output: settings.output,
        })
    }
}

impl Default for MedicoConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            log_level: default_log_level(),
            otlp_endpoint: None,
            output: OutputKind::default(),
        }
    }
}
