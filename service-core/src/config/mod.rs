use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::{de::DeserializeOwned, Deserialize};

/// Settings shared by every service.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        load_settings()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

/// Load a settings struct from `configuration.{toml,yaml,json}` (optional)
/// overlaid with `APP`-prefixed environment variables.
///
/// `.env` is read first so local overrides reach the environment source.
pub fn load_settings<T: DeserializeOwned>() -> Result<T, AppError> {
    dotenvy::dotenv().ok();

    let config = Cfg::builder()
        .add_source(File::with_name("configuration").required(false))
        .add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
