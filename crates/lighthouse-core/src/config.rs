//! Configuration loaded from file and environment.
//!
//! Precedence: env `LIGHTHOUSE_CONFIG` path > `config/lighthouse.toml` >
//! defaults, with `LIGHTHOUSE__*` environment overrides on top. The oracle
//! credential additionally falls back to `GEMINI_API_KEY` / `API_KEY` so a
//! plain `.env` file is enough to run.

use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LighthouseConfig {
    /// Application identity shown in the terminal banner.
    pub app_name: String,
    /// Base directory for the Sled state DB.
    pub storage_path: String,
    /// Hosted model identifier for the oracle client.
    pub model: String,
    /// Oracle API key. Usually left unset here and supplied via environment.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl LighthouseConfig {
    /// Load config from file and environment. Unset values fall back to
    /// defaults; a missing config file is not an error.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("LIGHTHOUSE_CONFIG").unwrap_or_else(|_| "config/lighthouse".to_string());
        let builder = config::Config::builder()
            .set_default("app_name", "Abyss Lighthouse")?
            .set_default("storage_path", "./data")?
            .set_default("model", DEFAULT_MODEL)?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("LIGHTHOUSE").separator("__"))
            .build()?;

        built.try_deserialize()
    }

    /// Oracle credential with environment fallback.
    /// Priority: config file > GEMINI_API_KEY > API_KEY.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .or_else(|| std::env::var("API_KEY").ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}
