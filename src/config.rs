use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Client configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GuideConfig {
    /// Base URL of the recipe service, without the `/api` path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:10000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl GuideConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOKING_GUIDE__ prefix
    /// 2. cooking-guide.toml file in current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        load_config("cooking-guide")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from `<file_stem>.toml` and `COOKING_GUIDE__*` variables
///
/// Environment variable format: COOKING_GUIDE__BASE_URL
pub fn load_config(file_stem: &str) -> Result<GuideConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(file_stem).required(false))
        .add_source(
            Environment::with_prefix("COOKING_GUIDE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
