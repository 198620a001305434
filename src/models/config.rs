//! Configuration model loaded from external sources.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Settings for talking to the pantry API and rendering listings.
pub struct ClientConfig {
    /// Base URL of the pantry API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            items_per_page: default_items_per_page(),
        }
    }
}

impl ClientConfig {
    /// Loads `default.yaml`, then `{app_env}.yaml` from `config_dir`, then
    /// `APP_*` environment variables. Missing files are skipped.
    pub fn load(config_dir: &Path, app_env: &str) -> Result<Self, ConfigError> {
        Self::load_from(config_dir, app_env, Environment::with_prefix("APP"))
    }

    pub fn load_from(
        config_dir: &Path,
        app_env: &str,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        let default_file = config_dir.join("default");
        let env_file = config_dir.join(app_env);

        Config::builder()
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(File::with_name(&env_file.to_string_lossy()).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize::<ClientConfig>()
    }
}
