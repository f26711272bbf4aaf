use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the recipe endpoint, ending with a slash
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Developer key; required for uploads, also exposes user-owned recipes in reads
    #[serde(default)]
    pub api_key: Option<String>,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Number of search results per page
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,
    /// Delay before the upload panel closes after a successful upload, in milliseconds
    #[serde(default = "default_modal_close_ms")]
    pub modal_close_ms: u64,
    /// Directory holding persisted bookmarks
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            results_per_page: default_results_per_page(),
            modal_close_ms: default_modal_close_ms(),
            storage_dir: None,
        }
    }
}

// Default value functions
fn default_api_url() -> String {
    "https://forkify-api.herokuapp.com/api/v2/recipes/".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_results_per_page() -> usize {
    10
}

fn default_modal_close_ms() -> u64 {
    2500
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FORKIFY__ prefix
    /// 2. forkify.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FORKIFY__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn modal_close_delay(&self) -> Duration {
        Duration::from_millis(self.modal_close_ms)
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.storage_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(".forkify"))
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the source priority.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("forkify").required(false))
        // Use double underscore for nested keys: FORKIFY__API_KEY
        .add_source(
            Environment::with_prefix("FORKIFY")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    validate(settings.try_deserialize()?)
}

fn validate(config: AppConfig) -> Result<AppConfig, ConfigError> {
    if config.results_per_page == 0 {
        return Err(ConfigError::Message(
            "results_per_page must be at least 1".to_string(),
        ));
    }
    Ok(config)
}
