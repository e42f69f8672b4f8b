//! Draft simulator configuration.

use crate::bots::BotStrategy;
use crate::packs::DEFAULT_API_URL;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "CUBE_API_URL";

/// Settings for a draft run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DraftConfig {
    /// Base URL of the cube API.
    #[serde(default = "default_api_url")]
    api_url: String,

    /// Bots seated against the human.
    #[serde(default = "default_num_bots")]
    num_bots: usize,

    /// Bot pick policy.
    #[serde(default)]
    bot_strategy: BotStrategy,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,

    /// Seed for bots and local cube shuffles.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_num_bots() -> usize {
    7
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            num_bots: default_num_bots(),
            bot_strategy: BotStrategy::default(),
            request_timeout_secs: default_request_timeout_secs(),
            seed: None,
        }
    }
}

impl DraftConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(api_url = %config.api_url, num_bots = config.num_bots, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file when it exists, otherwise uses defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies `CUBE_API_URL` from the environment, if set.
    #[instrument(skip(self))]
    pub fn apply_env(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                debug!(api_url = %url, "Using API URL from environment");
                self.api_url = url;
            }
        }
        self
    }

    /// Overrides the API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Overrides the number of bots.
    pub fn with_num_bots(mut self, num_bots: usize) -> Self {
        self.num_bots = num_bots;
        self
    }

    /// Overrides the bot policy.
    pub fn with_bot_strategy(mut self, bot_strategy: BotStrategy) -> Self {
        self.bot_strategy = bot_strategy;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// HTTP request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
