use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use std::time::Duration;

use crate::error::GeneratorError;

/// Environment variable checked when no key is set in the config layers
pub const API_KEY_ENV: &str = "SPOONACULAR_API_KEY";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Spoonacular API key (can also be set via SPOONACULAR_API_KEY)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the recipes API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; 0 disables the timeout
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Number of dishes requested per cuisine search
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,
    /// Decorative animation settings
    #[serde(default)]
    pub animation: AnimationConfig,
}

/// Configuration for the decorative Lottie animation
#[derive(Debug, Deserialize, Clone)]
pub struct AnimationConfig {
    #[serde(default = "default_animation_enabled")]
    pub enabled: bool,
    #[serde(default = "default_animation_url")]
    pub url: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_animation_enabled(),
            url: default_animation_url(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.spoonacular.com/recipes".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_search_limit() -> u32 {
    5
}

fn default_animation_enabled() -> bool {
    true
}

fn default_animation_url() -> String {
    "https://lottie.host/09c65bcf-f7d5-47e4-94a6-0982e68bb50a/99n67ElJui.json".to_string()
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FOODGEN__ prefix
    /// 2. The given file, or config.toml in the current directory if present
    /// 3. Default values
    ///
    /// Environment variable format: FOODGEN__ANIMATION__ENABLED
    pub fn load(path: Option<&Path>) -> Result<Self, GeneratorError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("config").required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("FOODGEN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Timeout applied to every HTTP request, if any
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }

    /// Resolve the API key, failing fast when none is configured
    pub fn api_key(&self) -> Result<String, GeneratorError> {
        resolve_api_key(self.api_key.as_deref(), env::var(API_KEY_ENV).ok())
    }
}

fn resolve_api_key(
    configured: Option<&str>,
    from_env: Option<String>,
) -> Result<String, GeneratorError> {
    let non_blank = |key: &str| {
        let key = key.trim();
        (!key.is_empty()).then(|| key.to_string())
    };

    configured
        .and_then(non_blank)
        .or_else(|| from_env.as_deref().and_then(non_blank))
        .ok_or(GeneratorError::MissingApiKey)
}
