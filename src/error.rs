use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the recipe API or starting up
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Transport-level failure (connection, timeout, TLS)
    #[error("Failed to reach recipe API: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The API answered with something other than 200 OK
    #[error("Recipe API returned status {0}")]
    StatusError(StatusCode),

    /// Response body was not the JSON shape we expect
    #[error("Failed to parse API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The random endpoint answered with an empty `recipes` array
    #[error("Recipe API returned no recipes")]
    EmptyResponse,

    /// Cuisine name outside the supported set
    #[error("Unknown cuisine '{0}'")]
    UnknownCuisine(String),

    /// No API key in configuration or environment
    #[error(
        "No Spoonacular API key configured. Set FOODGEN__API_KEY or SPOONACULAR_API_KEY, \
         or add api_key to config.toml"
    )]
    MissingApiKey,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Terminal input/output error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
