//! Error types for the instagram-downloader application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Page/bundle scraping errors
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// The response decoded, but an expected field is gone. Kept distinct
    /// from decode failures so "platform changed its page structure" can be
    /// told apart from "transient bad response".
    #[error("Unexpected response shape: {0}")]
    SchemaMismatch(String),

    // Upstream API errors
    #[error("Upstream rejected the request: {0}")]
    Upstream(String),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Run interrupted")]
    Aborted,

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes, one per error family.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const EXTRACTION_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
