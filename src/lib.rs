//! Linkharvest: bounded same-site link collection
//!
//! This crate implements the crawling stage of a chat-with-a-website
//! pipeline: starting from a single seed URL it walks same-site hyperlinks
//! depth-first and returns the set of in-scope page URLs, ready to hand to
//! a document loader one URL at a time.

pub mod config;
pub mod crawler;
pub mod url;

use thiserror::Error;

/// Main error type for linkharvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Invalid URL {input:?}: {reason}")]
    Invalid { input: String, reason: String },

    #[error("No netloc in {0:?}")]
    MissingNetloc(String),
}

/// Result type alias for linkharvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::crawler::{collect_site_urls, CrawlMode, Engine};
pub use crate::url::{is_valid_url, is_webpage, normalize_url, CrawlScope, NormalizedUrl};
