//! Configuration module for linkharvest
//!
//! Loads, parses, and validates optional TOML configuration. Every field is
//! defaulted, so callers without a config file use `Config::default()`.

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, FetcherConfig, DEFAULT_USER_AGENT};

// Re-export parser and validation entry points
pub use parser::load_config;
pub use validation::validate;
