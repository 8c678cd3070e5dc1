//! URL handling module for linkharvest
//!
//! This module provides seed normalization, netloc extraction, the
//! webpage-vs-asset filter, and crawl-scope membership.

mod filter;
mod netloc;
mod normalize;
mod scope;

// Re-export main functions and types
pub use filter::{is_valid_url, is_webpage};
pub use netloc::extract_netloc;
pub use normalize::{normalize_url, NormalizedUrl};
pub use scope::CrawlScope;
