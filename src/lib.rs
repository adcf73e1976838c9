//! Wikihop: shortest hyperlink paths between encyclopedia articles
//!
//! This crate implements a breadth-first search over the live article link
//! graph: pages are fetched on demand, their in-namespace links extracted,
//! and the frontier expands level by level until the target article is
//! discovered or the hop budget is exhausted.

pub mod config;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod search;
pub mod title;

use thiserror::Error;

/// Main error type for wikihop operations
#[derive(Debug, Error)]
pub enum WikihopError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid article base URL '{url}': {reason}")]
    InvalidArticleBase { url: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for wikihop operations
pub type Result<T> = std::result::Result<T, WikihopError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{ExclusionPolicy, ExtractionScope, FetchFailurePolicy, SearchConfig, SiteConfig};
pub use search::PathSearcher;
pub use title::PageTitle;
