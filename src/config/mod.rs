//! Configuration module for wikihop
//!
//! All search policy lives here as explicit values injected into the link
//! extractor and the search engine: site addressing, extraction scope,
//! exclusion rules, and the fetch-failure policy. There is no configuration
//! file; the CLI assembles a `SearchConfig` from flags and defaults.

mod types;
mod validation;

pub use types::{
    ExclusionPolicy, ExtractionConfig, ExtractionScope, FetchFailurePolicy, SearchConfig,
    SiteConfig, DEFAULT_EXCLUDED_NAMESPACES, DEFAULT_EXCLUDED_PREFIXES,
};
