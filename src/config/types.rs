use crate::config::validation::parse_article_base;
use crate::title::PageTitle;
use crate::ConfigResult;
use clap::ValueEnum;

/// Namespaces that never hold article content, per the site's page
/// organization conventions. Links into these (and their `_talk`
/// counterparts) are not part of the searchable graph.
pub const DEFAULT_EXCLUDED_NAMESPACES: &[&str] = &[
    "User",
    "Wikipedia",
    "File",
    "MediaWiki",
    "Template",
    "Help",
    "Category",
    "Portal",
    "Draft",
    "TimedText",
    "Module",
];

/// Short literal-prefix list for the simpler exclusion variant
pub const DEFAULT_EXCLUDED_PREFIXES: &[&str] = &[
    "Help:",
    "File:",
    "Category:",
    "Template:",
    "Special:",
    "Talk:",
];

/// Top-level search configuration, injected into the search engine
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Site addressing (article base URL and internal link prefix)
    pub site: SiteConfig,

    /// Link extraction policy
    pub extraction: ExtractionConfig,

    /// What a fetch failure on the page being expanded does to the search
    pub on_fetch_error: FetchFailurePolicy,

    /// Print a `Searching <title>` line for each expanded page
    pub announce_progress: bool,
}

impl SearchConfig {
    /// English Wikipedia defaults: content-wide extraction, namespace-aware
    /// exclusions, fail-fast fetch errors
    pub fn wikipedia() -> Self {
        Self {
            site: SiteConfig::wikipedia(),
            extraction: ExtractionConfig::default(),
            on_fetch_error: FetchFailurePolicy::Fail,
            announce_progress: true,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::wikipedia()
    }
}

/// Site addressing: where articles live and how internal links are spelled
#[derive(Debug, Clone)]
pub struct SiteConfig {
    article_base: String,
    link_prefix: String,
}

impl SiteConfig {
    /// English Wikipedia addressing
    pub fn wikipedia() -> Self {
        Self {
            article_base: "https://en.wikipedia.org/wiki/".to_string(),
            link_prefix: "/wiki/".to_string(),
        }
    }

    /// Builds site addressing from an article base URL such as
    /// `https://en.wikipedia.org/wiki/`
    ///
    /// The internal link prefix is the path component of the base, so hrefs
    /// on fetched pages match against it directly.
    pub fn new(article_base: &str) -> ConfigResult<Self> {
        let url = parse_article_base(article_base)?;
        Ok(Self {
            article_base: url.to_string(),
            link_prefix: url.path().to_string(),
        })
    }

    /// The full article base URL, trailing slash included
    pub fn article_base(&self) -> &str {
        &self.article_base
    }

    /// Href prefix that marks an internal article link
    pub fn link_prefix(&self) -> &str {
        &self.link_prefix
    }

    /// Full fetch URL for a title
    pub fn article_url(&self, title: &PageTitle) -> String {
        format!("{}{}", self.article_base, title.encoded())
    }
}

/// Which links inside a fetched page are considered
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExtractionScope {
    /// Every link in the page's main content container
    Content,

    /// Only links inside paragraph elements of the content container
    Paragraphs,
}

/// What a fetch failure on the page being expanded does to the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FetchFailurePolicy {
    /// Abort the whole search and report no path
    Fail,

    /// Log the failure and leave the page as a dead-end leaf
    Skip,
}

/// Rules deciding which extracted titles are outside the article graph
#[derive(Debug, Clone)]
pub enum ExclusionPolicy {
    /// Namespace-aware: excludes `Ns:Title` and `Ns_talk:Title` for every
    /// listed namespace
    Namespaces(Vec<String>),

    /// Literal prefix match against the listed strings
    Prefixes(Vec<String>),
}

impl ExclusionPolicy {
    /// The namespace-aware policy with the default exclusion list
    pub fn default_namespaces() -> Self {
        Self::Namespaces(
            DEFAULT_EXCLUDED_NAMESPACES
                .iter()
                .map(|ns| ns.to_string())
                .collect(),
        )
    }

    /// The literal-prefix policy with the default prefix list
    pub fn default_prefixes() -> Self {
        Self::Prefixes(
            DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
        )
    }

    /// Adds entries to whichever list is active
    pub fn extend<I>(&mut self, extra: I)
    where
        I: IntoIterator<Item = String>,
    {
        match self {
            Self::Namespaces(list) | Self::Prefixes(list) => list.extend(extra),
        }
    }

    /// Whether a title falls outside the searchable article namespace
    pub fn is_excluded(&self, title: &PageTitle) -> bool {
        match self {
            Self::Namespaces(list) => match title.namespace() {
                Some(ns) => list.iter().any(|excluded| {
                    ns == excluded.as_str()
                        || ns
                            .strip_suffix("_talk")
                            .map_or(false, |base| base == excluded.as_str())
                }),
                None => false,
            },
            Self::Prefixes(list) => list
                .iter()
                .any(|prefix| title.as_str().starts_with(prefix.as_str())),
        }
    }
}

/// Link extraction policy: scope plus exclusion rules
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    pub scope: ExtractionScope,
    pub exclusions: ExclusionPolicy,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            scope: ExtractionScope::Content,
            exclusions: ExclusionPolicy::default_namespaces(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wikipedia_site_defaults() {
        let site = SiteConfig::wikipedia();
        assert_eq!(site.article_base(), "https://en.wikipedia.org/wiki/");
        assert_eq!(site.link_prefix(), "/wiki/");
    }

    #[test]
    fn test_site_from_base_url() {
        let site = SiteConfig::new("http://127.0.0.1:8080/wiki/").unwrap();
        assert_eq!(site.link_prefix(), "/wiki/");
        assert_eq!(
            site.article_url(&PageTitle::new("Terence_Tao")),
            "http://127.0.0.1:8080/wiki/Terence_Tao"
        );
    }

    #[test]
    fn test_article_url_reencodes_title() {
        let site = SiteConfig::wikipedia();
        assert_eq!(
            site.article_url(&PageTitle::new("Café")),
            "https://en.wikipedia.org/wiki/Caf%C3%A9"
        );
    }

    #[test]
    fn test_namespace_policy_excludes_colon_form() {
        let policy = ExclusionPolicy::default_namespaces();
        assert!(policy.is_excluded(&PageTitle::new("Help:Contents")));
        assert!(policy.is_excluded(&PageTitle::new("Category:Mathematicians")));
    }

    #[test]
    fn test_namespace_policy_excludes_talk_form() {
        let policy = ExclusionPolicy::default_namespaces();
        assert!(policy.is_excluded(&PageTitle::new("File_talk:Photo.jpg")));
        assert!(policy.is_excluded(&PageTitle::new("User_talk:Example")));
    }

    #[test]
    fn test_namespace_policy_keeps_articles() {
        let policy = ExclusionPolicy::default_namespaces();
        assert!(!policy.is_excluded(&PageTitle::new("Leonhard_Euler")));
        // A namespace word as an ordinary title prefix is not a namespace.
        assert!(!policy.is_excluded(&PageTitle::new("Helper_function")));
        assert!(!policy.is_excluded(&PageTitle::new("Filesystem")));
    }

    #[test]
    fn test_namespace_policy_keeps_unlisted_namespaces() {
        let policy = ExclusionPolicy::default_namespaces();
        assert!(!policy.is_excluded(&PageTitle::new("Book:Something")));
    }

    #[test]
    fn test_prefix_policy_is_literal() {
        let policy = ExclusionPolicy::default_prefixes();
        assert!(policy.is_excluded(&PageTitle::new("Help:Contents")));
        // The short list has no User entry and no _talk awareness.
        assert!(!policy.is_excluded(&PageTitle::new("User:Example")));
        assert!(!policy.is_excluded(&PageTitle::new("File_talk:Photo.jpg")));
    }

    #[test]
    fn test_extend_adds_to_active_list() {
        let mut policy = ExclusionPolicy::default_namespaces();
        policy.extend(vec!["Special".to_string()]);
        assert!(policy.is_excluded(&PageTitle::new("Special:Random")));
        assert!(policy.is_excluded(&PageTitle::new("Special_talk:Random")));
    }
}
