//! Link extraction
//!
//! Turns a fetched page body into the set of internal article links it
//! exposes. The result is deduplicated but keeps document order, so a
//! search expanding it enqueues candidates deterministically.

use crate::config::{ExtractionConfig, ExtractionScope};
use crate::title::PageTitle;
use scraper::{Html, Selector};
use std::collections::HashSet;

/// CSS selector for each extraction scope
fn scope_selector(scope: ExtractionScope) -> &'static str {
    match scope {
        ExtractionScope::Content => "div#bodyContent a[href]",
        ExtractionScope::Paragraphs => "div#bodyContent p a[href]",
    }
}

/// Extracts the internal article links from a page body
///
/// Only hrefs under `link_prefix` count; fragments are stripped, excluded
/// namespaces filtered, and duplicates collapsed (first occurrence wins).
/// Unparsable markup degrades to an empty result rather than an error,
/// since page content is untrusted input.
pub fn extract_links(html: &str, link_prefix: &str, config: &ExtractionConfig) -> Vec<PageTitle> {
    let document = Html::parse_document(html);

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse(scope_selector(config.scope)) {
        for element in document.select(&selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };

            let Some(title) = PageTitle::from_href(href, link_prefix) else {
                continue;
            };

            if config.exclusions.is_excluded(&title) {
                continue;
            }

            if seen.insert(title.clone()) {
                links.push(title);
            }
        }
    }

    links
}
