//! Article title model
//!
//! A `PageTitle` is the unit of graph traversal: the portion of an article
//! URL after the site's article path prefix, reduced to a canonical form so
//! that differently-encoded spellings of the same article collapse into a
//! single hash key.
//!
//! Canonicalization:
//! - the fragment (`#section`) is dropped from the raw href
//! - percent-escapes are then decoded (lossy UTF-8)
//!
//! `Display` renders the canonical form directly; building a fetch URL
//! re-encodes the handful of bytes that are not safe in a path segment.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt;

/// Bytes that must stay escaped when a canonical title is turned back into
/// a URL path segment. Everything else round-trips literally.
const TITLE_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// A normalized article title, used as the hash key throughout a search
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageTitle(String);

impl PageTitle {
    /// Creates a title from a raw URL tail, dropping any fragment and
    /// decoding percent-escapes
    pub fn new(raw: &str) -> Self {
        let without_fragment = raw.split('#').next().unwrap_or_default();
        let decoded = percent_decode_str(without_fragment)
            .decode_utf8_lossy()
            .into_owned();
        PageTitle(decoded)
    }

    /// Parses an href into a title if it is an internal article link
    ///
    /// Returns `None` for external links, bare fragments, and hrefs outside
    /// the article path prefix.
    pub fn from_href(href: &str, link_prefix: &str) -> Option<Self> {
        let tail = href.strip_prefix(link_prefix)?;
        let title = Self::new(tail);
        if title.0.is_empty() {
            None
        } else {
            Some(title)
        }
    }

    /// The canonical (decoded) title
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The namespace prefix, if the title carries one
    pub fn namespace(&self) -> Option<&str> {
        self.0
            .split_once(':')
            .map(|(ns, _)| ns)
            .filter(|ns| !ns.is_empty())
    }

    /// Re-encodes the title for use as a URL path segment
    pub fn encoded(&self) -> String {
        utf8_percent_encode(&self.0, TITLE_ESCAPES).to_string()
    }
}

impl fmt::Display for PageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
