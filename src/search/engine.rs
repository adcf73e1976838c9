//! BFS engine over the on-demand article graph
//!
//! The engine owns the HTTP client and the injected configuration. Each
//! `shortest_path` call creates its own distance map, parent map, and FIFO
//! frontier; they live only for that search and are discarded on return.

use crate::config::{FetchFailurePolicy, SearchConfig};
use crate::extract::extract_links;
use crate::fetch::{build_http_client, fetch_article, FetchOutcome};
use crate::title::PageTitle;
use crate::{Result, WikihopError};
use reqwest::Client;
use std::collections::{HashMap, VecDeque};

/// Breadth-first path searcher over live article pages
pub struct PathSearcher {
    client: Client,
    config: SearchConfig,
}

impl PathSearcher {
    /// Creates a searcher with the given configuration
    pub fn new(config: SearchConfig) -> Result<Self> {
        let client = build_http_client().map_err(WikihopError::ClientBuild)?;
        Ok(Self { client, config })
    }

    /// Finds a shortest hyperlink path from `start` to `end`
    ///
    /// The frontier expands in strict FIFO order, so distances are
    /// processed non-decreasing and the first discovery of any page fixes
    /// its distance and parent for good. A page already `max_distance` hops
    /// out stays in the visited set but is never fetched.
    ///
    /// Returns `None` when the target is unreachable within the budget, or
    /// when a page being expanded fails to fetch under the `Fail` policy.
    /// On success the path runs start to end inclusive and its length minus
    /// one is the minimum hop count over the discovered subgraph.
    pub async fn shortest_path(
        &self,
        start: &PageTitle,
        end: &PageTitle,
        max_distance: u32,
    ) -> Option<Vec<PageTitle>> {
        let mut distance: HashMap<PageTitle, u32> = HashMap::from([(start.clone(), 0)]);
        let mut parent: HashMap<PageTitle, Option<PageTitle>> =
            HashMap::from([(start.clone(), None)]);
        let mut frontier: VecDeque<PageTitle> = VecDeque::from([start.clone()]);

        // The target may be discovered as a candidate mid-expansion; with
        // the check at loop entry it is then never dequeued itself.
        while !parent.contains_key(end) {
            let Some(current) = frontier.pop_front() else {
                break;
            };

            let Some(&depth) = distance.get(&current) else {
                continue;
            };

            // Pages at the budget stay as dead-end leaves of the visited set.
            if depth >= max_distance {
                continue;
            }

            if self.config.announce_progress {
                println!("Searching {}", current);
            }
            tracing::debug!("Expanding '{}' at depth {}", current, depth);

            let url = self.config.site.article_url(&current);
            let body = match fetch_article(&self.client, &url).await {
                FetchOutcome::Success { body } => body,
                FetchOutcome::HttpError { status } => {
                    if self.abort_on_fetch_failure(&current, &format!("HTTP {}", status)) {
                        return None;
                    }
                    continue;
                }
                FetchOutcome::NetworkError { error } => {
                    if self.abort_on_fetch_failure(&current, &error) {
                        return None;
                    }
                    continue;
                }
            };

            let links = extract_links(
                &body,
                self.config.site.link_prefix(),
                &self.config.extraction,
            );
            tracing::trace!("'{}' links to {} candidate pages", current, links.len());

            for candidate in links {
                // First discovery fixes distance and parent for good.
                if !parent.contains_key(&candidate) {
                    distance.insert(candidate.clone(), depth + 1);
                    parent.insert(candidate.clone(), Some(current.clone()));
                    frontier.push_back(candidate);
                }
            }
        }

        if parent.contains_key(end) {
            Some(reconstruct(&parent, end))
        } else {
            None
        }
    }

    /// Logs a fetch failure on the page being expanded and decides, per the
    /// configured policy, whether the whole search aborts
    fn abort_on_fetch_failure(&self, title: &PageTitle, reason: &str) -> bool {
        match self.config.on_fetch_error {
            FetchFailurePolicy::Fail => {
                tracing::error!("Fetch failed for '{}' ({}), aborting search", title, reason);
                true
            }
            FetchFailurePolicy::Skip => {
                tracing::warn!("Fetch failed for '{}' ({}), skipping page", title, reason);
                false
            }
        }
    }
}

/// Walks the parent map backward from `end` and reverses into a
/// start-to-end path
fn reconstruct(parent: &HashMap<PageTitle, Option<PageTitle>>, end: &PageTitle) -> Vec<PageTitle> {
    let mut path = Vec::new();
    let mut current = Some(end.clone());

    while let Some(title) = current {
        current = parent.get(&title).cloned().flatten();
        path.push(title);
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(name: &str) -> PageTitle {
        PageTitle::new(name)
    }

    #[test]
    fn test_reconstruct_walks_back_to_start() {
        let parent = HashMap::from([
            (title("A"), None),
            (title("B"), Some(title("A"))),
            (title("C"), Some(title("B"))),
        ]);

        let path = reconstruct(&parent, &title("C"));
        assert_eq!(path, vec![title("A"), title("B"), title("C")]);
    }

    #[test]
    fn test_reconstruct_single_node() {
        let parent = HashMap::from([(title("A"), None)]);

        let path = reconstruct(&parent, &title("A"));
        assert_eq!(path, vec![title("A")]);
    }
}
