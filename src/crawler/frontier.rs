//! Crawl frontier: FIFO queue plus visited set
//!
//! FIFO order gives breadth-first traversal and deterministic, reproducible
//! ordering across runs. A URL enters the visited set when it is enqueued, at
//! most once and always before its page is fetched, so the same page can
//! never be queued twice. The set only grows.

use crate::urlutil::dedup_key;
use std::collections::{HashSet, VecDeque};
use url::Url;

/// A page queued for crawling
#[derive(Debug, Clone)]
pub struct CrawlTarget {
    /// The page URL to fetch
    pub url: Url,

    /// Link-distance from the start URL (start page is depth 0)
    pub depth: u32,

    /// The page that linked here, if any
    pub source_page: Option<Url>,
}

/// FIFO frontier with enqueue-time deduplication
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<CrawlTarget>,
    visited: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a target unless its URL has already been seen
    ///
    /// Returns true if the target was accepted.
    pub fn push(&mut self, target: CrawlTarget) -> bool {
        if !self.visited.insert(dedup_key(&target.url)) {
            return false;
        }
        self.queue.push_back(target);
        true
    }

    /// Pops the next target in FIFO order
    pub fn pop(&mut self) -> Option<CrawlTarget> {
        self.queue.pop_front()
    }

    /// Whether this URL has already been enqueued at some point
    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(&dedup_key(url))
    }

    /// Number of distinct page URLs ever enqueued
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of targets still waiting
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(url: &str, depth: u32) -> CrawlTarget {
        CrawlTarget {
            url: Url::parse(url).unwrap(),
            depth,
            source_page: None,
        }
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new();
        frontier.push(target("https://example.com/a", 0));
        frontier.push(target("https://example.com/b", 1));
        frontier.push(target("https://example.com/c", 1));

        assert_eq!(frontier.pop().unwrap().url.path(), "/a");
        assert_eq!(frontier.pop().unwrap().url.path(), "/b");
        assert_eq!(frontier.pop().unwrap().url.path(), "/c");
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn test_duplicate_rejected_at_enqueue() {
        let mut frontier = Frontier::new();
        assert!(frontier.push(target("https://example.com/a", 0)));
        assert!(!frontier.push(target("https://example.com/a", 1)));
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.visited_count(), 1);
    }

    #[test]
    fn test_duplicate_rejected_after_pop() {
        let mut frontier = Frontier::new();
        frontier.push(target("https://example.com/a", 0));
        frontier.pop();
        // The page was already visited; it must not be re-enqueued.
        assert!(!frontier.push(target("https://example.com/a", 2)));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_fragment_variants_are_one_page() {
        let mut frontier = Frontier::new();
        assert!(frontier.push(target("https://example.com/a", 0)));
        assert!(!frontier.push(target("https://example.com/a#section", 0)));
        assert_eq!(frontier.visited_count(), 1);
    }

    #[test]
    fn test_is_visited_after_push() {
        let mut frontier = Frontier::new();
        let url = Url::parse("https://example.com/a").unwrap();
        assert!(!frontier.is_visited(&url));
        frontier.push(target("https://example.com/a", 0));
        assert!(frontier.is_visited(&url));
    }

    #[test]
    fn test_visited_count_monotonic() {
        let mut frontier = Frontier::new();
        frontier.push(target("https://example.com/a", 0));
        frontier.push(target("https://example.com/b", 0));
        frontier.pop();
        frontier.pop();
        // Popping never shrinks the visited set.
        assert_eq!(frontier.visited_count(), 2);
    }
}
