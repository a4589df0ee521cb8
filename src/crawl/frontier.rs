// src/crawl/frontier.rs
// =============================================================================
// This module manages the crawl frontier: which URLs are waiting to be
// visited, and which have already been visited.
//
// How it works:
// 1. The frontier starts seeded with one URL (the one from the command line)
// 2. next_target() hands out pending URLs in first-in-first-out order
// 3. mark_visited() records a URL once we commit to fetching it
// 4. enqueue() appends newly discovered URLs to the back of the queue
//
// The page cap:
// - The frontier owns the cap (max_pages) so the crawl loop can ask
//   cap_reached() BEFORE dequeuing - this guarantees we never fetch more
//   than max_pages pages, no matter how many URLs are still queued
//
// Deduplication is lazy on purpose:
// - enqueue() does NOT check the pending queue for duplicates
// - Instead, the crawl loop skips any dequeued URL that was already visited
// - The queue may briefly hold duplicates, but no page is ever fetched twice,
//   and the cap halts the loop long before the queue could grow unbounded
//
// Rust concepts:
// - HashSet: To track visited URLs (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first crawling
// - Ownership: The orchestrator owns the one Frontier; nothing is shared
// =============================================================================

use std::collections::{HashSet, VecDeque};

// Holds all crawl bookkeeping for one run
//
// There is exactly one Frontier per crawl, owned by the orchestrator.
// No locking is needed because nothing else can touch it.
#[derive(Debug)]
pub struct Frontier {
    /// URLs waiting to be visited, in discovery order (FIFO)
    pending: VecDeque<String>,
    /// URLs we have already committed to fetching
    visited: HashSet<String>,
    /// Maximum number of distinct pages to fetch in this run
    max_pages: usize,
}

impl Frontier {
    // Creates a frontier seeded with the starting URL
    //
    // Parameters:
    //   seed_url: the URL the crawl starts from (already validated by the CLI)
    //   max_pages: the page cap (default 5, set via --max-pages)
    pub fn new(seed_url: &str, max_pages: usize) -> Self {
        let mut pending = VecDeque::new();
        pending.push_back(seed_url.to_string());

        Frontier {
            pending,
            visited: HashSet::new(),
            max_pages,
        }
    }

    // Removes and returns the next pending URL, or None if the queue is empty
    //
    // Note: the returned URL may already be visited (lazy dedup) - the
    // caller must check is_visited() and skip it without counting it
    // against the cap.
    pub fn next_target(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    // Returns true if this URL was already dequeued and processed
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    // Records that a URL is being fetched
    //
    // HashSet::insert is idempotent: inserting the same URL twice leaves
    // the set (and the visited count) unchanged.
    pub fn mark_visited(&mut self, url: &str) {
        self.visited.insert(url.to_string());
    }

    // Appends discovered URLs to the back of the queue, preserving the
    // order they appeared in the page
    //
    // No dedup against the pending queue here - see the module header.
    pub fn enqueue(&mut self, urls: Vec<String>) {
        for url in urls {
            self.pending.push_back(url);
        }
    }

    // Returns true once we have visited as many pages as the cap allows
    //
    // The crawl loop checks this before every dequeue, so at most
    // max_pages pages are ever fetched.
    pub fn cap_reached(&self) -> bool {
        self.visited_count() >= self.max_pages
    }

    // How many pages have been visited so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is VecDeque?
//    - A double-ended queue (deck)
//    - push_back() adds to the end, pop_front() removes from the start
//    - Perfect for breadth-first search (BFS): pages are visited in the
//      order they were discovered
//
// 2. What is HashSet?
//    - A set of unique items (no duplicates)
//    - Very fast lookup: O(1) to check if an item exists
//    - We use it to make sure no page is fetched twice
//
// 3. Why does next_target() return Option<String>?
//    - Option represents a value that might not exist
//    - Some(url) = there is a pending URL
//    - None = the queue is empty, the crawl is done
//
// 4. Why &str parameters but String storage?
//    - Callers lend us their URL with &str (no copy needed to look at it)
//    - When we store it (visited set, queue) we make our own owned String
//
// 5. Why not dedup in enqueue()?
//    - Checking the queue for duplicates would be O(n) per link
//    - The visited check at dequeue time already prevents double fetches
//    - A few duplicate entries in the queue cost almost nothing because
//      the cap stops the loop after max_pages dequeues anyway
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_first_target() {
        let mut frontier = Frontier::new("http://example.com", 5);
        assert_eq!(frontier.next_target(), Some("http://example.com".to_string()));
        assert_eq!(frontier.next_target(), None);
    }

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new("http://example.com", 5);
        frontier.enqueue(vec![
            "http://example.com/a".to_string(),
            "http://example.com/b".to_string(),
        ]);

        assert_eq!(frontier.next_target(), Some("http://example.com".to_string()));
        assert_eq!(frontier.next_target(), Some("http://example.com/a".to_string()));
        assert_eq!(frontier.next_target(), Some("http://example.com/b".to_string()));
        assert_eq!(frontier.next_target(), None);
    }

    #[test]
    fn test_mark_visited_is_idempotent() {
        let mut frontier = Frontier::new("http://example.com", 5);
        frontier.mark_visited("http://example.com");
        frontier.mark_visited("http://example.com");
        assert_eq!(frontier.visited_count(), 1);
    }

    #[test]
    fn test_enqueue_allows_duplicates_dequeue_filters() {
        // Lazy dedup: the queue may hold the same URL twice, but the
        // visited check means it is only ever processed once.
        let mut frontier = Frontier::new("http://example.com", 5);
        frontier.enqueue(vec![
            "http://example.com/a".to_string(),
            "http://example.com/a".to_string(),
        ]);

        let mut processed = Vec::new();
        while let Some(url) = frontier.next_target() {
            if frontier.is_visited(&url) {
                continue;
            }
            frontier.mark_visited(&url);
            processed.push(url);
        }

        assert_eq!(processed.len(), 2); // seed + /a, the duplicate is skipped
    }

    #[test]
    fn test_cap_reached_before_dequeue() {
        let mut frontier = Frontier::new("http://example.com", 2);
        frontier.enqueue(vec![
            "http://example.com/a".to_string(),
            "http://example.com/b".to_string(),
        ]);

        let mut processed = Vec::new();
        while !frontier.cap_reached() {
            let url = match frontier.next_target() {
                Some(url) => url,
                None => break,
            };
            if frontier.is_visited(&url) {
                continue;
            }
            frontier.mark_visited(&url);
            processed.push(url);
        }

        // Cap is 2, so only the seed and /a are visited even though /b
        // is still sitting in the queue.
        assert_eq!(
            processed,
            vec!["http://example.com".to_string(), "http://example.com/a".to_string()]
        );
        assert_eq!(frontier.visited_count(), 2);
    }

    #[test]
    fn test_cyclic_link_graph_never_exceeds_cap() {
        // Pages linking back to each other must not trick the crawler
        // into revisiting or blowing past the cap.
        let mut frontier = Frontier::new("http://example.com/a", 3);

        let mut fetches = 0;
        while !frontier.cap_reached() {
            let url = match frontier.next_target() {
                Some(url) => url,
                None => break,
            };
            if frontier.is_visited(&url) {
                continue;
            }
            frontier.mark_visited(&url);
            fetches += 1;

            // Every page links to both /a and /b (a 2-cycle)
            frontier.enqueue(vec![
                "http://example.com/a".to_string(),
                "http://example.com/b".to_string(),
            ]);
        }

        assert_eq!(fetches, 2); // only /a and /b exist in this graph
        assert!(frontier.visited_count() <= 3);
    }
}
