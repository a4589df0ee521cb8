// src/crawl/orchestrator.rs
// =============================================================================
// This module drives the crawl: it owns the frontier and runs the main loop.
//
// One iteration of the loop:
// 1. Stop if the page cap has been reached (checked BEFORE dequeuing)
// 2. Pop the next URL; stop if the queue is empty
// 3. Skip it if it was already visited (lazy dedup)
// 4. Mark it visited and announce the scan
// 5. Fetch the page
// 6. On success: print the security header report, extract same-site
//    links, and enqueue the ones we haven't visited yet
// 7. On failure: print the error and carry on with the next URL
//
// There is no concurrency here on purpose: one fetch at a time, in
// discovery order. No retries, no backoff. A page that fails is simply
// reported and left behind.
//
// Rust concepts:
// - while loops with early break: The two termination conditions
// - match on Result: Fetch failures are handled, never propagated
// =============================================================================

use anyhow::Result;
use url::Url;

use crate::crawl::Frontier;
use crate::scanner;

// Crawls a website starting from the seed URL and reports security
// headers for every page visited
//
// Parameters:
//   seed_url: where the crawl starts (already validated by the CLI)
//   max_pages: the page cap - at most this many pages are fetched
//
// Returns Ok(()) on normal completion. Individual fetch failures are
// logged and never turn into an error here; only setup problems (like
// failing to build the HTTP client) can.
pub async fn crawl_site(seed_url: &str, max_pages: usize) -> Result<()> {
    let client = scanner::build_client()?;

    // The seed's hostname scopes the whole crawl. If the seed has no
    // extractable hostname, no link can match it, so the crawl ends
    // after the seed attempt - same outcome as the fetch failing.
    let base_host = Url::parse(seed_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_default();

    let mut frontier = Frontier::new(seed_url, max_pages);

    while !frontier.cap_reached() {
        let current_url = match frontier.next_target() {
            Some(url) => url,
            None => break, // nothing left to visit
        };

        // Lazy dedup: the queue may hand us a URL we already processed
        if frontier.is_visited(&current_url) {
            continue;
        }

        frontier.mark_visited(&current_url);

        println!("\n🔎 Scanning: {}", current_url);

        match scanner::fetch_page(&client, &current_url).await {
            Ok(page) => {
                scanner::check_security_headers(&current_url, &page.headers);

                let links =
                    scanner::extract_internal_links(&page.body, &current_url, &base_host);

                // Don't queue pages we already visited; the queue itself
                // is still allowed to hold duplicates (dequeue filters)
                let new_links: Vec<String> = links
                    .into_iter()
                    .filter(|link| !frontier.is_visited(link))
                    .collect();

                frontier.enqueue(new_links);
            }
            Err(e) => {
                // A failed page never stops the crawl
                eprintln!("❌ Failed to fetch {}: {}", current_url, e);
            }
        }
    }

    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why check cap_reached() at the top of the loop?
//    - The check has to happen before the dequeue, otherwise we could
//      fetch one page too many
//    - The queue can still hold plenty of URLs when we stop - that's
//      fine, they just never get fetched
//
// 2. Why is there no tokio::spawn here?
//    - The design is strictly sequential: one outstanding request at a
//      time, pages processed in the order they were discovered
//    - The frontier has exactly one owner (this function), so there is
//      nothing to synchronize
//
// 3. Why doesn't a fetch error use the ? operator?
//    - ? would propagate the error and end the whole crawl
//    - A single unreachable page shouldn't do that, so we match on the
//      Result and only log the failure
// -----------------------------------------------------------------------------
