// src/scanner/fetch.rs
// =============================================================================
// This module fetches a single page and hands back what the analyzer needs:
// the response headers and the HTML body.
//
// Key functionality:
// - One GET request per page, with a 5 second timeout (set on the Client)
// - Treats non-success status codes as fetch failures
// - Any failure becomes an anyhow error carrying the cause - the crawl
//   loop logs it and moves on, it never aborts the crawl
//
// Rust concepts:
// - async/await: The request suspends our single crawl task until the
//   response (or timeout) arrives
// - The ? operator: Propagates errors up to the caller
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::time::Duration;

/// How long we wait for any single page before giving up
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(5000);

// Everything the analyzer needs from one fetched page
//
// HeaderMap is reqwest's case-insensitive header mapping, so lookups
// later don't have to care how the server spelled its header names.
#[derive(Debug)]
pub struct FetchedPage {
    /// The raw response headers
    pub headers: HeaderMap,
    /// The response body as text (hopefully HTML)
    pub body: String,
}

// Builds the HTTP client shared by the whole crawl
//
// One client = one connection pool, reused across every request.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    Ok(client)
}

// Fetches a page with a GET request
//
// Parameters:
//   client: the shared HTTP client (borrowed, we don't own it)
//   url: the URL to fetch
//
// Returns: FetchedPage on success, or an error describing why the fetch
// failed (timeout, DNS failure, connection refused, bad status, ...).
//
// A non-2xx status is a failure here: there is no page worth analyzing
// behind a 404, and the caller reports the failure the same way it
// reports a network error.
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!("HTTP {}", response.status()));
    }

    // Grab the headers before .text() consumes the response
    let headers = response.headers().clone();
    let body = response.text().await?;

    Ok(FetchedPage { headers, body })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why set the timeout on the Client instead of per request?
//    - Every page in the crawl gets the same 5 second budget
//    - Setting it once at build time means no request can forget it
//
// 2. Why clone() the headers?
//    - response.text() takes ownership of the response (it consumes it
//      to read the body stream)
//    - We need the headers afterwards, so we copy them out first
//    - A HeaderMap for one response is small; this clone is cheap
//
// 3. What errors can the ? operator propagate here?
//    - send() fails on timeouts, DNS errors, refused connections, TLS
//      problems - anything that stops a response from arriving
//    - text() fails if the body can't be read or decoded
//    - All of them convert into anyhow::Error automatically
// -----------------------------------------------------------------------------
