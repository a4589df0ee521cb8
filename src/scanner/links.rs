// src/scanner/links.rs
// =============================================================================
// This module extracts the same-site links from a fetched page, so the
// crawler can follow them.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to:
// - Resolve relative hrefs against the page URL (like a browser does)
// - Pull out the hostname for the same-site check
//
// What counts as "same site" here:
// - The resolved URL's hostname must EXACTLY equal the seed's hostname
// - Subdomains do not match (www.example.com != example.com)
// - Scheme and port are ignored - hostname only
//
// Rust concepts:
// - Iterators and closures: For filtering the candidate links
// - Option<T>: For hrefs that don't resolve to a usable URL
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

// Extracts every in-domain link from a page
//
// Parameters:
//   html: the HTML body to parse
//   current_url: the URL of the page (for resolving relative links)
//   base_host: the seed URL's hostname - only links on this host are kept
//
// Returns: the matching absolute URLs, in document order, duplicates
// removed by exact string comparison.
//
// Example:
//   html = "<a href='/docs'>Docs</a> <a href='https://other.com'>x</a>"
//   current_url = "https://example.com/page"
//   base_host = "example.com"
//   result = ["https://example.com/docs"]
pub fn extract_internal_links(html: &str, current_url: &str, base_host: &str) -> Vec<String> {
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // Create a CSS selector to find all <a> tags with an href
    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    // Parse the page URL once - we resolve every relative href against it
    let base = match Url::parse(current_url) {
        Ok(url) => url,
        Err(_) => {
            // Can't resolve anything without a valid page URL
            return links;
        }
    };

    for element in document.select(&selector) {
        let href = match element.value().attr("href") {
            Some(href) if !href.is_empty() => href,
            _ => continue, // empty href attributes are excluded
        };

        // Resolve to an absolute URL; unresolvable hrefs are silently dropped
        let absolute = match resolve_url(&base, href) {
            Some(url) => url,
            None => continue,
        };

        // Keep only links on the seed's exact hostname
        if absolute.host_str() != Some(base_host) {
            continue;
        }

        let absolute = absolute.to_string();

        // Collapse duplicates but keep first-seen document order
        if seen.insert(absolute.clone()) {
            links.push(absolute);
        }
    }

    links
}

// Resolves a possibly-relative href to an absolute URL
//
// Examples:
//   base = "https://example.com/page"
//   href = "/docs" -> Some(https://example.com/docs)
//   href = "../other" -> Some(https://example.com/other)
//   href = "https://other.com" -> Some(https://other.com/)
//   href = "http://[bad" -> None (unparseable, skip it)
fn resolve_url(base: &Url, href: &str) -> Option<Url> {
    // Try to parse href as a URL
    // If it's already absolute (has a scheme), this works
    // If it's relative, this fails, so we join it with base
    match Url::parse(href) {
        Ok(url) => Some(url),
        Err(_) => base.join(href).ok(),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why compare host_str() instead of the whole URL origin?
//    - Crawl scope is defined by hostname only
//    - http://example.com and https://example.com are both in scope,
//      but www.example.com is not
//    - Tightening this (scheme + port) would change which pages get
//      crawled, so we keep it as-is
//
// 2. What happens to mailto: and javascript: hrefs?
//    - They parse as valid URLs but have no hostname
//    - host_str() returns None for them, so the same-site check drops
//      them without any special-casing
//
// 3. Why a HashSet AND a Vec?
//    - The Vec keeps document order (the order links were discovered)
//    - The HashSet gives O(1) duplicate detection
//    - seen.insert() returns false if the value was already present,
//      which is how we skip duplicates in one step
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_link_resolves_against_page() {
        let html = r#"<a href="/docs">Docs</a>"#;
        let links = extract_internal_links(html, "https://example.com/page", "example.com");
        assert_eq!(links, vec!["https://example.com/docs"]);
    }

    #[test]
    fn test_other_host_is_excluded() {
        let html = r#"
            <a href="http://example.com/a">A</a>
            <a href="http://other.com/x">X</a>
        "#;
        let links = extract_internal_links(html, "http://example.com", "example.com");
        assert_eq!(links, vec!["http://example.com/a"]);
    }

    #[test]
    fn test_subdomain_is_not_same_site() {
        let html = r#"<a href="https://www.example.com/">www</a>"#;
        let links = extract_internal_links(html, "https://example.com", "example.com");
        assert!(links.is_empty());
    }

    #[test]
    fn test_scheme_difference_still_matches() {
        // Same hostname over a different scheme stays in scope
        let html = r#"<a href="https://example.com/secure">S</a>"#;
        let links = extract_internal_links(html, "http://example.com", "example.com");
        assert_eq!(links, vec!["https://example.com/secure"]);
    }

    #[test]
    fn test_empty_href_is_excluded() {
        let html = r#"<a href="">Empty</a><a href="/ok">Ok</a>"#;
        let links = extract_internal_links(html, "http://example.com", "example.com");
        assert_eq!(links, vec!["http://example.com/ok"]);
    }

    #[test]
    fn test_mailto_has_no_host() {
        let html = r#"<a href="mailto:test@example.com">Email</a>"#;
        let links = extract_internal_links(html, "http://example.com", "example.com");
        assert!(links.is_empty());
    }

    #[test]
    fn test_duplicates_collapse_in_document_order() {
        let html = r#"
            <a href="/b">B</a>
            <a href="/a">A</a>
            <a href="/b">B again</a>
        "#;
        let links = extract_internal_links(html, "http://example.com", "example.com");
        assert_eq!(
            links,
            vec!["http://example.com/b", "http://example.com/a"]
        );
    }

    #[test]
    fn test_unparseable_page_url_yields_nothing() {
        let html = r#"<a href="/docs">Docs</a>"#;
        let links = extract_internal_links(html, "not a url", "example.com");
        assert!(links.is_empty());
    }

    #[test]
    fn test_query_and_fragment_are_distinct_targets() {
        // No canonicalization: ?q= and #frag variants are separate URLs
        let html = r#"
            <a href="/page">Plain</a>
            <a href="/page?q=1">Query</a>
            <a href="/page#top">Fragment</a>
        "#;
        let links = extract_internal_links(html, "http://example.com", "example.com");
        assert_eq!(
            links,
            vec![
                "http://example.com/page",
                "http://example.com/page?q=1",
                "http://example.com/page#top",
            ]
        );
    }
}
