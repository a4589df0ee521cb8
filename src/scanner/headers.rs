// src/scanner/headers.rs
// =============================================================================
// This module checks a page's response headers against the fixed list of
// security headers we care about, and prints the per-page report.
//
// The header list:
// - Six well-known security response headers, baked in at build time
// - Every page report covers all six, in the same order, whether the
//   server sent them or not
//
// Lookups are case-insensitive:
// - Servers send header names in whatever casing they like
// - reqwest's HeaderMap stores names case-insensitively, so looking up
//   "Strict-Transport-Security" matches "strict-transport-security" too
//
// Rust concepts:
// - const arrays: A fixed list known at compile time
// - Tuples: Pairing each header name with its (optional) value
// =============================================================================

use reqwest::header::HeaderMap;

/// The security headers every page is checked for, in report order
pub const SECURITY_HEADERS: [&str; 6] = [
    "Strict-Transport-Security",
    "X-Content-Type-Options",
    "X-Frame-Options",
    "Content-Security-Policy",
    "Referrer-Policy",
    "Permissions-Policy",
];

// Builds the report data for one page
//
// Returns one entry per configured header, in SECURITY_HEADERS order:
//   (header_name, Some(value))  -> the header is present
//   (header_name, None)         -> the header is missing
//
// This is kept separate from printing so it can be unit tested.
pub fn collect_header_report(headers: &HeaderMap) -> Vec<(&'static str, Option<String>)> {
    SECURITY_HEADERS
        .iter()
        .map(|&name| {
            let value = headers.get(name).map(|value| {
                match value.to_str() {
                    Ok(s) => s.to_string(),
                    // Present but not valid UTF-8 - still counts as present
                    Err(_) => "[invalid UTF-8]".to_string(),
                }
            });
            (name, value)
        })
        .collect()
}

// Prints the security header report for one page
//
// Output format (one line per header):
//   🛡️ Security Headers on http://example.com
//   ✅ Strict-Transport-Security: max-age=31536000
//   ❌ X-Content-Type-Options is MISSING!
//   ...
//
// Pure reporting - nothing downstream consumes the result.
pub fn check_security_headers(url: &str, headers: &HeaderMap) {
    println!("🛡️ Security Headers on {}", url);

    for (name, value) in collect_header_report(headers) {
        match value {
            Some(value) => println!("✅ {}: {}", name, value),
            None => println!("❌ {} is MISSING!", name),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does &'static str mean?
//    - A string slice that lives for the whole program
//    - String literals (like our header names) are 'static because they
//      are compiled into the binary
//
// 2. How is HeaderMap case-insensitive?
//    - HTTP header names are case-insensitive by spec (RFC 9110)
//    - The http crate normalizes names to lowercase when storing them,
//      and normalizes your lookup key the same way
//    - So we can keep the canonical mixed-case names for display and
//      still match whatever casing the server used
//
// 3. Why Option<String> for the value?
//    - Some(value) = header present, here's what the server sent
//    - None = header missing
//    - Much clearer than sentinel values like an empty string
// -----------------------------------------------------------------------------
