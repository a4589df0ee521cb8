// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// One quirk: the URL argument is Option<String> even though it's required.
// If we let clap enforce it, a missing argument would exit with clap's own
// code (2). We want OUR error message and exit code 1, so we accept the
// missing value and validate it ourselves in validate_seed_url().
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: A value that might be absent
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "header-guardian",
    version = "0.1.0",
    about = "A CLI tool to crawl a website and audit HTTP security headers",
    long_about = "header-guardian crawls a website breadth-first from a seed URL and reports \
                  which common HTTP security headers are present or missing on each page. \
                  It stays on the seed's hostname and stops after a configurable page cap."
)]
pub struct Cli {
    /// Seed URL to start crawling from (e.g., https://example.com)
    ///
    /// This is a positional argument. It must include the scheme
    /// (http:// or https://).
    pub url: Option<String>,

    /// Maximum number of pages to visit (default: 5)
    ///
    /// The crawl stops once this many pages have been fetched, even if
    /// more in-domain links were discovered.
    ///
    /// #[arg(long, default_value_t = 5)] creates --max-pages flag with default value
    #[arg(long, default_value_t = 5)]
    pub max_pages: usize,
}

// Validates the seed URL argument
//
// Rules (checked before any network activity):
// - The argument must be present
// - It must start with "http" (covers both http:// and https://)
//
// Returns the URL on success, or an error message for stderr on failure.
pub fn validate_seed_url(url: Option<&str>) -> Result<&str, &'static str> {
    match url {
        Some(url) if url.starts_with("http") => Ok(url),
        _ => Err("⚠️  Please provide a valid URL (include http:// or https://)"),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 2. Why Option<String> for a required argument?
//    - clap would reject a missing required argument with exit code 2
//    - The contract for this tool is exit code 1 with a friendly message
//    - Accepting None lets main() decide the message and the exit code
//
// 3. What is usize?
//    - An unsigned integer type that's the size of a pointer
//    - Used for sizes, lengths, and counts (like our page cap)
//
// 4. Why Result<&str, &'static str>?
//    - On success we hand back the borrowed URL (no copy needed)
//    - On failure the message is a string literal, which lives for the
//      whole program ('static)
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_is_rejected() {
        assert!(validate_seed_url(None).is_err());
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        assert!(validate_seed_url(Some("ftp://example.com")).is_err());
    }

    #[test]
    fn test_http_url_is_accepted() {
        assert_eq!(
            validate_seed_url(Some("http://example.com")),
            Ok("http://example.com")
        );
    }

    #[test]
    fn test_https_url_is_accepted() {
        assert_eq!(
            validate_seed_url(Some("https://example.com")),
            Ok("https://example.com")
        );
    }
}
