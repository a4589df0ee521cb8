// src/scanner/mod.rs
// =============================================================================
// This module contains all per-page analysis logic.
//
// Submodules:
// - fetch: Makes the GET request and returns headers + body
// - headers: Checks the fixed security header list and prints the report
// - links: Extracts same-site links from the HTML for the crawler to follow
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod fetch;
mod headers;
mod links;

// Re-export public items from submodules
// This lets users write `scanner::fetch_page()` instead of
// `scanner::fetch::fetch_page()`
pub use fetch::{build_client, fetch_page, FetchedPage};
pub use headers::{check_security_headers, SECURITY_HEADERS};
pub use links::extract_internal_links;
