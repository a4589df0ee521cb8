// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Submodules:
// - frontier: The pending-URL queue and visited set, plus the page cap
// - orchestrator: The breadth-first crawl loop that ties everything together
//
// Features:
// - Breadth-first crawling starting from a seed URL
// - Respects same-hostname restriction (doesn't crawl external sites)
// - Hard cap on the number of pages fetched (default 5)
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod frontier;
mod orchestrator;

// Re-export the public API
pub use frontier::Frontier;
pub use orchestrator::crawl_site;
