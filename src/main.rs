// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate the seed URL (must be present and start with http)
// 3. Run the crawl
// 4. Exit with proper code (0 = completed, 1 = bad seed URL, 2 = error)
//
// Note on exit codes: individual pages failing to fetch during the crawl
// is NOT an error - those are reported on stderr as they happen, and the
// process still exits 0.
//
// Rust concepts used:
// - async/await: Because the crawl awaits network responses
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle the different outcomes
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod crawl;         // src/crawl/ - frontier + crawl loop
mod scanner;       // src/scanner/ - fetching, header checks, link extraction

// Import items we need from our modules
use cli::{validate_seed_url, Cli};
use clap::Parser;  // Parser trait enables the parse() method

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl completed (fetch failures along the way are still 0)
//   Ok(1) = seed URL missing or invalid
//   Err = unexpected internal error (exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Validate the seed before touching the network
    let seed_url = match validate_seed_url(cli.url.as_deref()) {
        Ok(url) => url,
        Err(message) => {
            eprintln!("{}", message);
            return Ok(1);
        }
    };

    // Run the crawl; per-page results are printed as they happen
    crawl::crawl_site(seed_url, cli.max_pages).await?;

    Ok(0)
}
