//! File logging example
//!
//! Routes warnings and errors to an append-only file while the other levels
//! keep writing to stdout.
//!
//! Run with: cargo run --example file_logging

use rust_tagged_logger::prelude::*;
use rust_tagged_logger::{error, info};

fn main() -> Result<()> {
    println!("=== Rust Tagged Logger - File Logging Example ===\n");

    let path = std::env::temp_dir().join("rust_tagged_logger_demo.log");
    rust_tagged_logger::bind_to_stream(path.as_path(), &[Level::Warn, Level::Error])?;

    let log = Logger::new("[import]");
    info!(log, "importing %d rows", 1200);
    log.warn("row 17 has an empty name");
    error!(log, "row %d rejected: %s", 44, "duplicate key");

    println!("Warnings and errors appended to {}:", path.display());
    let content = std::fs::read_to_string(&path)?;
    for line in content.lines().rev().take(2).collect::<Vec<_>>().into_iter().rev() {
        println!("   {}", line);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
