//! Basic logger usage example
//!
//! Demonstrates the default stream routing, tag derivation, printf-style
//! calls, disabling a level and timers.
//!
//! Run with: cargo run --example basic_usage

use rust_tagged_logger::prelude::*;
use rust_tagged_logger::{debug, info, warn};

fn main() -> Result<()> {
    println!("=== Rust Tagged Logger - Basic Usage Example ===\n");

    let log = Logger::new("[server]");

    println!("1. Default routing (log/warn/info/debug -> stdout, error -> stderr):");
    log.log("plain log call");
    info!(log, "listening on %s:%d", "0.0.0.0", 8080);
    warn!(log, "config file %s missing, using defaults", "server.json");
    debug!(log, "payload %j", serde_json::json!({"id": 7, "ok": true}));
    log.error("this line goes to stderr");

    println!("\n2. Derived loggers extend the tag:");
    let worker = log.derive("[worker-1]");
    worker.info("started");

    println!("\n3. Multi-line messages stay one record:");
    worker.info("first line\nsecond line");

    println!("\n4. Timers report at debug level:");
    worker.time("warm up");
    std::thread::sleep(std::time::Duration::from_millis(15));
    worker.time_end("warm up");

    println!("\n5. Disabling debug:");
    rust_tagged_logger::disable(&[Level::Debug]);
    debug!(worker, "hidden");
    println!("   debug enabled: {}", worker.is_enabled(Level::Debug));

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
