//! Syslog example
//!
//! Loads a JSON configuration that routes everything to the system log, keeps
//! errors on a stream and silences debug output.
//!
//! Run with: cargo run --example syslog_logging

use rust_tagged_logger::prelude::*;
use rust_tagged_logger::{info, warn};

const CONFIG: &str = r#"{
    "syslog": { "identity": "tagged-logger-demo", "facility": "user" },
    "streams": [ { "target": "stderr", "levels": "error" } ],
    "disabled": ["debug"]
}"#;

fn main() -> Result<()> {
    println!("=== Rust Tagged Logger - Syslog Example ===\n");

    let config = LoggingConfig::from_json_str(CONFIG)?;
    rust_tagged_logger::global().apply_config(&config)?;

    let log = Logger::new("[demo]");
    info!(log, "sent to syslog at notice severity");
    warn!(log, "multi-line\nmessages are escaped for syslog");
    log.debug("disabled, never formatted");
    log.error("errors stay on stderr");

    rust_tagged_logger::close_system_log()?;

    println!("Check your system log (e.g. `journalctl -t tagged-logger-demo`).");
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
