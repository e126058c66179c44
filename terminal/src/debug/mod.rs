//! # Logging Infrastructure
//!
//! File-based logging for the mint terminal.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/mint-terminal.log` (daily rotation)
//! - **Non-blocking writes**: Log I/O never stalls the frame loop
//! - **Panic hook**: Crashes land in the log with their location
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `mint_terminal=debug,info`)
//! - `LOG_DIR`: Log directory (default `logs`)

use std::fs;
use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "mint-terminal.log";

/// Initialize the logging system.
///
/// Sets up daily-rotated file logging with non-blocking writes and wires
/// the panic hook so crashes are captured. Called once at startup.
pub fn init() {
    let log_dir = std::env::var("LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("logs"));

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mint_terminal=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!(
        log_file = %log_dir.join(LOG_FILE).display(),
        "Logging initialized"
    );

    setup_panic_hook();

    // The guard flushes buffered log lines on drop; the logger lives for
    // the whole process, so leak it
    std::mem::forget(guard);
}

/// Log panics with their location before the default hook runs
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        tracing::error!(location = %location, "PANIC: {}", panic_info);
        default_panic(panic_info);
    }));
}
