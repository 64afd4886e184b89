#![deny(missing_docs)]
//! Shared logging utilities for the pull-to-refresh workspace.
//!
//! This crate provides the `refresh_*` logging macros used across the codebase,
//! a per-thread layout frame counter, and a minimal test initializer for the
//! global logger.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the current layout frame number.
    static FRAME: Cell<u64> = const { Cell::new(0) };
}

/// Sets the layout frame number for the current thread.
/// The host calls this once per layout pass, before reporting geometry.
pub fn set_frame(frame: u64) {
    FRAME.with(|v| v.set(frame));
}

/// Retrieves the layout frame number for the current thread.
/// Returns 0 if no frame has been set.
pub fn current_frame() -> u64 {
    FRAME.with(|v| v.get())
}

/// Logs a trace-level message prefixed with the current layout frame.
#[macro_export]
macro_rules! refresh_trace {
    ($($arg:tt)*) => {{
        log::trace!("[frame {}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message prefixed with the current layout frame.
#[macro_export]
macro_rules! refresh_info {
    ($($arg:tt)*) => {{
        log::info!("[frame {}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message prefixed with the current layout frame.
#[macro_export]
macro_rules! refresh_debug {
    ($($arg:tt)*) => {{
        log::debug!("[frame {}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message prefixed with the current layout frame.
#[macro_export]
macro_rules! refresh_warn {
    ($($arg:tt)*) => {{
        log::warn!("[frame {}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message prefixed with the current layout frame.
#[macro_export]
macro_rules! refresh_error {
    ($($arg:tt)*) => {{
        log::error!("[frame {}] {}", $crate::current_frame(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already have installed the logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
