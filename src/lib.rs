//! # duolog — dual-sink singleton logger
//!
//! A process-wide, thread-safe logging facility that mirrors every entry to
//! both the console and a persistent log file, tagging each entry with a
//! severity level, a timestamp, and consistent formatting.
//!
//! ## Model
//!
//! - One [`Logger`] per process (lazily constructed on first use), two
//!   sinks: a redirectable console stream and an append-mode log file named
//!   after its creation time, e.g. `logs/2026-08-23_14-05-09.log`.
//! - An entry is composed under exclusive access: [`Logger::entry`] blocks
//!   until the logger is free and returns an [`Entry`] guard; every
//!   `append` writes immediately to both sinks; dropping the guard writes
//!   the terminating newline and releases the logger. Entries from
//!   different threads therefore never interleave.
//! - Console output colorizes the level label; file output is the identical
//!   text without escape sequences. Fragments containing newlines are
//!   re-indented so continuation lines align under the prefix column.
//! - Sink failures degrade gracefully: an unopenable log file is reported
//!   once and logging continues console-only.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use duolog::Level;
//!
//! duolog::info().append("service started");
//! duolog::log(Level::Warning).append("disk nearly full: ").append(93).append("%");
//! duolog::error().append("first line\nsecond line stays aligned");
//! ```
//!
//! The global accessor is a convenience; a [`Logger`] can equally be
//! constructed explicitly and passed to whatever needs it:
//!
//! ```rust,no_run
//! let logger = duolog::Logger::with_directory("logs");
//! logger.debug().append("explicit instance");
//! ```

pub mod format;
pub mod level;
pub mod logger;
pub mod sink;

pub use level::Level;
pub use logger::{init, logger, Entry, Logger};
pub use sink::{ConsoleSink, FileSink, SinkError};

/// The current version of the crate, populated from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values.
pub mod defaults {
    /// Directory auto-generated log files are created under, relative to
    /// the working directory.
    pub const LOG_DIR: &str = "logs";
}

/// Begin an entry on the shared logger at `level`.
///
/// Blocks until no other entry is in progress anywhere in the process.
pub fn log(level: Level) -> Entry<'static> {
    logger().entry(level)
}

/// Begin an informational entry on the shared logger.
pub fn info() -> Entry<'static> {
    log(Level::Info)
}

/// Begin a warning entry on the shared logger.
pub fn warning() -> Entry<'static> {
    log(Level::Warning)
}

/// Begin an error entry on the shared logger.
pub fn error() -> Entry<'static> {
    log(Level::Error)
}

/// Begin a debug entry on the shared logger.
pub fn debug() -> Entry<'static> {
    log(Level::Debug)
}
