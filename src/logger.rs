//! The shared logger: lazy singleton provider, scoped entry guard, and
//! dual-sink fan-out.
//!
//! ## Entry protocol
//!
//! [`Logger::entry`] is the sole lock-acquisition point. It blocks until the
//! logger is free and returns an [`Entry`] guard that owns the lock for its
//! whole lifetime, so fragments appended by one thread can never interleave
//! with another thread's entry. The first `append` writes the timestamp and
//! level prefix; dropping the guard writes the terminating newline and
//! releases the logger. Because termination rides on `Drop`, an early return
//! or panic in the caller cannot leave the lock held.
//!
//! ## Failure tolerance
//!
//! The two sinks fail independently. A file that cannot be opened is
//! reported once to standard error and the logger continues console-only;
//! write errors on either sink are absorbed rather than propagated, since a
//! logging fault must never crash the business logic doing the logging.

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use parking_lot::{Mutex, MutexGuard};

use crate::defaults;
use crate::format;
use crate::level::Level;
use crate::sink::{ConsoleSink, FileSink, SinkError};

/// Mutable sink state, only ever touched while holding the logger mutex.
struct Inner {
    console: ConsoleSink,
    file: FileSink,
}

impl Inner {
    /// Write the same text to both sinks.
    fn write_both(&mut self, text: &str) {
        let _ = self.console.write_all(text.as_bytes());
        self.file.write_str(text);
    }

    /// Write per-sink renditions of the same content (colored prefix to the
    /// console, plain prefix to the file).
    fn write_split(&mut self, console_text: &str, file_text: &str) {
        let _ = self.console.write_all(console_text.as_bytes());
        self.file.write_str(file_text);
    }

    fn flush(&mut self) {
        let _ = self.console.flush();
        self.file.flush();
    }
}

/// Process-wide dual-sink logger.
///
/// Normally reached through [`logger`] or the crate-level convenience
/// functions, but it can also be constructed explicitly and passed around
/// as a regular value, e.g. for tests or embedding.
pub struct Logger {
    inner: Mutex<Inner>,
}

impl Logger {
    /// Construct a logger writing to stdout and a freshly stamped file under
    /// [`defaults::LOG_DIR`].
    pub fn new() -> Self {
        Self::with_directory(defaults::LOG_DIR)
    }

    /// Construct a logger whose stamped log file lives under `dir`.
    pub fn with_directory(dir: impl AsRef<Path>) -> Self {
        Self::build(FileSink::open_in(dir.as_ref()), Box::new(io::stdout()))
    }

    /// Construct a logger appending to an explicit file path.
    pub fn with_file(path: impl AsRef<Path>) -> Self {
        Self::build(FileSink::open(path.as_ref()), Box::new(io::stdout()))
    }

    /// Construct a logger with no file sink at all.
    pub fn console_only(console: ConsoleSink) -> Self {
        Self {
            inner: Mutex::new(Inner {
                console,
                file: FileSink::inactive(),
            }),
        }
    }

    fn build(file: Result<FileSink, SinkError>, console: ConsoleSink) -> Self {
        Self {
            inner: Mutex::new(Inner {
                console,
                file: absorb_open_failure(file),
            }),
        }
    }

    /// Begin an entry at `level`.
    ///
    /// Blocks the calling thread until no other entry is in progress. The
    /// returned guard holds the logger exclusively until it is dropped.
    pub fn entry(&self, level: Level) -> Entry<'_> {
        Entry {
            inner: self.inner.lock(),
            level,
            start_pending: true,
        }
    }

    /// Begin an informational entry.
    pub fn info(&self) -> Entry<'_> {
        self.entry(Level::Info)
    }

    /// Begin a warning entry.
    pub fn warning(&self) -> Entry<'_> {
        self.entry(Level::Warning)
    }

    /// Begin an error entry.
    pub fn error(&self) -> Entry<'_> {
        self.entry(Level::Error)
    }

    /// Begin a debug entry.
    pub fn debug(&self) -> Entry<'_> {
        self.entry(Level::Debug)
    }

    /// Replace the file sink.
    ///
    /// `None` opens a freshly stamped file under [`defaults::LOG_DIR`]. The
    /// previous handle is closed when it is replaced. Runs under the logger
    /// mutex so no in-flight entry can observe a half-updated sink.
    pub fn reopen_file(&self, path: Option<&Path>) {
        let sink = match path {
            Some(path) => FileSink::open(path),
            None => FileSink::open_in(Path::new(defaults::LOG_DIR)),
        };
        self.inner.lock().file = absorb_open_failure(sink);
    }

    /// Redirect the console sink, under the logger mutex.
    pub fn redirect_console(&self, console: ConsoleSink) {
        self.inner.lock().console = console;
    }

    /// Path of the active log file, or `None` when the file sink is
    /// inactive.
    pub fn file_path(&self) -> Option<PathBuf> {
        self.inner.lock().file.path().map(Path::to_path_buf)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Report a failed open once and fall back to an inactive sink.
fn absorb_open_failure(result: Result<FileSink, SinkError>) -> FileSink {
    result.unwrap_or_else(|err| {
        eprintln!("duolog: {err}; continuing console-only");
        FileSink::inactive()
    })
}

/// An in-progress log entry holding exclusive access to both sinks.
///
/// The first [`append`](Entry::append) writes `timestamp + level prefix`
/// ahead of the fragment; subsequent appends write their fragments verbatim.
/// Fragments containing newlines are expanded so continuation lines align
/// under the prefix column. Dropping the entry writes the terminating
/// newline to both sinks, flushes them, and releases the logger.
pub struct Entry<'a> {
    inner: MutexGuard<'a, Inner>,
    level: Level,
    start_pending: bool,
}

impl Entry<'_> {
    /// Append one fragment to the entry, writing it immediately to both
    /// sinks. Returns `&mut Self` so appends chain.
    pub fn append(&mut self, fragment: impl Display) -> &mut Self {
        if self.start_pending {
            self.start_pending = false;
            let stamp = format::entry_timestamp();
            let console = format!("{stamp}{}", self.level.console_prefix());
            let plain = format!("{stamp}{}", self.level.plain_prefix());
            self.inner.write_split(&console, &plain);
        }
        let text = format::indent_continuations(&fragment.to_string());
        self.inner.write_both(&text);
        self.inner.flush();
        self
    }

    /// Severity this entry was begun at.
    pub fn level(&self) -> Level {
        self.level
    }
}

impl fmt::Write for Entry<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

impl Drop for Entry<'_> {
    fn drop(&mut self) {
        self.inner.write_both("\n");
        self.inner.flush();
    }
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Shared process-wide logger, constructed on first use.
///
/// Concurrent first calls construct exactly once and every caller observes
/// the same fully built instance. A file-sink failure during construction
/// publishes a console-only instance rather than an unusable one.
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// (Re)configure the shared logger.
///
/// `path` selects the log file (`None` auto-generates a stamped path under
/// [`defaults::LOG_DIR`]); `console` optionally redirects the console
/// stream. Safe to call repeatedly; every call reopens the file sink.
pub fn init(path: Option<&Path>, console: Option<ConsoleSink>) -> &'static Logger {
    let logger = GLOBAL.get_or_init(|| Logger::console_only(Box::new(io::stdout())));
    logger.reopen_file(path);
    if let Some(console) = console {
        logger.redirect_console(console);
    }
    logger
}
