//! Output sinks: the redirectable console stream and the append-mode log file.
//!
//! The file half of the fan-out is deliberately failure-tolerant. Opening can
//! fail (missing permissions, unwritable directory) and that failure is
//! surfaced once as a [`SinkError`]; afterwards the sink simply stays
//! inactive and every write to it is dropped. A file-system fault must never
//! stall or crash the caller's own logging.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::format;

/// Writable destination for the console half of the fan-out.
///
/// Defaults to standard output but may be redirected to any writable stream,
/// e.g. a capture buffer in tests or standard error.
pub type ConsoleSink = Box<dyn Write + Send>;

/// Errors raised while opening the file half of the fan-out.
///
/// Reported once at (re)initialization time and never propagated out of the
/// logging call path.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The log directory could not be created.
    #[error("failed to create log directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The log file could not be created or opened for appending.
    #[error("failed to open log file {path:?}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Append-mode log file handle, possibly inactive.
pub struct FileSink {
    file: Option<File>,
    path: Option<PathBuf>,
}

impl FileSink {
    /// A sink that silently drops everything written to it.
    pub fn inactive() -> Self {
        Self {
            file: None,
            path: None,
        }
    }

    /// Open `path` for appending, creating parent directories as needed.
    pub fn open(path: &Path) -> Result<Self, SinkError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| SinkError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SinkError::OpenFile {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            file: Some(file),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a freshly stamped file under `dir`,
    /// e.g. `logs/2026-08-23_14-05-09.log`.
    pub fn open_in(dir: &Path) -> Result<Self, SinkError> {
        Self::open(&dir.join(format!("{}.log", format::file_stamp())))
    }

    /// Path of the active file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether writes currently reach a real file.
    pub fn is_active(&self) -> bool {
        self.file.is_some()
    }

    /// Write `text` to the file. Inactive sinks and failed writes drop the
    /// text silently.
    pub fn write_str(&mut self, text: &str) {
        if let Some(file) = self.file.as_mut() {
            let _ = file.write_all(text.as_bytes());
        }
    }

    /// Flush the underlying file, if any.
    pub fn flush(&mut self) {
        if let Some(file) = self.file.as_mut() {
            let _ = file.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("deeper").join("run.log");

        let mut sink = FileSink::open(&path).expect("open");
        assert!(sink.is_active());
        assert_eq!(sink.path(), Some(path.as_path()));

        sink.write_str("hello\n");
        sink.flush();
        assert_eq!(fs::read_to_string(&path).expect("read"), "hello\n");
    }

    #[test]
    fn open_in_stamps_the_file_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sink = FileSink::open_in(dir.path()).expect("open_in");

        let name = sink
            .path()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .expect("file name")
            .to_owned();
        assert!(name.ends_with(".log"), "name: {name}");
        assert_eq!(name.len(), "2026-08-23_14-05-09.log".len());
    }

    #[test]
    fn open_reports_an_unusable_parent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"not a directory").expect("write blocker");

        // The parent path is a regular file, so directory creation must fail.
        let result = FileSink::open(&blocker.join("sub").join("run.log"));
        assert!(matches!(result, Err(SinkError::CreateDir { .. })));
    }

    #[test]
    fn open_appends_to_an_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("run.log");

        let mut first = FileSink::open(&path).expect("first open");
        first.write_str("one\n");
        drop(first);

        let mut second = FileSink::open(&path).expect("second open");
        second.write_str("two\n");
        second.flush();

        assert_eq!(fs::read_to_string(&path).expect("read"), "one\ntwo\n");
    }

    #[test]
    fn inactive_sink_swallows_writes() {
        let mut sink = FileSink::inactive();
        assert!(!sink.is_active());
        assert_eq!(sink.path(), None);
        sink.write_str("dropped");
        sink.flush();
    }
}
