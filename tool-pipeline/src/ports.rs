//! Platform capabilities injected by the host.
//!
//! Upload and download are incidental I/O for the orchestration core, so
//! they are expressed as ports the presentation layer implements or reuses:
//! a text reader and a text sink. The file-backed implementations cover
//! desktop-style hosts; [`MemorySink`] covers tests and headless embedding.

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::fs;

use crate::error::PipelineResult;

/// Supplies input text from the host platform.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Reads the full content as text.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Io`](crate::PipelineError::Io) when the
    /// underlying read fails.
    async fn read_text(&self) -> PipelineResult<String>;
}

/// Receives result text on the host platform.
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Persists `text` under the supplied file name.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Io`](crate::PipelineError::Io) when the
    /// underlying write fails.
    async fn write_text(&self, file_name: &str, text: &str) -> PipelineResult<()>;
}

/// Reads content from a file on the local filesystem.
#[derive(Clone, Debug)]
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn read_text(&self) -> PipelineResult<String> {
        Ok(fs::read_to_string(&self.path).await?)
    }
}

/// Writes results into a directory on the local filesystem.
#[derive(Clone, Debug)]
pub struct DirectoryResultSink {
    dir: PathBuf,
}

impl DirectoryResultSink {
    /// Creates a sink writing into `dir`. The directory must exist.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ResultSink for DirectoryResultSink {
    async fn write_text(&self, file_name: &str, text: &str) -> PipelineResult<()> {
        fs::write(self.dir.join(file_name), text).await?;
        Ok(())
    }
}

/// In-memory sink recording every write; for tests and headless hosts.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(String, String)>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns the recorded `(file name, text)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if a previous writer panicked while holding the lock.
    #[must_use]
    pub fn take(&self) -> Vec<(String, String)> {
        std::mem::take(&mut *self.entries.lock().expect("sink lock"))
    }
}

#[async_trait]
impl ResultSink for MemorySink {
    async fn write_text(&self, file_name: &str, text: &str) -> PipelineResult<()> {
        self.entries
            .lock()
            .expect("sink lock")
            .push((file_name.to_owned(), text.to_owned()));
        Ok(())
    }
}
