//! Output destinations for the driver report.
//!
//! The driver writes its two result lines through [`OutputDestination`], so
//! the same code path prints to stdout, writes a file, or fills an
//! in-memory buffer under test.

use crate::errors::{Error, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Something the driver report can be written to.
pub trait OutputDestination: Send + Sync {
    /// Write string content to the destination.
    fn write_str(&self, content: &str) -> Result<()>;

    /// Flush any buffered content.
    fn flush(&self) -> Result<()>;

    /// Get a description of the destination for error messages.
    fn description(&self) -> String;
}

/// Writes the report to a file, replacing any previous content.
#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
}

impl FileDestination {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl OutputDestination for FileDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        std::fs::write(&self.path, content)
            .map_err(|e| Error::file_system("Failed to write output file", &self.path, e))
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory output destination for testing.
///
/// Clones share one buffer, so a test can hand a clone to the driver and
/// inspect the original afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    buffer: Arc<RwLock<String>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content of the buffer.
    pub fn get_content(&self) -> String {
        self.buffer
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_empty()
    }
}

impl OutputDestination for MemoryDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        self.buffer
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_str(content);
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}

/// Standard output destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDestination;

impl StdoutDestination {
    pub fn new() -> Self {
        Self
    }
}

impl OutputDestination for StdoutDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(content.as_bytes())
            .map_err(|e| Error::output(self.description(), e.to_string()))
    }

    fn flush(&self) -> Result<()> {
        io::stdout()
            .lock()
            .flush()
            .map_err(|e| Error::output(self.description(), e.to_string()))
    }

    fn description(&self) -> String {
        "stdout".to_string()
    }
}
