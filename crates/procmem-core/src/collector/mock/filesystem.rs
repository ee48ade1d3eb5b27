//! In-memory mock filesystem for testing collectors without real `/proc`.
//!
//! This module provides `MockFs` which simulates a filesystem in memory,
//! allowing tests to run on macOS and in CI environments without Linux.

use crate::collector::traits::FileSystem;
use std::collections::{HashMap, HashSet};
use std::io::{self, BufRead, Cursor};
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
///
/// Stores file contents in memory. Files can also be marked unreadable to
/// simulate permission errors on paths that exist.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    /// Map from path to file contents.
    files: HashMap<PathBuf, Vec<u8>>,
    /// Paths that exist but fail to open.
    unreadable: HashSet<PathBuf>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a file with the given content.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.add_bytes(path, content.into().into_bytes());
    }

    /// Adds a file with raw, possibly non-UTF-8 content.
    pub fn add_bytes(&mut self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref().to_path_buf();
        self.unreadable.remove(&path);
        self.files.insert(path, content.into());
    }

    /// Marks a path as existing but not openable (permission denied).
    pub fn add_unreadable(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        self.files.remove(&path);
        self.unreadable.insert(path);
    }

    /// Removes a file. Returns `true` if it existed.
    pub fn remove_file(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let removed = self.files.remove(path).is_some();
        self.unreadable.remove(path) || removed
    }
}

impl FileSystem for MockFs {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + Send + '_>> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {:?}", path),
            ));
        }

        let content = self.files.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )
        })?;
        Ok(Box::new(Cursor::new(content.as_slice())))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.unreadable.contains(path)
    }
}
