//! Abstractions for filesystem access to enable testing and mocking.
//!
//! The `FileSystem` trait lets the collector read the real `/proc` on Linux
//! and an in-memory mock everywhere else.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Abstraction for filesystem operations.
pub trait FileSystem: Send + Sync {
    /// Opens a file for buffered reading.
    ///
    /// The file is closed when the returned reader is dropped.
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + Send + '_>>;

    /// Checks if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation that delegates to `std::fs`.
///
/// Use this in production to read from the actual `/proc` filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    /// Creates a new `RealFs` instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + Send + '_>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    #[test]
    fn test_real_fs_open() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "MemTotal:        1009236 kB").unwrap();

        let fs = RealFs::new();
        let mut content = String::new();
        fs.open(file.path())
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "MemTotal:        1009236 kB\n");
    }

    #[test]
    fn test_real_fs_open_missing() {
        let fs = RealFs::new();
        let err = fs.open(Path::new("/nonexistent/path/12345")).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_real_fs_exists() {
        let dir = tempfile::tempdir().unwrap();
        let fs = RealFs::new();
        assert!(fs.exists(dir.path()));
        assert!(!fs.exists(&dir.path().join("missing")));
    }
}
