//! Refresh orchestration over the fixed set of `/proc` sources.
//!
//! `MemProcCollector` reads `/proc/meminfo` and `/proc/self/status`, merges
//! the mapped values into its `AttributeStore`, and exports them on demand.

use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{trace, warn};

use crate::attributes::{AttributeStore, Attributes};
use crate::collector::traits::FileSystem;
use crate::options::Options;
use crate::procfs::{RawKeyValues, parse_key_value_lines};

/// System-wide memory statistics.
pub const MEMINFO_PATH: &str = "/proc/meminfo";
/// Status of the current process.
pub const SELF_STATUS_PATH: &str = "/proc/self/status";

/// Sources read by every refresh, in order.
pub const SOURCE_PATHS: [&str; 2] = [MEMINFO_PATH, SELF_STATUS_PATH];

/// Summary of one refresh pass.
///
/// Used for logging by the host; a refresh never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshStats {
    /// Sources that were opened and parsed.
    pub files_read: usize,
    /// Sources that could not be opened.
    pub files_missing: usize,
    /// Raw key-value pairs parsed across all sources.
    pub pairs_parsed: usize,
    /// Pairs that had an attribute name and were written to the store.
    pub attributes_merged: usize,
    /// Wall time of the pass.
    pub elapsed: Duration,
}

/// Collects memory and process attributes from `/proc`.
///
/// `refresh` and `export_into` both take `&self`; share the collector through
/// an `Arc` to refresh on one thread and export on others.
pub struct MemProcCollector<F: FileSystem> {
    fs: F,
    options: Options,
    store: AttributeStore,
}

impl<F: FileSystem> MemProcCollector<F> {
    /// Creates a collector with an empty attribute store.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `options` - Host-supplied options; `debug` enables failure logging
    pub fn new(fs: F, options: Options) -> Self {
        Self {
            fs,
            options,
            store: AttributeStore::new(),
        }
    }

    /// Returns the attribute store backing this collector.
    pub fn store(&self) -> &AttributeStore {
        &self.store
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Returns a mutable reference to the filesystem.
    ///
    /// Lets tests change the mock `/proc` between refreshes.
    pub fn fs_mut(&mut self) -> &mut F {
        &mut self.fs
    }

    /// Runs one refresh pass over all sources.
    ///
    /// An unreadable source contributes nothing and leaves previously cached
    /// values in place.
    pub fn refresh(&self) -> RefreshStats {
        let start = Instant::now();
        let mut stats = RefreshStats::default();

        for path in SOURCE_PATHS {
            match self.read_source(Path::new(path)) {
                Some(raw) => {
                    stats.files_read += 1;
                    stats.pairs_parsed += raw.len();
                    stats.attributes_merged += self.store.merge_from_raw(&raw);
                }
                None => stats.files_missing += 1,
            }
        }

        stats.elapsed = start.elapsed();
        trace!(
            files_read = stats.files_read,
            files_missing = stats.files_missing,
            attributes = stats.attributes_merged,
            elapsed_us = stats.elapsed.as_micros() as u64,
            "proc attributes refreshed"
        );
        stats
    }

    /// Copies the cached attributes into `target`. See
    /// [`AttributeStore::export_into`].
    pub fn export_into<'a>(&self, target: impl Into<Option<&'a mut Attributes>>) {
        self.store.export_into(target);
    }

    /// Opens and parses one source. `None` if it cannot be opened.
    fn read_source(&self, path: &Path) -> Option<RawKeyValues> {
        let reader = match self.fs.open(path) {
            Ok(reader) => reader,
            Err(e) => {
                if self.options.debug {
                    warn!(path = %path.display(), error = %e, "failed to open proc source");
                }
                return None;
            }
        };

        Some(parse_key_value_lines(reader, &self.options))
    }
}
