//! Memory and process attribute collector for Linux.
//!
//! This module reads the `/proc` sources, maps their keys to attribute names
//! and caches the result for metric reporters, with support for mocking so
//! tests run on any platform.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     MemProcCollector                        │
//! │  refresh():                                                 │
//! │    /proc/meminfo ──┐                                        │
//! │                    ├─► parse_key_value_lines ─► merge ─┐    │
//! │    /proc/self/status                                   │    │
//! │                                                        ▼    │
//! │  export_into(&mut map) ◄──────────────── AttributeStore     │
//! │                                          (RwLock)           │
//! │                     ┌─────────────┐                         │
//! │                     │  FileSystem │ (trait)                 │
//! │                     └──────┬──────┘                         │
//! └────────────────────────────┼────────────────────────────────┘
//!                      ┌───────┴───────┐
//!               ┌──────▼──────┐ ┌──────▼──────┐
//!               │   RealFs    │ │   MockFs    │
//!               │  (Linux)    │ │  (Testing)  │
//!               └─────────────┘ └─────────────┘
//! ```
//!
//! # Usage
//!
//! ## Production (Linux)
//!
//! ```ignore
//! use procmem_core::collector::{MemProcCollector, RealFs};
//! use procmem_core::Options;
//!
//! let collector = MemProcCollector::new(RealFs::new(), Options::default());
//! collector.refresh();
//! ```
//!
//! ## Testing (with MockFs)
//!
//! ```
//! use procmem_core::attributes::Attributes;
//! use procmem_core::collector::{MemProcCollector, MockFs};
//! use procmem_core::Options;
//!
//! let collector = MemProcCollector::new(MockFs::typical_system(), Options::default());
//! collector.refresh();
//!
//! let mut attrs = Attributes::new();
//! collector.export_into(&mut attrs);
//! assert_eq!(attrs["system.memory.total"], "1033457664");
//! ```

#[allow(clippy::module_inception)]
mod collector;
pub mod mock;
pub mod traits;

pub use collector::{MEMINFO_PATH, MemProcCollector, RefreshStats, SELF_STATUS_PATH, SOURCE_PATHS};
pub use mock::MockFs;
pub use traits::{FileSystem, RealFs};
