//! procmem-core: memory and process attributes from Linux `/proc`.
//!
//! Provides:
//! - `procfs`: `key: value` line parser and ` kB` value normalizer
//! - `attributes`: raw key to attribute name mapping, thread-safe attribute store
//! - `collector`: refresh orchestration over `/proc/meminfo` and `/proc/self/status`,
//!   filesystem abstraction and mocks
//! - `error`: normalization errors
//! - `options`: host-supplied runtime options

pub mod attributes;
pub mod collector;
pub mod error;
pub mod options;
pub mod procfs;

pub use error::NormalizeError;
pub use options::Options;
