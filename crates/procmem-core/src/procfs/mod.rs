//! Parsing of `key: value` files from the Linux `/proc` filesystem.
//!
//! `/proc/meminfo` and `/proc/[pid]/status` share the same line format, so a
//! single parser covers both. Values carrying a ` kB` suffix are converted to
//! bytes; everything else is passed through as trimmed text.

pub mod parser;

pub use parser::{RawKeyValues, normalize_value, parse_key_value_lines};
