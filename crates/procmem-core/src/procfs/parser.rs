//! Parsers for `key: value` files in `/proc`.
//!
//! These are pure functions over a byte stream. They never fail as a whole:
//! lines that cannot be understood are dropped and parsing moves on.

use std::collections::HashMap;
use std::io::BufRead;

use tracing::warn;

use crate::error::NormalizeError;
use crate::options::Options;

/// Raw key -> normalized value, as read from a single file.
pub type RawKeyValues = HashMap<String, String>;

/// Bytes per kilobyte as used by the kernel's ` kB` unit.
const KILOBYTE: i64 = 1024;

/// Normalizes a raw `/proc` value.
///
/// The value is trimmed. If it ends with `kB`, the ` kB` suffix is removed and
/// the remaining number is converted to bytes. Any other value (plain counters,
/// `R (running)`, bitmasks, ...) is returned trimmed but otherwise unchanged.
pub fn normalize_value(value: &str) -> Result<String, NormalizeError> {
    let value = value.trim();
    if !value.ends_with("kB") {
        return Ok(value.to_string());
    }

    let number = value.strip_suffix(" kB").unwrap_or(value);
    let kilobytes: i64 = number
        .parse()
        .map_err(|e| NormalizeError::malformed(number, e))?;

    kilobytes
        .checked_mul(KILOBYTE)
        .map(|bytes| bytes.to_string())
        .ok_or(NormalizeError::Overflow { kilobytes })
}

/// Reads `key:value` lines from `reader` until end of stream.
///
/// Only lines with exactly one colon are considered. The key is taken
/// verbatim; the value goes through [`normalize_value`]. Lines whose value
/// fails to normalize are skipped. A read error stops parsing and whatever was
/// collected up to that point is returned.
pub fn parse_key_value_lines<R: BufRead>(mut reader: R, options: &Options) -> RawKeyValues {
    let mut pairs = RawKeyValues::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                if options.debug {
                    warn!(error = %e, "failed to read key-value line");
                }
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        let line = strip_line_ending(&line);

        let mut parts = line.split(':');
        let (Some(key), Some(raw_value), None) = (parts.next(), parts.next(), parts.next()) else {
            continue;
        };

        match normalize_value(raw_value) {
            Ok(value) => {
                pairs.insert(key.to_string(), value);
            }
            Err(e) => {
                if options.debug {
                    warn!(key, error = %e, "skipping malformed line");
                }
            }
        }
    }

    pairs
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
