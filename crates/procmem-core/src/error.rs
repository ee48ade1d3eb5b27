//! Error types for value normalization.

use std::num::ParseIntError;

/// Failure to normalize a single `/proc` value.
///
/// Only produced for values carrying the ` kB` unit suffix; anything else
/// passes through normalization untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("invalid kB value {value:?}: {source}")]
    MalformedNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("kB value {kilobytes} overflows a byte count")]
    Overflow { kilobytes: i64 },
}

impl NormalizeError {
    pub(crate) fn malformed(value: impl Into<String>, source: ParseIntError) -> Self {
        NormalizeError::MalformedNumber {
            value: value.into(),
            source,
        }
    }
}
