//! Runtime options supplied by the host application.

use serde::{Deserialize, Serialize};

/// Options controlling collector behaviour.
///
/// The library never reads these from the environment; the host builds them
/// (typically from its own CLI or config file) and passes them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Log unreadable files and malformed lines instead of dropping them silently.
    pub debug: bool,
}

impl Options {
    /// Options with failure logging turned on.
    pub fn debug() -> Self {
        Self { debug: true }
    }
}
