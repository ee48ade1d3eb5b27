//! Mock filesystem for testing without a real `/proc`.
//!
//! Provides `MockFs` plus pre-built scenarios with realistic `/proc/meminfo`
//! and `/proc/self/status` content.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
pub use scenarios::{SAMPLE_MEMINFO, SAMPLE_SELF_STATUS};
