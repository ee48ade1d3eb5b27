//! Mapped attribute namespace and its thread-safe cache.
//!
//! Raw `/proc` keys are translated to dotted attribute names through a fixed
//! table ([`mapping`]); the translated values live in an [`AttributeStore`].

pub mod mapping;
mod store;

pub use mapping::{attribute_name, attribute_names};
pub use store::{AttributeStore, Attributes};
