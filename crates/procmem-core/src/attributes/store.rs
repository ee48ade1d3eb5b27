//! Thread-safe cache of the last observed attribute values.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::mapping::attribute_name;
use crate::procfs::RawKeyValues;

/// Attribute name -> value, as handed to metric reporters.
pub type Attributes = HashMap<String, String>;

/// Last-known values for every mapped attribute seen so far.
///
/// Writers hold the lock exclusively for a whole merge, so a reader sees
/// either none or all of the values written by a given merge. Entries are
/// never removed; a key that disappears from its source file keeps its last
/// value.
#[derive(Debug, Default)]
pub struct AttributeStore {
    attrs: RwLock<Attributes>,
}

impl AttributeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges raw `/proc` pairs into the store.
    ///
    /// Keys without an attribute name are skipped. Existing values under the
    /// same attribute name are overwritten. Returns the number of attributes
    /// written.
    pub fn merge_from_raw(&self, raw: &RawKeyValues) -> usize {
        if raw.is_empty() {
            return 0;
        }

        let mut attrs = self.attrs.write();
        let mut merged = 0;
        for (key, value) in raw {
            if let Some(name) = attribute_name(key) {
                attrs.insert(name.to_string(), value.clone());
                merged += 1;
            }
        }
        merged
    }

    /// Copies every cached attribute into `target`.
    ///
    /// Keys already in `target` are overwritten when the store has the same
    /// name; all other keys are left alone. Passing `None` does nothing.
    pub fn export_into<'a>(&self, target: impl Into<Option<&'a mut Attributes>>) {
        let Some(target) = target.into() else {
            return;
        };

        let attrs = self.attrs.read();
        target.extend(attrs.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    /// Returns the cached value for one attribute.
    pub fn get(&self, name: &str) -> Option<String> {
        self.attrs.read().get(name).cloned()
    }

    /// Returns a copy of the whole store.
    pub fn snapshot(&self) -> Attributes {
        self.attrs.read().clone()
    }

    pub fn len(&self) -> usize {
        self.attrs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> RawKeyValues {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_merge_keeps_only_mapped_keys() {
        let store = AttributeStore::new();
        store.merge_from_raw(&RawKeyValues::new());
        store.merge_from_raw(&raw(&[
            ("MemTotal", "1033457664"),
            ("HugePages_Total", "0"),
        ]));
        let merged = store.merge_from_raw(&raw(&[
            ("Name", "cat"),
            ("State", "R (running)"),
            ("VmPeak", "9048064"),
        ]));

        assert_eq!(merged, 1);
        assert_eq!(
            store.snapshot(),
            raw(&[
                ("system.memory.total", "1033457664"),
                ("vm.vma.peak", "9048064"),
            ])
        );
    }

    #[test]
    fn test_merge_last_write_wins() {
        let store = AttributeStore::new();
        store.merge_from_raw(&raw(&[("VmRSS", "100")]));
        store.merge_from_raw(&raw(&[("VmRSS", "200")]));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("vm.rss.size").as_deref(), Some("200"));
    }

    #[test]
    fn test_merge_keeps_stale_values() {
        let store = AttributeStore::new();
        store.merge_from_raw(&raw(&[("MemFree", "1"), ("VmSwap", "0")]));
        store.merge_from_raw(&raw(&[("MemFree", "2")]));

        assert_eq!(store.get("system.memory.free").as_deref(), Some("2"));
        assert_eq!(store.get("vm.swap.size").as_deref(), Some("0"));
    }

    #[test]
    fn test_export_into_empty_target() {
        let store = AttributeStore::new();
        store.merge_from_raw(&raw(&[("MemTotal", "1033457664"), ("VmPeak", "9048064")]));

        let mut attrs = Attributes::new();
        store.export_into(&mut attrs);

        assert_eq!(
            attrs,
            raw(&[
                ("system.memory.total", "1033457664"),
                ("vm.vma.peak", "9048064"),
            ])
        );
    }

    #[test]
    fn test_export_preserves_unrelated_keys() {
        let store = AttributeStore::new();
        store.merge_from_raw(&raw(&[("VmRSS", "4096")]));

        let mut attrs = raw(&[("service.name", "api"), ("vm.rss.size", "old")]);
        store.export_into(&mut attrs);

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs["service.name"], "api");
        assert_eq!(attrs["vm.rss.size"], "4096");
    }

    #[test]
    fn test_export_into_none_is_noop() {
        let store = AttributeStore::new();
        store.merge_from_raw(&raw(&[("VmRSS", "4096")]));

        store.export_into(None::<&mut Attributes>);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_store() {
        let store = AttributeStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("system.memory.total"), None);

        let mut attrs = raw(&[("keep", "me")]);
        store.export_into(&mut attrs);
        assert_eq!(attrs, raw(&[("keep", "me")]));
    }
}
