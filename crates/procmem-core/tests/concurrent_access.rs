//! Refresh and export running on separate threads.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use procmem_core::Options;
use procmem_core::attributes::{AttributeStore, Attributes};
use procmem_core::collector::{MemProcCollector, MockFs};
use procmem_core::procfs::RawKeyValues;

fn raw(pairs: &[(&str, &str)]) -> RawKeyValues {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn export_converges_after_delayed_merge() {
    let store = Arc::new(AttributeStore::new());

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            store.merge_from_raw(&raw(&[
                ("Name", "cat"),
                ("State", "R (running)"),
                ("VmPeak", "9048064"),
            ]));
        })
    };

    let expected = raw(&[("vm.vma.peak", "9048064")]);
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut attrs = Attributes::new();
    loop {
        store.export_into(&mut attrs);
        if attrs == expected {
            break;
        }
        assert!(attrs.is_empty(), "unexpected partial export: {:?}", attrs);
        assert!(Instant::now() < deadline, "export never observed the merge");
        thread::yield_now();
    }

    writer.join().unwrap();
}

#[test]
fn export_never_observes_half_a_merge() {
    let store = Arc::new(AttributeStore::new());
    let done = Arc::new(AtomicBool::new(false));

    // Every merge writes the same generation number to all three keys.
    let writer = {
        let store = Arc::clone(&store);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            for generation in 0..2000u32 {
                let value = generation.to_string();
                store.merge_from_raw(&raw(&[
                    ("MemTotal", value.as_str()),
                    ("MemFree", value.as_str()),
                    ("VmRSS", value.as_str()),
                ]));
            }
            done.store(true, Ordering::SeqCst);
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                while !done.load(Ordering::SeqCst) {
                    let mut attrs = Attributes::new();
                    store.export_into(&mut attrs);
                    if attrs.is_empty() {
                        continue;
                    }
                    assert_eq!(attrs.len(), 3);
                    let total = &attrs["system.memory.total"];
                    assert_eq!(&attrs["system.memory.free"], total);
                    assert_eq!(&attrs["vm.rss.size"], total);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(store.get("vm.rss.size").as_deref(), Some("1999"));
}

#[test]
fn collector_shared_between_refresher_and_reporter() {
    let collector = Arc::new(MemProcCollector::new(
        MockFs::typical_system(),
        Options::default(),
    ));

    let refresher = {
        let collector = Arc::clone(&collector);
        thread::spawn(move || {
            for _ in 0..50 {
                collector.refresh();
            }
        })
    };

    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let mut attrs = Attributes::new();
        collector.export_into(&mut attrs);
        // A snapshot holds whole sources: 0, 16 (meminfo) or 29 (both).
        assert!(
            matches!(attrs.len(), 0 | 16 | 29),
            "torn export with {} keys",
            attrs.len()
        );
        if attrs.len() == 29 {
            break;
        }
        assert!(Instant::now() < deadline, "refresh never completed");
        thread::yield_now();
    }

    refresher.join().unwrap();
}
