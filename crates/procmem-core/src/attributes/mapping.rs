//! Fixed translation table from raw `/proc` keys to attribute names.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Raw key -> attribute name, `/proc/meminfo` entries first, then
/// `/proc/[pid]/status`.
const NAME_MAPPING: &[(&str, &str)] = &[
    ("MemTotal", "system.memory.total"),
    ("MemFree", "system.memory.free"),
    ("MemAvailable", "system.memory.available"),
    ("Buffers", "system.memory.buffers"),
    ("Cached", "system.memory.cached"),
    ("SwapCached", "system.memory.swap.cached"),
    ("Active", "system.memory.active"),
    ("Inactive", "system.memory.inactive"),
    ("SwapTotal", "system.memory.swap.total"),
    ("SwapFree", "system.memory.swap.free"),
    ("Dirty", "system.memory.dirty"),
    ("Writeback", "system.memory.writeback"),
    ("Slab", "system.memory.slab"),
    ("VmallocTotal", "system.memory.vmalloc.total"),
    ("VmallocUsed", "system.memory.vmalloc.used"),
    ("VmallocChunk", "system.memory.vmalloc.chunk"),
    ("nonvoluntary_ctxt_switches", "sched.cs.involuntary"),
    ("voluntary_ctxt_switches", "sched.cs.voluntary"),
    ("FDSize", "descriptor.count"),
    ("VmData", "vm.data.size"),
    ("VmLck", "vm.locked.size"),
    ("VmPTE", "vm.pte.size"),
    ("VmHWM", "vm.rss.peak"),
    ("VmRSS", "vm.rss.size"),
    ("VmLib", "vm.shared.size"),
    ("VmStk", "vm.stack.size"),
    ("VmSwap", "vm.swap.size"),
    ("VmPeak", "vm.vma.peak"),
    ("VmSize", "vm.vma.size"),
];

static NAME_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| NAME_MAPPING.iter().copied().collect());

/// Returns the attribute name for a raw key, or `None` if the key is not
/// exported.
pub fn attribute_name(raw_key: &str) -> Option<&'static str> {
    NAME_INDEX.get(raw_key).copied()
}

/// All attribute names that can ever appear in an export.
pub fn attribute_names() -> impl Iterator<Item = &'static str> {
    NAME_MAPPING.iter().map(|&(_, name)| name)
}
