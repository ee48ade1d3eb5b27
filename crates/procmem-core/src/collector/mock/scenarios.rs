//! Pre-built mock filesystem scenarios for testing.
//!
//! Fixtures are captured from a small VM running `cat`.

use super::filesystem::MockFs;
use crate::collector::{MEMINFO_PATH, SELF_STATUS_PATH};

/// `/proc/meminfo` from a 1 GiB machine.
pub const SAMPLE_MEMINFO: &str = "\
MemTotal:        1009236 kB
MemFree:          146340 kB
MemAvailable:     662052 kB
Buffers:          201576 kB
Cached:           413916 kB
SwapCached:         2548 kB
Active:           429724 kB
Inactive:         258732 kB
Active(anon):      52128 kB
Inactive(anon):    23880 kB
Active(file):     377596 kB
Inactive(file):   234852 kB
Unevictable:           0 kB
Mlocked:               0 kB
SwapTotal:        974844 kB
SwapFree:         909564 kB
Dirty:                20 kB
Writeback:             0 kB
AnonPages:         71580 kB
Mapped:            45072 kB
Shmem:              3044 kB
Slab:             127736 kB
SReclaimable:      60948 kB
SUnreclaim:        66788 kB
KernelStack:        2472 kB
PageTables:         8084 kB
NFS_Unstable:          0 kB
Bounce:                0 kB
WritebackTmp:          0 kB
CommitLimit:     1479460 kB
Committed_AS:     695168 kB
VmallocTotal:   34359738367 kB
VmallocUsed:           0 kB
VmallocChunk:          0 kB
HardwareCorrupted:     0 kB
AnonHugePages:         0 kB
ShmemHugePages:        0 kB
ShmemPmdMapped:        0 kB
CmaTotal:              0 kB
CmaFree:               0 kB
HugePages_Total:       0
HugePages_Free:        0
HugePages_Rsvd:        0
HugePages_Surp:        0
Hugepagesize:       2048 kB
DirectMap4k:     1003456 kB
DirectMap2M:       45056 kB
";

/// `/proc/self/status` of a running `cat`.
pub const SAMPLE_SELF_STATUS: &str = "\
Name:\tcat
Umask:\t0002
State:\tR (running)
Tgid:\t13697
Ngid:\t0
Pid:\t13697
PPid:\t13625
TracerPid:\t0
Uid:\t1001\t1001\t1001\t1001
Gid:\t1001\t1001\t1001\t1001
FDSize:\t256
Groups:\t4 27 110 1001
NStgid:\t13697
NSpid:\t13697
NSpgid:\t13697
NSsid:\t13625
VmPeak:\t    8836 kB
VmSize:\t    8836 kB
VmLck:\t       0 kB
VmPin:\t       0 kB
VmHWM:\t     784 kB
VmRSS:\t     784 kB
RssAnon:\t      60 kB
RssFile:\t     724 kB
RssShmem:\t       0 kB
VmData:\t     312 kB
VmStk:\t     132 kB
VmExe:\t      32 kB
VmLib:\t    2120 kB
VmPTE:\t      60 kB
VmSwap:\t       0 kB
HugetlbPages:\t       0 kB
CoreDumping:\t0
Threads:\t1
SigQ:\t0/3676
SigPnd:\t0000000000000000
ShdPnd:\t0000000000000000
SigBlk:\t0000000000000000
SigIgn:\t0000000000000000
SigCgt:\t0000000000000000
CapInh:\t0000000000000000
CapPrm:\t0000000000000000
CapEff:\t0000000000000000
CapBnd:\t0000003fffffffff
CapAmb:\t0000000000000000
NoNewPrivs:\t0
Seccomp:\t0
Speculation_Store_Bypass:\tvulnerable
Cpus_allowed:\t1
Cpus_allowed_list:\t0
Mems_allowed:\t00000000,00000001
Mems_allowed_list:\t0
voluntary_ctxt_switches:\t0
nonvoluntary_ctxt_switches:\t0
";

impl MockFs {
    /// Creates a system with both `/proc/meminfo` and `/proc/self/status`.
    pub fn typical_system() -> Self {
        let mut fs = Self::new();
        fs.add_file(MEMINFO_PATH, SAMPLE_MEMINFO);
        fs.add_file(SELF_STATUS_PATH, SAMPLE_SELF_STATUS);
        fs
    }

    /// Creates a system where only `/proc/meminfo` is present.
    ///
    /// Matches a restricted sandbox that hides per-process files.
    pub fn minimal_system() -> Self {
        let mut fs = Self::new();
        fs.add_file(MEMINFO_PATH, SAMPLE_MEMINFO);
        fs
    }
}
