use std::collections::{BTreeMap, HashSet};

/// Kind of bus access seen by the instrumentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessKind {
    Read,
    Write,
}

/// A watched address was touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WatchHit {
    pub kind: AccessKind,
    pub addr: u16,
    pub value: u8,
}

/// One byte that differs from the stored snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryChange {
    pub addr: u16,
    pub before: u8,
    pub after: u8,
}

/// Read/write totals for a single address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessCount {
    pub addr: u16,
    pub reads: u64,
    pub writes: u64,
}

/// Optional memory instrumentation: snapshot/diff, per-address access
/// counters and watchpoints.
///
/// Everything here only observes accesses; the value read or written is
/// never affected.
#[derive(Default)]
pub struct Diagnostics {
    snapshot: Option<Box<[u8]>>,
    counts: Option<BTreeMap<u16, (u64, u64)>>,
    watchpoints: HashSet<u16>,
    hits: Vec<WatchHit>,
}

impl Diagnostics {
    #[inline]
    pub(super) fn on_access(&mut self, kind: AccessKind, addr: u16, value: u8) {
        if self.counts.is_none() && self.watchpoints.is_empty() {
            return;
        }

        if let Some(counts) = &mut self.counts {
            let entry = counts.entry(addr).or_default();
            match kind {
                AccessKind::Read => entry.0 += 1,
                AccessKind::Write => entry.1 += 1,
            }
        }

        if self.watchpoints.contains(&addr) {
            log::info!("watchpoint {kind:?} at 0x{addr:04X}: 0x{value:02X}");
            self.hits.push(WatchHit { kind, addr, value });
        }
    }

    pub(super) fn store_snapshot(&mut self, bytes: &[u8]) {
        self.snapshot = Some(bytes.into());
    }

    pub(super) fn diff(&self, bytes: &[u8]) -> Vec<MemoryChange> {
        let Some(snapshot) = &self.snapshot else {
            return Vec::new();
        };
        snapshot
            .iter()
            .zip(bytes)
            .enumerate()
            .filter(|(_, (before, after))| before != after)
            .map(|(addr, (&before, &after))| MemoryChange {
                addr: addr as u16,
                before,
                after,
            })
            .collect()
    }

    /// Start counting reads and writes per address. Existing counts are kept.
    pub fn enable_access_counts(&mut self) {
        self.counts.get_or_insert_with(BTreeMap::new);
    }

    /// `(reads, writes)` recorded for `addr`.
    pub fn access_counts(&self, addr: u16) -> (u64, u64) {
        self.counts
            .as_ref()
            .and_then(|counts| counts.get(&addr).copied())
            .unwrap_or((0, 0))
    }

    /// All touched addresses in ascending order.
    pub fn access_report(&self) -> Vec<AccessCount> {
        self.counts
            .iter()
            .flatten()
            .map(|(&addr, &(reads, writes))| AccessCount {
                addr,
                reads,
                writes,
            })
            .collect()
    }

    pub fn add_watchpoint(&mut self, addr: u16) {
        self.watchpoints.insert(addr);
        log::debug!("watchpoint added at 0x{addr:04X}");
    }

    pub fn clear_watchpoints(&mut self) {
        self.watchpoints.clear();
        self.hits.clear();
    }

    /// Drain the hits recorded since the last call.
    pub fn take_watch_hits(&mut self) -> Vec<WatchHit> {
        std::mem::take(&mut self.hits)
    }
}
