use super::FrameId;

/// Per-page metadata, one record per virtual page for the lifetime of a run.
///
/// Every field is maintained on every reference regardless of the active
/// policy; each policy reads only the key it cares about. Keeping the record
/// uniform means insert/hit/evict transitions touch the same state no matter
/// which policy is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageTableEntry {
    /// Occupied frame while resident, `None` after eviction.
    pub frame: Option<FrameId>,
    /// Logical-clock tick of the most recent reference (load or hit). LRU key.
    pub last_access: u64,
    /// References to this page over the whole run. LFU key.
    ///
    /// Deliberately not reset on eviction+reload: the count tracks the
    /// page's cumulative lifetime frequency.
    pub access_count: u64,
    /// Logical-clock tick of the most recent admission into a frame. FIFO key.
    pub loaded_at: u64,
}

impl PageTableEntry {
    pub fn is_resident(&self) -> bool {
        self.frame.is_some()
    }

    /// Record a reference at tick `now`.
    pub(crate) fn touch(&mut self, now: u64) {
        self.last_access = now;
        self.access_count += 1;
    }

    /// Admit the page into `frame` at tick `now`. The admission itself
    /// counts as a reference.
    pub(crate) fn load_in_frame(&mut self, frame: FrameId, now: u64) {
        self.frame = Some(frame);
        self.loaded_at = now;
        self.touch(now);
    }

    /// Clear residency, returning the freed frame.
    pub(crate) fn evict(&mut self) -> Option<FrameId> {
        self.frame.take()
    }
}
