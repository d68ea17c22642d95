//! The page table eviction engine.
//!
//! Owns the frame-to-page mapping, a run-scoped logical clock, and the
//! hit/fault counters. Each reference either hits a resident page or faults,
//! in which case the page is admitted into a free frame or, at capacity, into
//! the frame freed by evicting the policy's victim.

pub mod entry;

pub use entry::PageTableEntry;

use std::collections::VecDeque;

use hashlink::LinkedHashMap;
use log::debug;

use crate::error::SimError;
use crate::metrics::Counters;
use crate::replacer::{Policy, VictimSelector};

pub type FrameId = u32;
pub type PageId = u32;

/// Outcome of one reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was resident; no frame changed hands.
    Hit(FrameId),
    /// The page was not resident and was admitted into this frame.
    Fault(FrameId),
}

impl Access {
    pub fn is_fault(&self) -> bool {
        matches!(self, Access::Fault(_))
    }

    pub fn frame(&self) -> FrameId {
        match self {
            Access::Hit(f) | Access::Fault(f) => *f,
        }
    }
}

/// Fixed-capacity frame table with one eviction policy for its lifetime.
///
/// One table serves one trial: construct it, feed it the full reference
/// sequence, read the counters, drop it. The logical clock is owned by the
/// table, so concurrent trials never contaminate each other.
pub struct PageTable {
    capacity: usize,
    num_pages: u32,
    policy: Policy,
    selector: Box<dyn VictimSelector>,

    // One entry per virtual page, created up front, never destroyed.
    entries: Vec<PageTableEntry>,

    // Resident pages mapped to their frames, kept in admission order so
    // victim scans iterate deterministically.
    resident: LinkedHashMap<PageId, FrameId>,

    free_frames: VecDeque<FrameId>,

    // Advances by exactly one tick per reference.
    clock: u64,
    hits: u64,
    faults: u64,
}

impl PageTable {
    /// Build an empty table. Fails fast on a zero capacity or page count.
    pub fn new(capacity: usize, num_pages: u32, policy: Policy) -> Result<Self, SimError> {
        if capacity == 0 {
            return Err(SimError::InvalidConfiguration {
                message: "frame capacity must be positive".to_string(),
            });
        }
        if num_pages == 0 {
            return Err(SimError::InvalidConfiguration {
                message: "page count must be positive".to_string(),
            });
        }

        Ok(Self {
            capacity,
            num_pages,
            policy,
            selector: policy.selector(),
            entries: vec![PageTableEntry::default(); num_pages as usize],
            resident: LinkedHashMap::with_capacity(capacity),
            free_frames: (0..capacity as FrameId).collect(),
            clock: 0,
            hits: 0,
            faults: 0,
        })
    }

    /// Process one reference. Referencing a page outside `[0, num_pages)`
    /// is a contract violation, not a page fault.
    pub fn reference(&mut self, page: PageId) -> Result<Access, SimError> {
        if page >= self.num_pages {
            return Err(SimError::InvalidPageId {
                page,
                num_pages: self.num_pages,
            });
        }

        self.clock += 1;
        let now = self.clock;

        if let Some(frame) = self.entries[page as usize].frame {
            self.hits += 1;
            self.entries[page as usize].touch(now);
            return Ok(Access::Hit(frame));
        }

        self.faults += 1;

        let frame = match self.free_frames.pop_front() {
            Some(free) => free,
            None => self.evict_victim(),
        };

        self.entries[page as usize].load_in_frame(frame, now);
        self.resident.insert(page, frame);
        debug!("{}: page {page} loaded into frame {frame} at t={now}", self.policy);

        Ok(Access::Fault(frame))
    }

    fn evict_victim(&mut self) -> FrameId {
        let victim = {
            let entries = &self.entries;
            let mut candidates = self
                .resident
                .iter()
                .map(|(&page, _)| (page, &entries[page as usize]));
            self.selector.select_victim(&mut candidates)
        };

        // The free list is empty and capacity is non-zero, so a resident
        // victim always exists.
        let victim = victim.expect("resident set is non-empty");
        let frame = self.entries[victim as usize]
            .evict()
            .expect("victim is resident");
        self.resident.remove(&victim);
        debug!("{}: evicted page {victim} from frame {frame}", self.policy);
        frame
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn num_pages(&self) -> u32 {
        self.num_pages
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn resident_count(&self) -> usize {
        self.resident.len()
    }

    /// Metadata for one page, readable at any point during or after a run.
    pub fn entry(&self, page: PageId) -> Option<&PageTableEntry> {
        self.entries.get(page as usize)
    }

    /// Final (or running) counters. Reading never mutates table state.
    pub fn counters(&self) -> Counters {
        Counters {
            hits: self.hits,
            misses: self.faults,
        }
    }
}
