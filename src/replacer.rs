//! Victim-selection policies for the page table.
//!
//! Each policy is a stateless strategy object chosen once at table
//! construction. All bookkeeping lives in the uniform [`PageTableEntry`]
//! records; a selector only scans the resident candidates and picks the
//! entry with the minimum of its ordering key.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SimError;
use crate::table::{PageId, PageTableEntry};

/// Page replacement policy, fixed for the lifetime of one page table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Policy {
    Fifo,
    Lru,
    Lfu,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Lfu];

    pub(crate) fn selector(self) -> Box<dyn VictimSelector> {
        match self {
            Policy::Fifo => Box::new(FifoSelector),
            Policy::Lru => Box::new(LruSelector),
            Policy::Lfu => Box::new(LfuSelector),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Lfu => "LFU",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Policy {
    type Err = SimError;

    /// Unknown names are refused rather than silently mapped to a default,
    /// so a mistyped or unwired policy fails at configuration time.
    fn from_str(s: &str) -> Result<Self, SimError> {
        match s.to_ascii_uppercase().as_str() {
            "FIFO" => Ok(Policy::Fifo),
            "LRU" => Ok(Policy::Lru),
            "LFU" => Ok(Policy::Lfu),
            other => Err(SimError::UnimplementedPolicy {
                name: other.to_string(),
            }),
        }
    }
}

/// Picks the resident page to evict when the table is full.
pub(crate) trait VictimSelector {
    /// `candidates` iterates over every resident page in admission order.
    /// Returns `None` only when there are no candidates.
    fn select_victim(
        &self,
        candidates: &mut dyn Iterator<Item = (PageId, &PageTableEntry)>,
    ) -> Option<PageId>;
}

/// Evict the page admitted earliest, regardless of later hits.
struct FifoSelector;

impl VictimSelector for FifoSelector {
    fn select_victim(
        &self,
        candidates: &mut dyn Iterator<Item = (PageId, &PageTableEntry)>,
    ) -> Option<PageId> {
        // loaded_at is unique per admission event, so no ties.
        candidates.min_by_key(|(_, e)| e.loaded_at).map(|(id, _)| id)
    }
}

/// Evict the page touched least recently, where a touch is the original
/// load or any subsequent hit.
struct LruSelector;

impl VictimSelector for LruSelector {
    fn select_victim(
        &self,
        candidates: &mut dyn Iterator<Item = (PageId, &PageTableEntry)>,
    ) -> Option<PageId> {
        // last_access comes from a strictly increasing clock, so no ties.
        candidates
            .min_by_key(|(_, e)| e.last_access)
            .map(|(id, _)| id)
    }
}

/// Evict the page with the fewest lifetime references. Frequency ties are
/// possible; they break to the oldest touch, then to the earliest admission,
/// so eviction order is a total order and runs are reproducible.
struct LfuSelector;

impl VictimSelector for LfuSelector {
    fn select_victim(
        &self,
        candidates: &mut dyn Iterator<Item = (PageId, &PageTableEntry)>,
    ) -> Option<PageId> {
        candidates
            .min_by_key(|(_, e)| (e.access_count, e.last_access, e.loaded_at))
            .map(|(id, _)| id)
    }
}
