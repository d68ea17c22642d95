//! Trial counters and their derived rates.

use serde::Serialize;

use crate::replacer::Policy;
use crate::workload::Pattern;

/// Raw hit/miss counters for one trial.
///
/// `hits + misses` always equals the number of references processed, and a
/// miss is exactly a page fault.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub hits: u64,
    pub misses: u64,
}

impl Counters {
    pub fn total_references(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of references resolved without a fault, in `[0, 1]`.
    pub fn hit_rate(&self) -> f64 {
        if self.total_references() == 0 {
            return 0.0;
        }
        self.hits as f64 / self.total_references() as f64
    }

    /// Fraction of references that faulted, in `[0, 1]`.
    pub fn miss_rate(&self) -> f64 {
        if self.total_references() == 0 {
            return 0.0;
        }
        self.misses as f64 / self.total_references() as f64
    }

    pub fn page_faults(&self) -> u64 {
        self.misses
    }
}

/// One row of the comparison report: the final counters of a single
/// (policy, pattern) trial together with its derived rates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialResult {
    pub policy: Policy,
    pub pattern: Pattern,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    pub miss_rate: f64,
    pub page_faults: u64,
}

impl TrialResult {
    pub fn new(policy: Policy, pattern: Pattern, counters: Counters) -> Self {
        Self {
            policy,
            pattern,
            hits: counters.hits,
            misses: counters.misses,
            hit_rate: counters.hit_rate(),
            miss_rate: counters.miss_rate(),
            page_faults: counters.page_faults(),
        }
    }
}
