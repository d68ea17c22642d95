//! vmsim — an instructional operating-system resource-management simulator.
//!
//! Two subsystems, both driven by simulated logical clocks so every run is
//! reproducible:
//!
//! - a virtual-memory page table with pluggable eviction (FIFO, LRU, LFU),
//!   exercised against synthetic reference patterns, and
//! - a CPU scheduler (FCFS and Round-Robin) executing processes made of
//!   timed instructions.
//!
//! The comparison driver in [`driver`] runs every (policy, pattern) pair on
//! a shared reference sequence and reports hit/miss/fault metrics.

pub mod driver;
pub mod error;
pub mod metrics;
pub mod replacer;
pub mod sched;
pub mod table;
pub mod workload;

#[cfg(test)]
mod tests;
