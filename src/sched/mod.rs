//! CPU scheduling subsystem: a process table, a ready list, and a simulated
//! nanosecond clock, executed under FCFS or Round-Robin.

pub mod process;
pub mod scheduler;

pub use process::Process;
pub use scheduler::{fcfs, round_robin};

/// Default Round-Robin quantum, in simulated nanoseconds.
pub const DEFAULT_QUANTUM: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Ready,
    Done,
}

/// Bookkeeping for one process over the whole simulation.
#[derive(Debug, Clone)]
pub struct ProcessTableEntry {
    pub process_id: u32,
    pub state: ProcessState,
    /// Simulated time the process was admitted.
    pub start_time: u64,
    /// Simulated time the process finished, once it has.
    pub end_time: Option<u64>,
    /// Time actually spent executing instructions.
    pub cpu_time: u64,
}

impl ProcessTableEntry {
    /// End-to-end time from admission to completion.
    pub fn turnaround_time(&self) -> Option<u64> {
        self.end_time.map(|end| end - self.start_time)
    }

    /// Time spent admitted but not executing.
    pub fn waiting_time(&self) -> Option<u64> {
        self.turnaround_time().map(|t| t - self.cpu_time)
    }
}

/// The operating-system model: process table, ready list, simulated clock.
pub struct OsModel {
    pub process_table: Vec<ProcessTableEntry>,
    /// Process ids in arrival order.
    pub ready_list: Vec<u32>,
    /// Simulated system time in nanoseconds.
    pub current_time: u64,
    /// Round-Robin time slice in nanoseconds.
    pub quantum: u64,
}

impl OsModel {
    pub fn new(quantum: u64) -> Self {
        Self {
            process_table: Vec::new(),
            ready_list: Vec::new(),
            current_time: 0,
            quantum,
        }
    }

    /// Admit a process at the current simulated time.
    pub fn add_process(&mut self, process_id: u32) {
        self.process_table.push(ProcessTableEntry {
            process_id,
            state: ProcessState::Ready,
            start_time: self.current_time,
            end_time: None,
            cpu_time: 0,
        });
        self.ready_list.push(process_id);
    }

    pub(crate) fn entry_mut(&mut self, process_id: u32) -> Option<&mut ProcessTableEntry> {
        self.process_table
            .iter_mut()
            .find(|e| e.process_id == process_id)
    }

    pub fn entry(&self, process_id: u32) -> Option<&ProcessTableEntry> {
        self.process_table.iter().find(|e| e.process_id == process_id)
    }
}

impl Default for OsModel {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}
