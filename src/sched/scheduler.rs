//! FCFS and Round-Robin execution loops over the OS model.

use std::collections::{HashMap, VecDeque};

use log::debug;

use super::{OsModel, Process, ProcessState};

/// Run each ready process to completion, in arrival order.
pub fn fcfs(os: &mut OsModel, processes: &mut HashMap<u32, Process>) {
    for id in os.ready_list.clone() {
        let Some(proc) = processes.get_mut(&id) else {
            continue;
        };

        let mut used = 0;
        while let Some(cost) = proc.execute_next() {
            used += cost;
        }
        os.current_time += used;
        debug!("fcfs: process {id} ran {used} ns, clock now {}", os.current_time);

        let now = os.current_time;
        if let Some(entry) = os.entry_mut(id) {
            entry.cpu_time += used;
            entry.end_time = Some(now);
            entry.state = ProcessState::Done;
        }
    }
}

/// Quantum-sliced scheduling. An instruction only executes if it fits in
/// the remaining quantum; a preempted process consumes its full slice (the
/// unused remainder passes as idle time) and re-queues at the tail.
pub fn round_robin(os: &mut OsModel, processes: &mut HashMap<u32, Process>) {
    let mut queue: VecDeque<u32> = os.ready_list.iter().copied().collect();

    while let Some(id) = queue.pop_front() {
        let Some(proc) = processes.get_mut(&id) else {
            continue;
        };

        let mut quantum_remaining = os.quantum;
        let mut used = 0;

        while quantum_remaining > 0 && !proc.is_finished() {
            match proc.peek_next_cost() {
                Some(cost) if cost <= quantum_remaining => {
                    proc.execute_next();
                    used += cost;
                    quantum_remaining -= cost;
                }
                _ => break,
            }
        }

        // An instruction larger than a whole quantum would otherwise starve
        // its process forever; run it to completion in one stretch.
        if used == 0 && proc.peek_next_cost().is_some_and(|cost| cost > os.quantum) {
            if let Some(cost) = proc.execute_next() {
                used += cost;
                quantum_remaining = 0;
            }
        }

        os.current_time += used;
        let finished = proc.is_finished();

        if !finished {
            // Preempted: the process keeps the slice, idling out the rest.
            os.current_time += quantum_remaining;
            queue.push_back(id);
            debug!(
                "rr: process {id} preempted after {used} ns, clock now {}",
                os.current_time
            );
        } else {
            debug!("rr: process {id} finished, clock now {}", os.current_time);
        }

        let now = os.current_time;
        if let Some(entry) = os.entry_mut(id) {
            entry.cpu_time += used;
            if finished {
                entry.end_time = Some(now);
                entry.state = ProcessState::Done;
            }
        }
    }
}
