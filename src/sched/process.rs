use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// A simulated process: an ordered queue of instructions, each carrying its
/// execution cost in simulated nanoseconds.
#[derive(Debug, Clone)]
pub struct Process {
    pub id: u32,
    instructions: VecDeque<u64>,
}

impl Process {
    pub fn new(id: u32, costs: impl IntoIterator<Item = u64>) -> Self {
        Self {
            id,
            instructions: costs.into_iter().collect(),
        }
    }

    /// Load a process from a text file: one instruction per line, the cost
    /// being the line's final whitespace-separated token (so both `120` and
    /// `LOAD r1 120` parse). Blank lines are skipped.
    pub fn from_file(id: u32, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading process file {}", path.display()))?;

        let mut costs = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            let Some(token) = line.split_whitespace().last() else {
                continue;
            };
            let cost: u64 = token.parse().with_context(|| {
                format!(
                    "{}:{}: instruction cost {token:?} is not a non-negative integer",
                    path.display(),
                    lineno + 1
                )
            })?;
            costs.push(cost);
        }

        if costs.is_empty() {
            bail!("process file {} contains no instructions", path.display());
        }
        Ok(Self::new(id, costs))
    }

    pub fn is_finished(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn remaining_instructions(&self) -> usize {
        self.instructions.len()
    }

    /// Cost of the next instruction without executing it.
    pub fn peek_next_cost(&self) -> Option<u64> {
        self.instructions.front().copied()
    }

    /// Execute the next instruction, returning its cost.
    pub fn execute_next(&mut self) -> Option<u64> {
        self.instructions.pop_front()
    }
}
