//! Comparison driver: runs every (policy, pattern) pair and collects the
//! per-trial counters into a report.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::SimError;
use crate::metrics::TrialResult;
use crate::replacer::Policy;
use crate::table::{PageId, PageTable};
use crate::workload::Pattern;

/// Parameters shared by every trial of one sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Physical frame capacity of each trial's page table.
    pub frames: usize,
    /// Distinct virtual pages.
    pub num_pages: u32,
    /// References generated per pattern.
    pub sequence_length: usize,
    /// Seed for the sequence generators.
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            frames: 8,
            num_pages: 16,
            sequence_length: 1000,
            seed: 42,
        }
    }
}

/// Run one reference sequence through a fresh page table under `policy`.
pub fn run_trial(
    policy: Policy,
    pattern: Pattern,
    sequence: &[PageId],
    frames: usize,
    num_pages: u32,
) -> Result<TrialResult, SimError> {
    let mut table = PageTable::new(frames, num_pages, policy)?;
    for &page in sequence {
        table.reference(page)?;
    }

    let result = TrialResult::new(policy, pattern, table.counters());
    info!(
        "{policy} / {pattern}: {} faults over {} references",
        result.page_faults,
        sequence.len()
    );
    Ok(result)
}

/// Run the full sweep: for each pattern, generate one sequence and replay
/// that same instance through a fresh table per policy. Regenerating the
/// sequence per policy would make the comparison unfair.
pub fn compare_patterns(config: &SweepConfig) -> Result<Vec<TrialResult>, SimError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut results = Vec::with_capacity(Policy::ALL.len() * Pattern::ALL.len());

    for pattern in Pattern::ALL {
        let sequence = pattern.generate(config.sequence_length, config.num_pages, &mut rng);
        for policy in Policy::ALL {
            results.push(run_trial(
                policy,
                pattern,
                &sequence,
                config.frames,
                config.num_pages,
            )?);
        }
    }

    Ok(results)
}

/// Render the sweep results as an aligned text table, rates in percent.
pub fn render_table(results: &[TrialResult]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:<12} {:>8} {:>8} {:>10} {:>10} {:>8}\n",
        "POLICY", "PATTERN", "HITS", "MISSES", "HIT RATE", "MISS RATE", "FAULTS"
    ));

    for result in results {
        out.push_str(&format!(
            "{:<8} {:<12} {:>8} {:>8} {:>9.2}% {:>9.2}% {:>8}\n",
            result.policy.to_string(),
            result.pattern.to_string(),
            result.hits,
            result.misses,
            result.hit_rate * 100.0,
            result.miss_rate * 100.0,
            result.page_faults,
        ));
    }

    out
}
