//! Synthetic page-reference sequence generators.
//!
//! The page table consumes any finite slice of in-range page ids and assumes
//! nothing about how it was produced. These generators exist so the
//! comparison driver has three contrasting access shapes to feed it. All of
//! them draw from a caller-supplied seeded RNG, so a sequence is fully
//! replayable from its seed.

use std::fmt;

use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

use crate::table::PageId;

/// Probability that the locality generator re-references a recent page.
pub const LOCALITY_FACTOR: f64 = 0.7;

/// Probability that the sequential generator steps to the next page.
pub const SEQUENTIAL_FACTOR: f64 = 0.8;

/// Shape of a synthetic reference sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Uniform over the whole page range.
    Random,
    /// Clustered around a small sliding working set with occasional jumps.
    Locality,
    /// Mostly `page + 1` with wraparound, with occasional random jumps.
    Sequential,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::Random, Pattern::Locality, Pattern::Sequential];

    /// Generate a sequence of `length` references over `[0, num_pages)`.
    pub fn generate(self, length: usize, num_pages: u32, rng: &mut StdRng) -> Vec<PageId> {
        match self {
            Pattern::Random => random_sequence(length, num_pages, rng),
            Pattern::Locality => locality_sequence(length, num_pages, LOCALITY_FACTOR, rng),
            Pattern::Sequential => {
                sequential_sequence(length, num_pages, SEQUENTIAL_FACTOR, rng)
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pattern::Random => "random",
            Pattern::Locality => "locality",
            Pattern::Sequential => "sequential",
        };
        write!(f, "{name}")
    }
}

pub fn random_sequence(length: usize, num_pages: u32, rng: &mut StdRng) -> Vec<PageId> {
    (0..length).map(|_| rng.gen_range(0..num_pages)).collect()
}

/// With probability `locality_factor`, reference a page from a sliding
/// window of recently used pages; otherwise jump uniformly. The window holds
/// at most `min(5, num_pages / 2)` pages.
pub fn locality_sequence(
    length: usize,
    num_pages: u32,
    locality_factor: f64,
    rng: &mut StdRng,
) -> Vec<PageId> {
    if length == 0 {
        return Vec::new();
    }

    let max_recent = usize::min(5, (num_pages / 2) as usize);
    let first = rng.gen_range(0..num_pages);
    let mut sequence = Vec::with_capacity(length);
    sequence.push(first);
    let mut recent: Vec<PageId> = vec![first];

    for _ in 1..length {
        let page = if !recent.is_empty() && rng.gen_bool(locality_factor) {
            recent[rng.gen_range(0..recent.len())]
        } else {
            rng.gen_range(0..num_pages)
        };
        sequence.push(page);

        if !recent.contains(&page) {
            recent.push(page);
        }
        if recent.len() > max_recent {
            recent.remove(0);
        }
    }

    backfill_unreferenced(&mut sequence, num_pages, rng);
    sequence
}

/// With probability `sequential_factor`, reference `(prev + 1) % num_pages`;
/// otherwise jump uniformly.
pub fn sequential_sequence(
    length: usize,
    num_pages: u32,
    sequential_factor: f64,
    rng: &mut StdRng,
) -> Vec<PageId> {
    if length == 0 {
        return Vec::new();
    }

    let mut sequence = Vec::with_capacity(length);
    sequence.push(rng.gen_range(0..num_pages));

    for i in 1..length {
        let page = if rng.gen_bool(sequential_factor) {
            (sequence[i - 1] + 1) % num_pages
        } else {
            rng.gen_range(0..num_pages)
        };
        sequence.push(page);
    }

    backfill_unreferenced(&mut sequence, num_pages, rng);
    sequence
}

/// Splice any never-referenced pages into random positions, so long
/// sequences exercise the whole page range.
fn backfill_unreferenced(sequence: &mut [PageId], num_pages: u32, rng: &mut StdRng) {
    if sequence.len() <= num_pages as usize {
        return;
    }

    let mut referenced = vec![false; num_pages as usize];
    for &page in sequence.iter() {
        referenced[page as usize] = true;
    }

    for page in 0..num_pages {
        if !referenced[page as usize] {
            let position = rng.gen_range(0..sequence.len());
            sequence[position] = page;
        }
    }
}
