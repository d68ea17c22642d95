//! Error types for the simulation contracts.

use std::fmt;

/// Failures the simulator treats as programming or configuration errors.
///
/// None of these are recoverable conditions: a page fault is ordinary
/// behavior for the page table, while everything here signals a broken
/// contract and surfaces immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A reference named a page outside the declared `[0, num_pages)` range.
    InvalidPageId {
        /// Page that was referenced
        page: u32,
        /// Number of pages declared at construction
        num_pages: u32,
    },

    /// A page table or simulation was constructed with unusable parameters.
    InvalidConfiguration {
        /// What was wrong with the configuration
        message: String,
    },

    /// A policy name was requested that has no victim-selection logic wired.
    UnimplementedPolicy {
        /// The offending policy name
        name: String,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidPageId { page, num_pages } => {
                write!(
                    f,
                    "invalid page id {page}: valid range is 0..{num_pages}"
                )
            }
            SimError::InvalidConfiguration { message } => {
                write!(f, "invalid configuration: {message}")
            }
            SimError::UnimplementedPolicy { name } => {
                write!(f, "unimplemented replacement policy: {name}")
            }
        }
    }
}

impl std::error::Error for SimError {}
