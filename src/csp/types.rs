//! Solve outcomes and search statistics.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::crossword::Assignment;

/// Status of the solver after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolveStatus {
    /// A complete, consistent assignment was found.
    Solved,
    /// Every branch failed: no assignment satisfies the constraints.
    NoSolution,
    /// The node or time budget ran out first.
    LimitReached,
    /// The cancel flag was raised.
    Cancelled,
}

/// Counters collected during one solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    /// Tentative assignments tried.
    pub nodes: usize,
    /// Tentative assignments undone.
    pub backtracks: usize,
    /// Words pruned from domains, including pruning later undone.
    pub removals: usize,
    /// Wall-clock time in milliseconds.
    pub elapsed_ms: u64,
}

/// Result of a solver run.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// How the search ended.
    pub status: SolveStatus,
    /// The complete assignment, present only when `status` is `Solved`.
    pub assignment: Option<Assignment>,
    /// Search counters.
    pub stats: SearchStats,
}

impl SolveResult {
    /// Whether a solution was found.
    pub fn is_solved(&self) -> bool {
        self.status == SolveStatus::Solved
    }
}
