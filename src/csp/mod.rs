//! Constraint satisfaction solver for crossword filling.
//!
//! Fills the slots of a [`ConstraintGraph`](crate::crossword::ConstraintGraph)
//! with words from a [`Lexicon`](crate::crossword::Lexicon) so that every
//! slot gets a word of its length, crossing slots agree on shared letters,
//! and no word is used twice.
//!
//! # Key Components
//!
//! - **Domains**: [`DomainStore`]: candidate words per slot, with a removal
//!   trail for backtracking
//! - **Propagation**: [`enforce_node_consistency`], [`revise`], [`ac3`],
//!   [`maintain_arc_consistency`]
//! - **Heuristics**: [`select_unassigned_variable`] (MRV, then degree) and
//!   [`order_domain_values`] (least constraining value)
//! - **Runner**: [`CrosswordSolver`]: backtracking search with budgets and
//!   cancellation
//!
//! # References
//!
//! - Mackworth (1977), "Consistency in Networks of Relations"
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems"

mod config;
mod domain;
mod heuristics;
mod propagation;
mod runner;
mod types;

pub use config::{ArcOrder, SolverConfig};
pub use domain::{ChangeSet, Checkpoint, DomainStore};
pub use heuristics::{is_consistent, order_domain_values, select_unassigned_variable};
pub use propagation::{
    ac3, enforce_node_consistency, maintain_arc_consistency, revise, Inference,
};
pub use runner::{solve, CrosswordSolver};
pub use types::{SearchStats, SolveResult, SolveStatus};
