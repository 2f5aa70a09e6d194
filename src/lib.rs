//! Crossword filling as a constraint satisfaction problem.
//!
//! Provides:
//!
//! - **Crossword model**: slots derived from a blank/block grid, the
//!   letter overlaps between crossing slots, the word list, and
//!   assignments projectable back onto the grid.
//! - **CSP solver**: node consistency, AC-3 arc consistency, and
//!   backtracking search with minimum-remaining-values and
//!   least-constraining-value ordering, maintaining arc consistency after
//!   every assignment and undoing its pruning through a domain trail.
//!
//! # Architecture
//!
//! The model in [`crossword`] is immutable once built; all mutable search
//! state (domains, trail, partial assignment) lives inside one solve in
//! [`csp`]. Search is sequential and deterministic for a fixed input and
//! configuration.
//!
//! # Examples
//!
//! ```
//! use u_crossword::crossword::{ConstraintGraph, Lexicon};
//! use u_crossword::csp::{CrosswordSolver, SolverConfig};
//!
//! // _ _ _
//! // _ # _
//! // _ _ _
//! let grid = vec![
//!     vec![true, true, true],
//!     vec![true, false, true],
//!     vec![true, true, true],
//! ];
//! let graph = ConstraintGraph::from_structure(&grid).unwrap();
//! let lexicon = Lexicon::new(["top", "tin", "pan", "nap", "pen", "net"]);
//!
//! let result = CrosswordSolver::run(&graph, &lexicon, &SolverConfig::default()).unwrap();
//! assert!(result.is_solved());
//! ```

pub mod crossword;
pub mod csp;
pub mod error;

pub use csp::solve;
pub use error::{CrosswordError, Result};
