//! Crossword puzzle model.
//!
//! # Key Components
//!
//! - **Variables**: [`Variable`], [`Direction`]: one slot of the grid
//! - **Graph**: [`ConstraintGraph`]: slots plus pairwise letter overlaps
//! - **Lexicon**: [`Lexicon`]: the word list every domain starts from
//! - **Assignment**: [`Assignment`]: slot → word, projectable onto the grid
//!
//! The model is static: the solver in [`crate::csp`] reads it and keeps all
//! mutable search state on its own side.

mod assignment;
mod graph;
mod lexicon;
mod variable;

pub use assignment::Assignment;
pub use graph::{ConstraintGraph, ConstraintGraphBuilder, GridDims, VarId};
pub use lexicon::{Lexicon, Word, WordId};
pub use variable::{Direction, Variable};
