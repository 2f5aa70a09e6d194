//! Error types for crossword construction and solving.
//!
//! Empty domains and exhausted searches are *outcomes*, not errors: they are
//! reported through [`SolveStatus`](crate::csp::SolveStatus). The variants
//! here cover malformed input and internal faults.

use thiserror::Error;

use crate::crossword::{VarId, Variable, WordId};

/// The main error type for crossword operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrosswordError {
    /// The grid structure is empty or ragged.
    #[error("invalid structure: {0}")]
    InvalidStructure(String),

    /// A variable id does not exist in the constraint graph.
    #[error("unknown variable: {0}")]
    UnknownVariable(VarId),

    /// The same slot was added to a graph twice.
    #[error("duplicate variable: {0}")]
    DuplicateVariable(Variable),

    /// An overlap was declared between a variable and itself.
    #[error("variable {0} cannot overlap itself")]
    SelfOverlap(VarId),

    /// An overlap offset lies outside one of the variables.
    #[error("overlap ({i}, {j}) out of range for variables {x} (len {x_len}) and {y} (len {y_len})")]
    OverlapOutOfRange {
        x: VarId,
        y: VarId,
        i: usize,
        j: usize,
        x_len: usize,
        y_len: usize,
    },

    /// A domain store does not hold one domain per graph variable.
    #[error("domain store has {found} domains, graph has {expected} variables")]
    DomainCountMismatch { expected: usize, found: usize },

    /// A domain holds a word id the lexicon does not have.
    #[error("domain of variable {variable} holds unknown word {word}")]
    UnknownWord { variable: VarId, word: WordId },

    /// Grid projection was requested but the graph has no variables to size it.
    #[error("graph has no grid dimensions")]
    MissingDimensions,

    /// A variable already holding a word was assigned a different one.
    ///
    /// Raised only if the search's undo discipline is broken.
    #[error("variable {variable} already holds word {existing}, refused {attempted}")]
    AssignmentConflict {
        variable: VarId,
        existing: WordId,
        attempted: WordId,
    },
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, CrosswordError>;
