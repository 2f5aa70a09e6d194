//! Variable → word assignments and their projection onto the grid.

use std::collections::BTreeMap;

use super::graph::{ConstraintGraph, VarId};
use super::lexicon::{Lexicon, WordId};
use super::variable::Variable;
use crate::error::{CrosswordError, Result};

/// A partial or complete mapping from variables to words.
///
/// Grown with [`assign`](Self::assign) and shrunk with
/// [`unassign`](Self::unassign) as the search recurses and backtracks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    words: BTreeMap<VarId, WordId>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `word` to `var`.
    ///
    /// Re-assigning the word a variable already holds is a no-op; assigning
    /// a different one is an [`CrosswordError::AssignmentConflict`].
    pub fn assign(&mut self, var: VarId, word: WordId) -> Result<()> {
        match self.words.get(&var) {
            Some(&existing) if existing != word => Err(CrosswordError::AssignmentConflict {
                variable: var,
                existing,
                attempted: word,
            }),
            _ => {
                self.words.insert(var, word);
                Ok(())
            }
        }
    }

    /// Removes the word of `var`, returning it.
    pub fn unassign(&mut self, var: VarId) -> Option<WordId> {
        self.words.remove(&var)
    }

    /// Word assigned to `var`.
    pub fn get(&self, var: VarId) -> Option<WordId> {
        self.words.get(&var).copied()
    }

    /// Whether `var` holds a word.
    pub fn contains(&self, var: VarId) -> bool {
        self.words.contains_key(&var)
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether nothing is assigned.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether every variable of `graph` holds a word.
    pub fn is_complete(&self, graph: &ConstraintGraph) -> bool {
        (0..graph.len()).all(|var| self.contains(var))
    }

    /// `(variable, word)` pairs in variable id order.
    pub fn iter(&self) -> impl Iterator<Item = (VarId, WordId)> + '_ {
        self.words.iter().map(|(&v, &w)| (v, w))
    }

    /// Letter that `var`'s word puts at `offset`.
    pub fn letter_at(&self, lexicon: &Lexicon, var: VarId, offset: usize) -> Option<char> {
        self.get(var)
            .and_then(|id| lexicon.get(id))
            .and_then(|word| word.letter(offset))
    }

    /// Projects the assignment onto grid cells, `None` for empty cells.
    ///
    /// The grid uses the graph's recorded dimensions, or the bounding box of
    /// its variables when none were recorded.
    pub fn letter_grid(
        &self,
        graph: &ConstraintGraph,
        lexicon: &Lexicon,
    ) -> Result<Vec<Vec<Option<char>>>> {
        let dims = graph.grid_dims()?;
        let mut grid = vec![vec![None; dims.width]; dims.height];
        for (var, _) in self.iter() {
            let variable = graph.variable(var)?;
            for (k, (r, c)) in variable.cells().enumerate() {
                if let Some(cell) = grid.get_mut(r).and_then(|row| row.get_mut(c)) {
                    if let Some(letter) = self.letter_at(lexicon, var, k) {
                        *cell = Some(letter);
                    }
                }
            }
        }
        Ok(grid)
    }

    /// Resolves ids into `Variable -> word text`.
    pub fn to_words(
        &self,
        graph: &ConstraintGraph,
        lexicon: &Lexicon,
    ) -> Result<BTreeMap<Variable, String>> {
        self.iter()
            .map(|(var, word)| {
                let variable = *graph.variable(var)?;
                let text = lexicon
                    .get(word)
                    .map(|w| w.as_str().to_string())
                    .unwrap_or_default();
                Ok((variable, text))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossword::Direction;

    fn corner() -> (ConstraintGraph, Lexicon) {
        let mut builder = ConstraintGraph::builder();
        let x = builder
            .add_variable(Variable::new(0, 0, Direction::Across, 3))
            .unwrap();
        let y = builder
            .add_variable(Variable::new(0, 2, Direction::Down, 5))
            .unwrap();
        builder.add_overlap(x, y, 2, 0).unwrap();
        (builder.build(), Lexicon::new(["cat", "train"]))
    }

    #[test]
    fn test_assign_conflict() {
        let mut assignment = Assignment::new();
        assert!(assignment.assign(0, 1).is_ok());
        assert!(assignment.assign(0, 1).is_ok());
        assert_eq!(
            assignment.assign(0, 2),
            Err(CrosswordError::AssignmentConflict {
                variable: 0,
                existing: 1,
                attempted: 2
            })
        );
        assert_eq!(assignment.unassign(0), Some(1));
        assert!(assignment.assign(0, 2).is_ok());
    }

    #[test]
    fn test_letter_at() {
        let (graph, lexicon) = corner();
        let mut assignment = Assignment::new();
        assignment.assign(0, lexicon.find("cat").unwrap()).unwrap();
        assignment.assign(1, lexicon.find("train").unwrap()).unwrap();

        assert!(assignment.is_complete(&graph));
        assert_eq!(assignment.letter_at(&lexicon, 0, 2), Some('t'));
        assert_eq!(assignment.letter_at(&lexicon, 1, 0), Some('t'));
        assert_eq!(assignment.letter_at(&lexicon, 1, 5), None);
    }

    #[test]
    fn test_letter_grid() {
        let (graph, lexicon) = corner();
        let mut assignment = Assignment::new();
        assignment.assign(0, lexicon.find("cat").unwrap()).unwrap();
        assignment.assign(1, lexicon.find("train").unwrap()).unwrap();

        let grid = assignment.letter_grid(&graph, &lexicon).unwrap();
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0], vec![Some('c'), Some('a'), Some('t')]);
        assert_eq!(grid[4], vec![None, None, Some('n')]);
    }

    #[test]
    fn test_to_words() {
        let (graph, lexicon) = corner();
        let mut assignment = Assignment::new();
        assignment.assign(0, lexicon.find("cat").unwrap()).unwrap();

        let words = assignment.to_words(&graph, &lexicon).unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[&Variable::new(0, 0, Direction::Across, 3)], "cat");
        assert!(!assignment.is_complete(&graph));
    }
}
