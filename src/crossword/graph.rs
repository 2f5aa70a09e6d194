//! The static constraint graph: slots, overlaps and neighbour relation.

use std::collections::{BTreeSet, HashMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::variable::{Direction, Variable};
use crate::error::{CrosswordError, Result};

/// Index of a variable inside a [`ConstraintGraph`].
pub type VarId = usize;

/// Grid size, carried explicitly instead of as global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridDims {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

/// Variables, pairwise overlaps and neighbour lists of one puzzle.
///
/// Built once (from a grid via [`ConstraintGraph::from_structure`] or
/// through [`ConstraintGraph::builder`]) and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use u_crossword::crossword::ConstraintGraph;
///
/// // #__   row 0: across slot of length 2 at (0, 1)
/// // ___   row 1: across slot of length 3 at (1, 0)
/// let grid = vec![vec![false, true, true], vec![true, true, true]];
/// let graph = ConstraintGraph::from_structure(&grid).unwrap();
/// assert_eq!(graph.len(), 4);
/// assert_eq!(graph.dims().map(|d| d.width), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    variables: Vec<Variable>,
    overlaps: HashMap<(VarId, VarId), (usize, usize)>,
    neighbors: Vec<Vec<VarId>>,
    dims: Option<GridDims>,
}

impl ConstraintGraph {
    /// Starts an empty builder.
    pub fn builder() -> ConstraintGraphBuilder {
        ConstraintGraphBuilder::default()
    }

    /// Derives slots from a blank/block grid (`true` = blank).
    ///
    /// Every maximal run of two or more blanks, horizontally or vertically,
    /// becomes a variable. Variables are numbered in row-major order of
    /// their start cell, across before down.
    pub fn from_structure(structure: &[Vec<bool>]) -> Result<Self> {
        let height = structure.len();
        let width = structure.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(CrosswordError::InvalidStructure("empty grid".into()));
        }
        if let Some(row) = structure.iter().position(|r| r.len() != width) {
            return Err(CrosswordError::InvalidStructure(format!(
                "row {row} has {} cells, expected {width}",
                structure[row].len()
            )));
        }

        let blank = |r: usize, c: usize| r < height && c < width && structure[r][c];
        let mut builder = Self::builder().with_dims(GridDims { width, height });

        for r in 0..height {
            for c in 0..width {
                if !blank(r, c) {
                    continue;
                }
                if c == 0 || !blank(r, c - 1) {
                    let length = (c..width).take_while(|&k| blank(r, k)).count();
                    if length > 1 {
                        builder.add_variable(Variable::new(r, c, Direction::Across, length))?;
                    }
                }
                if r == 0 || !blank(r - 1, c) {
                    let length = (r..height).take_while(|&k| blank(k, c)).count();
                    if length > 1 {
                        builder.add_variable(Variable::new(r, c, Direction::Down, length))?;
                    }
                }
            }
        }

        builder.add_geometric_overlaps();
        Ok(builder.build())
    }

    /// All variables, indexed by [`VarId`].
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The variable with the given id.
    pub fn variable(&self, id: VarId) -> Result<&Variable> {
        self.variables
            .get(id)
            .ok_or(CrosswordError::UnknownVariable(id))
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the graph has no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Overlap `(i, j)` of the ordered pair `(x, y)`: `x[i]` must equal `y[j]`.
    pub fn overlap(&self, x: VarId, y: VarId) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Neighbours of `x` in ascending id order.
    pub fn neighbors(&self, x: VarId) -> &[VarId] {
        self.neighbors.get(x).map_or(&[], Vec::as_slice)
    }

    /// Number of neighbours of `x`.
    pub fn degree(&self, x: VarId) -> usize {
        self.neighbors(x).len()
    }

    /// Every ordered neighbouring pair, in `(x, y)` id order.
    pub fn arcs(&self) -> Vec<(VarId, VarId)> {
        (0..self.len())
            .flat_map(|x| self.neighbors(x).iter().map(move |&y| (x, y)))
            .collect()
    }

    /// Grid dimensions recorded at construction.
    pub fn dims(&self) -> Option<GridDims> {
        self.dims
    }

    /// Recorded dimensions, or the bounding box of the variables.
    pub fn grid_dims(&self) -> Result<GridDims> {
        if let Some(dims) = self.dims {
            return Ok(dims);
        }
        let mut dims: Option<GridDims> = None;
        for (r, c) in self.variables.iter().flat_map(|v| v.cells()) {
            let d = dims.get_or_insert(GridDims {
                width: 0,
                height: 0,
            });
            d.width = d.width.max(c + 1);
            d.height = d.height.max(r + 1);
        }
        dims.ok_or(CrosswordError::MissingDimensions)
    }
}

/// Incremental construction of a [`ConstraintGraph`].
///
/// # Examples
///
/// ```
/// use u_crossword::crossword::{ConstraintGraph, Direction, Variable};
///
/// let mut builder = ConstraintGraph::builder();
/// let x = builder.add_variable(Variable::new(0, 0, Direction::Across, 3)).unwrap();
/// let y = builder.add_variable(Variable::new(0, 2, Direction::Down, 5)).unwrap();
/// builder.add_overlap(x, y, 2, 0).unwrap();
/// let graph = builder.build();
/// assert_eq!(graph.overlap(y, x), Some((0, 2)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConstraintGraphBuilder {
    variables: Vec<Variable>,
    overlaps: HashMap<(VarId, VarId), (usize, usize)>,
    dims: Option<GridDims>,
}

impl ConstraintGraphBuilder {
    /// Records the grid dimensions.
    pub fn with_dims(mut self, dims: GridDims) -> Self {
        self.dims = Some(dims);
        self
    }

    /// Adds a variable and returns its id.
    pub fn add_variable(&mut self, variable: Variable) -> Result<VarId> {
        if self.variables.contains(&variable) {
            return Err(CrosswordError::DuplicateVariable(variable));
        }
        self.variables.push(variable);
        Ok(self.variables.len() - 1)
    }

    /// Declares that `x[i]` and `y[j]` are the same cell.
    ///
    /// The reverse pair `(y, x) -> (j, i)` is recorded as well. A later call
    /// for the same pair replaces the earlier offsets.
    pub fn add_overlap(&mut self, x: VarId, y: VarId, i: usize, j: usize) -> Result<()> {
        if x == y {
            return Err(CrosswordError::SelfOverlap(x));
        }
        let x_len = self.length(x)?;
        let y_len = self.length(y)?;
        if i >= x_len || j >= y_len {
            return Err(CrosswordError::OverlapOutOfRange {
                x,
                y,
                i,
                j,
                x_len,
                y_len,
            });
        }
        self.overlaps.insert((x, y), (i, j));
        self.overlaps.insert((y, x), (j, i));
        Ok(())
    }

    /// Adds an overlap for every pair of variables sharing a grid cell.
    pub fn add_geometric_overlaps(&mut self) {
        for x in 0..self.variables.len() {
            for y in (x + 1)..self.variables.len() {
                if let Some((i, j)) = self.variables[x].overlap_with(&self.variables[y]) {
                    self.overlaps.insert((x, y), (i, j));
                    self.overlaps.insert((y, x), (j, i));
                }
            }
        }
    }

    /// Freezes the builder into a graph.
    pub fn build(self) -> ConstraintGraph {
        let mut adjacency: Vec<BTreeSet<VarId>> = vec![BTreeSet::new(); self.variables.len()];
        for &(x, y) in self.overlaps.keys() {
            adjacency[x].insert(y);
        }
        ConstraintGraph {
            variables: self.variables,
            overlaps: self.overlaps,
            neighbors: adjacency
                .into_iter()
                .map(|set| set.into_iter().collect())
                .collect(),
            dims: self.dims,
        }
    }

    fn length(&self, id: VarId) -> Result<usize> {
        self.variables
            .get(id)
            .map(|v| v.length)
            .ok_or(CrosswordError::UnknownVariable(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `_` blank, `#` block.
    fn parse_grid(rows: &[&str]) -> Vec<Vec<bool>> {
        rows.iter()
            .map(|row| row.chars().map(|c| c == '_').collect())
            .collect()
    }

    #[test]
    fn test_from_structure_plus_shape() {
        let grid = parse_grid(&["#_#", "___", "#_#"]);
        let graph = ConstraintGraph::from_structure(&grid).unwrap();

        assert_eq!(graph.len(), 2);
        let down = graph.variable(0).unwrap();
        let across = graph.variable(1).unwrap();
        assert_eq!(*down, Variable::new(0, 1, Direction::Down, 3));
        assert_eq!(*across, Variable::new(1, 0, Direction::Across, 3));
        assert_eq!(graph.overlap(0, 1), Some((1, 1)));
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.dims(), Some(GridDims { width: 3, height: 3 }));
    }

    #[test]
    fn test_single_cells_are_not_slots() {
        let grid = parse_grid(&["_#_", "###", "_#_"]);
        let graph = ConstraintGraph::from_structure(&grid).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_full_square() {
        let grid = parse_grid(&["___", "___", "___"]);
        let graph = ConstraintGraph::from_structure(&grid).unwrap();

        assert_eq!(graph.len(), 6);
        for x in 0..graph.len() {
            assert_eq!(graph.degree(x), 3, "variable {x}");
        }
        assert_eq!(graph.arcs().len(), 18);
    }

    #[test]
    fn test_ragged_grid_rejected() {
        let grid = vec![vec![true, true], vec![true]];
        assert!(matches!(
            ConstraintGraph::from_structure(&grid),
            Err(CrosswordError::InvalidStructure(_))
        ));
        assert!(ConstraintGraph::from_structure(&[]).is_err());
    }

    #[test]
    fn test_builder_validation() {
        let mut builder = ConstraintGraph::builder();
        let x = builder
            .add_variable(Variable::new(0, 0, Direction::Across, 3))
            .unwrap();
        let y = builder
            .add_variable(Variable::new(0, 2, Direction::Down, 5))
            .unwrap();

        assert_eq!(
            builder.add_variable(Variable::new(0, 0, Direction::Across, 3)),
            Err(CrosswordError::DuplicateVariable(Variable::new(
                0,
                0,
                Direction::Across,
                3
            )))
        );
        assert_eq!(builder.add_overlap(x, x, 0, 0), Err(CrosswordError::SelfOverlap(x)));
        assert_eq!(
            builder.add_overlap(x, 7, 0, 0),
            Err(CrosswordError::UnknownVariable(7))
        );
        assert!(matches!(
            builder.add_overlap(x, y, 3, 0),
            Err(CrosswordError::OverlapOutOfRange { .. })
        ));
        assert!(builder.add_overlap(x, y, 2, 0).is_ok());
    }

    #[test]
    fn test_grid_dims_bounding_box() {
        let mut builder = ConstraintGraph::builder();
        builder
            .add_variable(Variable::new(1, 0, Direction::Across, 4))
            .unwrap();
        builder
            .add_variable(Variable::new(0, 2, Direction::Down, 3))
            .unwrap();
        builder.add_geometric_overlaps();
        let graph = builder.build();

        assert_eq!(graph.dims(), None);
        assert_eq!(graph.grid_dims(), Ok(GridDims { width: 4, height: 3 }));
        assert_eq!(graph.overlap(0, 1), Some((2, 1)));

        let empty = ConstraintGraph::builder().build();
        assert_eq!(empty.grid_dims(), Err(CrosswordError::MissingDimensions));
    }
}
