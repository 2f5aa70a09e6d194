//! Crossword slot variables.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientation of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Left to right.
    Across,
    /// Top to bottom.
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A crossword slot: start cell, direction, and length in letters.
///
/// Equality, hashing and ordering use `(row, col, direction, length)`.
///
/// # Examples
///
/// ```
/// use u_crossword::crossword::{Direction, Variable};
///
/// let v = Variable::new(1, 2, Direction::Down, 3);
/// assert_eq!(v.cells().collect::<Vec<_>>(), vec![(1, 2), (2, 2), (3, 2)]);
/// assert_eq!(v.cell(1), Some((2, 2)));
/// assert_eq!(v.cell(3), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable {
    /// Row of the first letter.
    pub row: usize,
    /// Column of the first letter.
    pub col: usize,
    /// Orientation.
    pub direction: Direction,
    /// Number of letters.
    pub length: usize,
}

impl Variable {
    /// Creates a new slot.
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// Grid cell holding the `k`-th letter, if `k < length`.
    pub fn cell(&self, k: usize) -> Option<(usize, usize)> {
        if k >= self.length {
            return None;
        }
        Some(match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        })
    }

    /// Cells covered by this slot, in letter order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).filter_map(move |k| self.cell(k))
    }

    /// Letter offset of `cell` within this slot, if the slot covers it.
    pub fn offset_of(&self, cell: (usize, usize)) -> Option<usize> {
        let (r, c) = cell;
        let k = match self.direction {
            Direction::Across if r == self.row && c >= self.col => c - self.col,
            Direction::Down if c == self.col && r >= self.row => r - self.row,
            _ => return None,
        };
        (k < self.length).then_some(k)
    }

    /// Overlap offsets `(i, j)` with `other`: `self[i]` shares a cell with `other[j]`.
    ///
    /// Slots with the same direction never overlap; two such slots sharing
    /// cells would be the same run of the grid.
    pub fn overlap_with(&self, other: &Variable) -> Option<(usize, usize)> {
        if self.direction == other.direction {
            return None;
        }
        self.cells()
            .enumerate()
            .find_map(|(i, cell)| other.offset_of(cell).map(|j| (i, j)))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.row, self.col, self.direction, self.length
        )
    }
}
