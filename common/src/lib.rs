pub mod board;
pub mod coord;
pub mod dispatch;
pub mod solver;

use std::fmt;

pub use crate::{
    board::Board,
    coord::{Coord, DIRECTIONS, Geometry, triangle_num},
    dispatch::{Dispatcher, Solution},
    solver::{Outcome, Pruning, SearchStats, Solver},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("a triangular board needs at least one row")]
    NoRows,
}

/// A peg jumping from `start` over `middle` into `end`.
///
/// A `Move` knows nothing about the board it is played on, checking that
/// `start` and `middle` hold pegs and `end` is empty is up to [`Board`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    start: usize,
    middle: usize,
    end: usize,
}

impl Move {
    /// The caller guarantees that `start` and `end` are holes exactly two steps
    /// apart along a lattice direction.
    pub fn new(geometry: &Geometry, start: usize, end: usize) -> Move {
        let mid = geometry
            .index_to_row_col(start)
            .midpoint(geometry.index_to_row_col(end));
        let middle = geometry
            .row_col_to_index(mid)
            .expect("center between valid holes should be valid");

        Move { start, middle, end }
    }

    /// Like [`Move::new`], but returns `None` if the two holes don't form a
    /// straight jump.
    pub fn between(geometry: &Geometry, start: usize, end: usize) -> Option<Move> {
        if start >= geometry.num_holes() || end >= geometry.num_holes() {
            return None;
        }

        let delta = geometry.index_to_row_col(end) - geometry.index_to_row_col(start);
        if !DIRECTIONS
            .iter()
            .any(|&(dr, dc)| delta == (2 * dr, 2 * dc))
        {
            // not two holes apart along a lattice line
            return None;
        }

        Some(Move::new(geometry, start, end))
    }

    pub fn start(&self) -> usize {
        self.start
    }
    pub fn middle(&self) -> usize {
        self.middle
    }
    pub fn end(&self) -> usize {
        self.end
    }
}

/// Holes are shown 1-based, the way they are numbered in the printed result.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start + 1, self.end + 1)
    }
}
