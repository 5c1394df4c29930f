use std::fmt;

use bitvec::{bitvec, prelude::Lsb0, slice::BitSlice, vec::BitVec};

use crate::{
    Move,
    coord::{DIRECTIONS, Geometry},
};

/// One position on the board together with the moves that are legal from it
/// and the moves that led to it.
///
/// A `Board` is never modified after construction, [`Board::execute_move`]
/// builds the successor instead. This keeps `moves` in sync with the pegs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board<'g> {
    geometry: &'g Geometry,
    /// bit set = hole holds a peg
    pegs: BitVec,
    moves: Vec<Move>,
    history: Vec<Move>,
}

impl<'g> Board<'g> {
    /// Build a board where exactly the holes in `empty_holes` have no peg.
    pub fn new(
        geometry: &'g Geometry,
        empty_holes: impl IntoIterator<Item = usize>,
        history: Vec<Move>,
    ) -> Self {
        let mut pegs = bitvec![usize, Lsb0; 1; geometry.num_holes()];
        for hole in empty_holes {
            pegs.set(hole, false);
        }

        Self::from_pegs(geometry, pegs, history)
    }

    /// The opening position: every hole filled except `hole`.
    pub fn with_hole(geometry: &'g Geometry, hole: usize) -> Self {
        Self::new(geometry, [hole], Vec::new())
    }

    /// A board without any pegs. Every terminal board that still has a peg
    /// beats it.
    pub fn empty(geometry: &'g Geometry) -> Self {
        Self::new(geometry, geometry.holes(), Vec::new())
    }

    fn from_pegs(geometry: &'g Geometry, pegs: BitVec, history: Vec<Move>) -> Self {
        let moves = legal_moves(geometry, &pegs);
        Board {
            geometry,
            pegs,
            moves,
            history,
        }
    }

    pub fn geometry(&self) -> &'g Geometry {
        self.geometry
    }

    /// Number of holes holding a peg
    pub fn num_pegs(&self) -> usize {
        self.pegs.count_ones()
    }

    pub fn is_occupied(&self, hole: usize) -> bool {
        self.pegs[hole]
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn is_terminal(&self) -> bool {
        self.moves.is_empty()
    }

    /// The board after playing `mv`.
    ///
    /// `mv` has to be one of [`Board::moves`], this is not checked.
    pub fn execute_move(&self, mv: Move) -> Board<'g> {
        let mut pegs = self.pegs.clone();
        pegs.set(mv.start(), false);
        pegs.set(mv.middle(), false);
        pegs.set(mv.end(), true);

        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(mv);

        Self::from_pegs(self.geometry, pegs, history)
    }
}

/// For every empty hole, look two steps out in each direction for a peg that
/// can jump into it over a peg in between.
fn legal_moves(geometry: &Geometry, pegs: &BitSlice) -> Vec<Move> {
    let mut moves = Vec::new();
    for target in pegs.iter_zeros() {
        let coord = geometry.index_to_row_col(target);

        for (dr, dc) in DIRECTIONS {
            let mid = geometry.row_col_to_index(coord.shift(dr, dc));
            let src = geometry.row_col_to_index(coord.shift(2 * dr, 2 * dc));
            let (Some(mid), Some(src)) = (mid, src) else {
                // off the board
                continue;
            };

            if pegs[mid] && pegs[src] {
                moves.push(Move::new(geometry, src, target));
            }
        }
    }

    moves
}

/// Draws the board as a triangle, `#` for a peg and `.` for an empty hole.
impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|_, cell| cell.to_string()))
    }
}

impl Board<'_> {
    /// Lay the holes out as a triangle, apex on top, one line per row.
    ///
    /// `cell` gets every hole with its symbol (`#` or `.`) and returns the
    /// text to put in its place.
    pub fn render(&self, mut cell: impl FnMut(usize, &str) -> String) -> String {
        let size = self.geometry.size();

        let mut out = String::new();
        for r in 0..size {
            out.push_str(&" ".repeat(size - r - 1));
            for (i, &hole) in self.geometry.row(r).iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&cell(hole, if self.pegs[hole] { "#" } else { "." }));
            }
            out.push('\n');
        }
        out
    }
}
