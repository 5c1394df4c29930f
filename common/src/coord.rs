use std::ops::{Range, Sub};

use crate::Error;

/// The six lattice directions as `(row, col)` deltas, in the order in which
/// jumps are enumerated.
pub const DIRECTIONS: [(i32, i32); 6] = [(-1, -1), (-1, 0), (0, -1), (0, 1), (1, 0), (1, 1)];

/// Number of holes in the first `n` rows of a triangular board.
pub const fn triangle_num(n: usize) -> usize {
    n * (n + 1) / 2
}

/// A lattice position. Row 0 is the apex, row `r` has the columns `0..=r`.
///
/// A `Coord` may lie off the board, e.g. after [`Coord::shift`]. Whether it
/// names a hole is decided by [`Geometry::row_col_to_index`].
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Coord {
    row: i32,
    col: i32,
}

impl Sub for Coord {
    type Output = (i32, i32);

    fn sub(self, rhs: Self) -> Self::Output {
        (self.row - rhs.row, self.col - rhs.col)
    }
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    pub fn shift(self, row: i32, col: i32) -> Coord {
        Coord::new(self.row + row, self.col + col)
    }

    /// Lattice midpoint. Only meaningful for two coordinates that are an even
    /// number of steps apart along a lattice line.
    pub fn midpoint(self, other: Coord) -> Coord {
        Coord::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }

    pub fn row(self) -> i32 {
        self.row
    }
    pub fn col(self) -> i32 {
        self.col
    }
}

/// Hole layout of a triangular board with a fixed number of rows.
///
/// Row `r` holds the `r + 1` consecutive hole indices starting at
/// `triangle_num(r)`, so for five rows the table reads
///
/// ```text
/// [0]
/// [1, 2]
/// [3, 4, 5]
/// [6, 7, 8, 9]
/// [10, 11, 12, 13, 14]
/// ```
///
/// Built once per run and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geometry {
    rows: Vec<Vec<usize>>,
    /// lattice position of every hole, indexed by hole
    coords: Vec<Coord>,
}

impl Geometry {
    pub fn new(size: u16) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::NoRows);
        }

        let mut next_idx = 0;
        let rows: Vec<Vec<usize>> = (0..size as usize)
            .map(|r| {
                let row: Vec<usize> = (next_idx..next_idx + r + 1).collect();
                next_idx += r + 1;
                row
            })
            .collect();

        let coords = (0..next_idx)
            .map(|idx| find_row_col(&rows, idx))
            .collect();

        Ok(Geometry { rows, coords })
    }

    /// Number of rows
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn num_holes(&self) -> usize {
        self.coords.len()
    }

    pub fn holes(&self) -> Range<usize> {
        0..self.num_holes()
    }

    pub fn row(&self, row: usize) -> &[usize] {
        &self.rows[row]
    }

    /// Position of a hole on the lattice.
    ///
    /// Panics if `idx` is not a hole of this board.
    pub fn index_to_row_col(&self, idx: usize) -> Coord {
        *self.coords.get(idx).unwrap_or_else(|| {
            panic!("hole {idx} is outside a board of {} holes", self.num_holes())
        })
    }

    /// Hole index at a lattice position, or `None` if the position is off the
    /// board.
    pub fn row_col_to_index(&self, coord: Coord) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        self.rows.get(row)?.get(col).copied()
    }
}

/// The smallest row whose triangle number exceeds `idx`, then the column of
/// `idx` within that row.
fn find_row_col(rows: &[Vec<usize>], idx: usize) -> Coord {
    let row = (0..rows.len())
        .find(|&r| idx < triangle_num(r + 1))
        .expect("only called for holes of the table");
    let col = rows[row]
        .iter()
        .position(|&i| i == idx)
        .expect("every index below the triangle number of its row is in that row");

    Coord::new(row as i32, col as i32)
}
