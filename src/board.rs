//! Board state and neighborhood geometry for the Tents and Trees puzzle.

use core::fmt;

/// State of a single board cell.
///
/// `Empty` is the unknown/unfilled state; solving progressively replaces it
/// with `Grass` or `Tent`. `Tree` cells are fixed at generation time and
/// never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Grass,
    Tent,
    Tree,
}

impl Cell {
    /// Single-character symbol used by the textual board dump.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Grass => '_',
            Cell::Tent => 'A',
            Cell::Tree => 'T',
        }
    }
}

/// Result of a neighborhood query: a cell value, or the edge of the board.
///
/// Off-grid neighbors are a normal, frequent condition near edges and
/// corners, so they are reported as an explicit marker rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    OffBoard,
    Cell(Cell),
}

impl Neighbor {
    /// Returns `true` when this neighbor is on the board and holds `cell`.
    pub fn is(self, cell: Cell) -> bool {
        matches!(self, Neighbor::Cell(c) if c == cell)
    }
}

/// Coordinate deltas `(dx, dy)` for the 4-neighborhood, clockwise from
/// north. Index `i` of a [`Board::neighbors4`] result maps to
/// `K4_OFFSETS[i]`.
///
/// ```text
/// _ 0 _
/// 3 x 1
/// _ 2 _
/// ```
pub const K4_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Coordinate deltas `(dx, dy)` for the 8-neighborhood, row-wise from
/// northwest. Index `i` of a [`Board::neighbors8`] result maps to
/// `K8_OFFSETS[i]`.
///
/// ```text
/// 0 1 2
/// 7 x 3
/// 6 5 4
/// ```
pub const K8_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Square grid of cells. Coordinates are `(x, y)` with `x` the row index
/// and `y` the column index, both in `0..dim`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dim: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-`Empty` board of the given dimension.
    pub fn new(dim: usize) -> Self {
        Board {
            dim,
            cells: vec![Cell::Empty; dim * dim],
        }
    }

    /// Board dimension (side length).
    pub fn dim(&self) -> usize {
        self.dim
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x * self.dim + y
    }

    /// Cell value at `(x, y)`. Coordinates must be in range.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Overwrite the cell at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let i = self.index(x, y);
        self.cells[i] = cell;
    }

    /// Flat row-major view of the cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn neighbor_at(&self, x: usize, y: usize, delta: (isize, isize)) -> Neighbor {
        match offset_coord(self.dim, x, y, delta) {
            Some((nx, ny)) => Neighbor::Cell(self.cell(nx, ny)),
            None => Neighbor::OffBoard,
        }
    }

    /// The four orthogonal neighbors of `(x, y)`, ordered per [`K4_OFFSETS`].
    pub fn neighbors4(&self, x: usize, y: usize) -> [Neighbor; 4] {
        K4_OFFSETS.map(|d| self.neighbor_at(x, y, d))
    }

    /// All eight neighbors of `(x, y)`, ordered per [`K8_OFFSETS`].
    pub fn neighbors8(&self, x: usize, y: usize) -> [Neighbor; 8] {
        K8_OFFSETS.map(|d| self.neighbor_at(x, y, d))
    }

    /// Coordinate of the `index`-th 4-neighbor of `(x, y)`, or `None` when
    /// that neighbor lies off the board. The index ordering matches
    /// [`Board::neighbors4`], so a resolved neighbor can be written back.
    pub fn neighbor4_coord(&self, x: usize, y: usize, index: usize) -> Option<(usize, usize)> {
        offset_coord(self.dim, x, y, K4_OFFSETS[index])
    }

    /// Count of `cell` in row `x`.
    pub fn count_in_row(&self, x: usize, cell: Cell) -> usize {
        (0..self.dim).filter(|&y| self.cell(x, y) == cell).count()
    }

    /// Count of `cell` in column `y`.
    pub fn count_in_col(&self, y: usize, cell: Cell) -> usize {
        (0..self.dim).filter(|&x| self.cell(x, y) == cell).count()
    }

    /// Count of `cell` over the whole board.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Returns `true` when no `Empty` cells remain.
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }
}

/// Apply `delta` to `(x, y)` within a `dim`-sized grid, returning `None`
/// when the result falls off the board.
pub(crate) fn offset_coord(
    dim: usize,
    x: usize,
    y: usize,
    (dx, dy): (isize, isize),
) -> Option<(usize, usize)> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    if nx < dim && ny < dim {
        Some((nx, ny))
    } else {
        None
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.dim {
            for y in 0..self.dim {
                if y > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cell(x, y).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
