//! A puzzle instance: a board together with its published row and column
//! tent counts.

use core::fmt;

use crate::board::{Board, Cell};

/// Board plus the row/column tent-count constraints derived at generation
/// time. The constraints are set once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    board: Board,
    row_constraints: Vec<usize>,
    col_constraints: Vec<usize>,
}

impl Puzzle {
    /// Assemble a puzzle from a board and its line constraints. The
    /// constraint vectors must both have `board.dim()` entries.
    pub fn new(board: Board, row_constraints: Vec<usize>, col_constraints: Vec<usize>) -> Self {
        assert_eq!(row_constraints.len(), board.dim(), "row constraint length");
        assert_eq!(col_constraints.len(), board.dim(), "col constraint length");
        Puzzle {
            board,
            row_constraints,
            col_constraints,
        }
    }

    /// Board dimension (side length).
    pub fn dim(&self) -> usize {
        self.board.dim()
    }

    /// Immutable view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the board for solvers.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Published tent count for row `x`.
    pub fn row_constraint(&self, x: usize) -> usize {
        self.row_constraints[x]
    }

    /// Published tent count for column `y`.
    pub fn col_constraint(&self, y: usize) -> usize {
        self.col_constraints[y]
    }

    /// All row constraints, in row order.
    pub fn row_constraints(&self) -> &[usize] {
        &self.row_constraints
    }

    /// All column constraints, in column order.
    pub fn col_constraints(&self) -> &[usize] {
        &self.col_constraints
    }

    /// Returns `true` when row and column constraint totals agree. A
    /// mismatch means the instance cannot have a solution.
    pub fn constraint_sums_match(&self) -> bool {
        self.row_constraints.iter().sum::<usize>() == self.col_constraints.iter().sum::<usize>()
    }

    /// Returns `true` when every line holds exactly as many tents as its
    /// published constraint demands.
    pub fn line_counts_satisfied(&self) -> bool {
        let dim = self.dim();
        (0..dim).all(|x| self.board.count_in_row(x, Cell::Tent) == self.row_constraints[x])
            && (0..dim).all(|y| self.board.count_in_col(y, Cell::Tent) == self.col_constraints[y])
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dim = self.dim();
        for x in 0..dim {
            for y in 0..dim {
                write!(f, "{} ", self.board.cell(x, y).symbol())?;
            }
            writeln!(f, "| {}", self.row_constraints[x])?;
        }
        for _ in 0..dim {
            write!(f, "--")?;
        }
        writeln!(f)?;
        for y in 0..dim {
            write!(f, "{} ", self.col_constraints[y])?;
        }
        writeln!(f)
    }
}
