//! Rule-based fixed-point solver.
//!
//! Applies a fixed set of deduction rules over the whole board until a pass
//! changes nothing. Greedy and deterministic: no guessing, no backtracking,
//! and a resolved cell is never reverted. Incomplete by design — harder
//! instances stall and need the constraint-model solver.

use crate::board::Cell;
use crate::puzzle::Puzzle;

/// Result of running the propagation solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagateOutcome {
    /// Every cell is resolved.
    Solved,
    /// A pass made no progress while empty cells remain. A normal outcome,
    /// not an error.
    Stalled,
}

/// Run deduction passes on `puzzle` until it is fully resolved or a pass
/// makes no progress. The board is mutated in place.
pub fn propagate(puzzle: &mut Puzzle) -> PropagateOutcome {
    loop {
        if puzzle.board().is_full() {
            return PropagateOutcome::Solved;
        }
        let before = puzzle.board().cells().to_vec();

        // Rule order matters: later rules rely on the grass laid down by
        // earlier ones within the same pass.
        grass_in_zero_lines(puzzle);
        grass_in_met_lines(puzzle);
        grass_without_adjacent_tree(puzzle);
        force_tents_in_lines(puzzle);
        grass_next_to_tents(puzzle);
        tent_for_constrained_tree(puzzle);

        if puzzle.board().cells() == before.as_slice() {
            return if puzzle.board().is_full() {
                PropagateOutcome::Solved
            } else {
                PropagateOutcome::Stalled
            };
        }
    }
}

fn fill_row_empties(puzzle: &mut Puzzle, x: usize, cell: Cell) {
    for y in 0..puzzle.dim() {
        if puzzle.board().cell(x, y) == Cell::Empty {
            puzzle.board_mut().set(x, y, cell);
        }
    }
}

fn fill_col_empties(puzzle: &mut Puzzle, y: usize, cell: Cell) {
    for x in 0..puzzle.dim() {
        if puzzle.board().cell(x, y) == Cell::Empty {
            puzzle.board_mut().set(x, y, cell);
        }
    }
}

/// Rule 1: lines whose published count is zero hold no tents.
fn grass_in_zero_lines(puzzle: &mut Puzzle) {
    for x in 0..puzzle.dim() {
        if puzzle.row_constraint(x) == 0 {
            fill_row_empties(puzzle, x, Cell::Grass);
        }
    }
    for y in 0..puzzle.dim() {
        if puzzle.col_constraint(y) == 0 {
            fill_col_empties(puzzle, y, Cell::Grass);
        }
    }
}

/// Rule 2: lines that already hold their full tent count get grass in the
/// remaining empties.
fn grass_in_met_lines(puzzle: &mut Puzzle) {
    for x in 0..puzzle.dim() {
        if puzzle.board().count_in_row(x, Cell::Tent) == puzzle.row_constraint(x) {
            fill_row_empties(puzzle, x, Cell::Grass);
        }
    }
    for y in 0..puzzle.dim() {
        if puzzle.board().count_in_col(y, Cell::Tent) == puzzle.col_constraint(y) {
            fill_col_empties(puzzle, y, Cell::Grass);
        }
    }
}

/// Rule 3: a tent must sit orthogonally next to some tree, so an empty cell
/// with no tree among its 4-neighbors is grass.
fn grass_without_adjacent_tree(puzzle: &mut Puzzle) {
    let dim = puzzle.dim();
    for x in 0..dim {
        for y in 0..dim {
            if puzzle.board().cell(x, y) == Cell::Empty
                && !puzzle
                    .board()
                    .neighbors4(x, y)
                    .iter()
                    .any(|n| n.is(Cell::Tree))
            {
                puzzle.board_mut().set(x, y, Cell::Grass);
            }
        }
    }
}

/// Rule 4: when a line's empty count equals its missing tent count, every
/// remaining empty cell in that line is a tent.
fn force_tents_in_lines(puzzle: &mut Puzzle) {
    for x in 0..puzzle.dim() {
        let empties = puzzle.board().count_in_row(x, Cell::Empty);
        let tents = puzzle.board().count_in_row(x, Cell::Tent);
        if puzzle.row_constraint(x).checked_sub(tents) == Some(empties) {
            fill_row_empties(puzzle, x, Cell::Tent);
        }
    }
    for y in 0..puzzle.dim() {
        let empties = puzzle.board().count_in_col(y, Cell::Empty);
        let tents = puzzle.board().count_in_col(y, Cell::Tent);
        if puzzle.col_constraint(y).checked_sub(tents) == Some(empties) {
            fill_col_empties(puzzle, y, Cell::Tent);
        }
    }
}

/// Rule 5: tents never touch, not even diagonally, so an empty cell with a
/// tent among its 8-neighbors is grass.
fn grass_next_to_tents(puzzle: &mut Puzzle) {
    let dim = puzzle.dim();
    for x in 0..dim {
        for y in 0..dim {
            if puzzle.board().cell(x, y) == Cell::Empty
                && puzzle
                    .board()
                    .neighbors8(x, y)
                    .iter()
                    .any(|n| n.is(Cell::Tent))
            {
                puzzle.board_mut().set(x, y, Cell::Grass);
            }
        }
    }
}

/// Rule 6: a tree with no adjacent tent and a single empty 4-neighbor left
/// must get its tent there.
fn tent_for_constrained_tree(puzzle: &mut Puzzle) {
    let dim = puzzle.dim();
    for x in 0..dim {
        for y in 0..dim {
            if puzzle.board().cell(x, y) != Cell::Tree {
                continue;
            }
            let neighbors = puzzle.board().neighbors4(x, y);
            if neighbors.iter().any(|n| n.is(Cell::Tent)) {
                continue;
            }
            let mut empty_count = 0;
            let mut empty_index = None;
            for (i, n) in neighbors.iter().enumerate() {
                if n.is(Cell::Empty) {
                    empty_count += 1;
                    empty_index = Some(i);
                }
            }
            if let (1, Some(i)) = (empty_count, empty_index) {
                if let Some((nx, ny)) = puzzle.board().neighbor4_coord(x, y, i) {
                    puzzle.board_mut().set(nx, ny, Cell::Tent);
                }
            }
        }
    }
}
