//! Randomized puzzle generation.
//!
//! Tents are scattered under the mutual-adjacency rule, line constraints
//! are derived from the tent layout, one tree is attached next to each
//! tent, and finally the tents are hidden again. Placement is rejection
//! sampling with a bounded per-placement retry budget; a blown budget
//! abandons the whole attempt and generation restarts from an empty board.

use log::debug;
use rand::Rng;

use crate::board::{Board, Cell};
use crate::common::GenerationError;
use crate::config::GeneratorConfig;
use crate::puzzle::Puzzle;

/// A successfully generated instance: the published puzzle (trees and line
/// constraints only) and the hidden solution board with the tents still in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    pub puzzle: Puzzle,
    pub solution: Board,
}

/// A single generation attempt ran out of placement retries.
struct AttemptFailed;

/// Generate a puzzle with default parameters. See [`generate_with`].
pub fn generate<R: Rng>(rng: &mut R, dim: usize) -> Result<GeneratedPuzzle, GenerationError> {
    generate_with(rng, dim, &GeneratorConfig::default())
}

/// Generate a `dim`-sized puzzle, restarting from an empty board whenever
/// an attempt exhausts its placement retries. Gives up with
/// [`GenerationError::RetriesExhausted`] once `max_restarts` consecutive
/// attempts have failed, which signals a configuration problem (dimension
/// too small for the tent density) rather than bad luck.
pub fn generate_with<R: Rng>(
    rng: &mut R,
    dim: usize,
    config: &GeneratorConfig,
) -> Result<GeneratedPuzzle, GenerationError> {
    if dim == 0 {
        return Err(GenerationError::InvalidDimension(dim));
    }
    let target = config.tent_target(dim);
    for attempt in 0..config.max_restarts {
        match try_generate(rng, dim, target, config.max_tries) {
            Ok(generated) => return Ok(generated),
            Err(AttemptFailed) => {
                debug!("generation attempt {} failed, restarting", attempt + 1);
            }
        }
    }
    Err(GenerationError::RetriesExhausted(config.max_restarts))
}

fn try_generate<R: Rng>(
    rng: &mut R,
    dim: usize,
    target: usize,
    max_tries: u32,
) -> Result<GeneratedPuzzle, AttemptFailed> {
    let mut board = Board::new(dim);
    place_tents(rng, &mut board, target, max_tries)?;

    // Line constraints are derived from the tents-only board; the trees
    // added below must not disturb them.
    let row_constraints: Vec<usize> = (0..dim).map(|x| board.count_in_row(x, Cell::Tent)).collect();
    let col_constraints: Vec<usize> = (0..dim).map(|y| board.count_in_col(y, Cell::Tent)).collect();

    place_trees(rng, &mut board, max_tries)?;
    let solution = board.clone();
    remove_tents(&mut board);

    Ok(GeneratedPuzzle {
        puzzle: Puzzle::new(board, row_constraints, col_constraints),
        solution,
    })
}

/// Scatter `count` tents, each on an empty cell with no tent among its
/// 8-neighbors. The adjacency rule holds at all times, not just at the end.
fn place_tents<R: Rng>(
    rng: &mut R,
    board: &mut Board,
    count: usize,
    max_tries: u32,
) -> Result<(), AttemptFailed> {
    let dim = board.dim();
    for _ in 0..count {
        let mut placed = false;
        for _ in 0..max_tries {
            let x = rng.random_range(0..dim);
            let y = rng.random_range(0..dim);
            if board.cell(x, y) == Cell::Empty
                && !board.neighbors8(x, y).iter().any(|n| n.is(Cell::Tent))
            {
                board.set(x, y, Cell::Tent);
                placed = true;
                break;
            }
        }
        if !placed {
            return Err(AttemptFailed);
        }
    }
    Ok(())
}

/// Attach one tree to each tent by sampling a 4-neighbor index until an
/// empty on-board cell comes up. A tree placed for one tent may end up
/// adjacent to another tent as well; the pairing is only used here, never
/// published.
fn place_trees<R: Rng>(rng: &mut R, board: &mut Board, max_tries: u32) -> Result<(), AttemptFailed> {
    let dim = board.dim();
    for x in 0..dim {
        for y in 0..dim {
            if board.cell(x, y) != Cell::Tent {
                continue;
            }
            let mut placed = false;
            for _ in 0..max_tries {
                let i = rng.random_range(0..4);
                if let Some((nx, ny)) = board.neighbor4_coord(x, y, i) {
                    if board.cell(nx, ny) == Cell::Empty {
                        board.set(nx, ny, Cell::Tree);
                        placed = true;
                        break;
                    }
                }
            }
            if !placed {
                return Err(AttemptFailed);
            }
        }
    }
    Ok(())
}

/// Hide the solution: tents revert to empty cells, leaving only trees and
/// the derived constraints visible.
fn remove_tents(board: &mut Board) {
    let dim = board.dim();
    for x in 0..dim {
        for y in 0..dim {
            if board.cell(x, y) == Cell::Tent {
                board.set(x, y, Cell::Empty);
            }
        }
    }
}
