use rand::rngs::SmallRng;
use rand::SeedableRng;
use tents::{generate, propagate, Board, Cell, PropagateOutcome, Puzzle};

fn puzzle_with_trees(
    dim: usize,
    trees: &[(usize, usize)],
    rows: Vec<usize>,
    cols: Vec<usize>,
) -> Puzzle {
    let mut board = Board::new(dim);
    for &(x, y) in trees {
        board.set(x, y, Cell::Tree);
    }
    Puzzle::new(board, rows, cols)
}

#[test]
fn test_five_by_five_corner_scenario() {
    // Two trees, one near each corner, one tent per outer line: the unique
    // solution puts tents exactly at (0,0) and (4,4).
    let mut puzzle = puzzle_with_trees(
        5,
        &[(0, 1), (4, 3)],
        vec![1, 0, 0, 0, 1],
        vec![1, 0, 0, 0, 1],
    );

    assert_eq!(propagate(&mut puzzle), PropagateOutcome::Solved);
    assert_eq!(puzzle.board().cell(0, 0), Cell::Tent);
    assert_eq!(puzzle.board().cell(4, 4), Cell::Tent);
    assert_eq!(puzzle.board().count(Cell::Tent), 2);
    assert_eq!(puzzle.board().count(Cell::Tree), 2);
    assert_eq!(puzzle.board().count(Cell::Grass), 21);
    // Each tent sits next to its own tree.
    assert!(puzzle.board().neighbors4(0, 0).iter().any(|n| n.is(Cell::Tree)));
    assert!(puzzle.board().neighbors4(4, 4).iter().any(|n| n.is(Cell::Tree)));
}

#[test]
fn test_ambiguous_instance_stalls() {
    // Two interchangeable tent pairs fit the same constraints, so pure
    // deduction cannot commit: the solver halts with empties left.
    let mut puzzle = puzzle_with_trees(3, &[(1, 0), (1, 2)], vec![1, 0, 1], vec![1, 0, 1]);

    assert_eq!(propagate(&mut puzzle), PropagateOutcome::Stalled);
    assert_eq!(puzzle.board().count(Cell::Empty), 4);
    assert_eq!(puzzle.board().count(Cell::Tent), 0);
    for (x, y) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
        assert_eq!(puzzle.board().cell(x, y), Cell::Empty);
    }
}

#[test]
fn test_empty_puzzle_solves_to_all_grass() {
    let mut puzzle = puzzle_with_trees(3, &[], vec![0, 0, 0], vec![0, 0, 0]);
    assert_eq!(propagate(&mut puzzle), PropagateOutcome::Solved);
    assert_eq!(puzzle.board().count(Cell::Grass), 9);
}

#[test]
fn test_propagation_is_a_fixed_point() {
    // Running the solver again on its own output changes nothing, whether
    // it solved or stalled.
    for seed in 0..10u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut puzzle = generate(&mut rng, 7).unwrap().puzzle;
        let first = propagate(&mut puzzle);
        let after_first = puzzle.clone();
        let second = propagate(&mut puzzle);
        assert_eq!(first, second);
        assert_eq!(puzzle, after_first);
    }
}

#[test]
fn test_resolved_cells_are_never_reverted() {
    let mut rng = SmallRng::seed_from_u64(11);
    let generated = generate(&mut rng, 7).unwrap();
    let published = generated.puzzle.clone();
    let mut puzzle = generated.puzzle;
    propagate(&mut puzzle);

    for x in 0..7 {
        for y in 0..7 {
            let before = published.board().cell(x, y);
            let after = puzzle.board().cell(x, y);
            match before {
                // Trees are fixed for good.
                Cell::Tree => assert_eq!(after, Cell::Tree),
                // Unknowns only ever move forward to a placement.
                Cell::Empty => assert_ne!(after, Cell::Tree),
                _ => panic!("published boards hold only trees and empties"),
            }
        }
    }
}

#[test]
fn test_solved_boards_satisfy_all_rules() {
    let mut solved_seen = 0;
    for seed in 0..30u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut puzzle = generate(&mut rng, 7).unwrap().puzzle;
        if propagate(&mut puzzle) != PropagateOutcome::Solved {
            continue;
        }
        solved_seen += 1;
        assert!(puzzle.board().is_full());
        assert!(puzzle.line_counts_satisfied());
        for x in 0..7 {
            for y in 0..7 {
                if puzzle.board().cell(x, y) != Cell::Tent {
                    continue;
                }
                assert!(!puzzle.board().neighbors8(x, y).iter().any(|n| n.is(Cell::Tent)));
                assert!(puzzle.board().neighbors4(x, y).iter().any(|n| n.is(Cell::Tree)));
            }
        }
    }
    // Rule propagation fully resolves most generated 7x7 instances.
    assert!(solved_seen > 0, "no instance solved by propagation");
}
