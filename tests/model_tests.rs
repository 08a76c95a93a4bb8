use rand::rngs::SmallRng;
use rand::SeedableRng;
use tents::{
    build_model, build_model_with, fill_board, generate, propagate, Board, Cell,
    ConstraintEngine, EngineError, ModelConstraint, ModelError, ModelOptions, PropagateOutcome,
    Puzzle, SatEngine,
};

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

fn assert_board_valid(puzzle: &Puzzle) {
    let dim = puzzle.dim();
    assert!(puzzle.board().is_full());
    assert!(puzzle.line_counts_satisfied());
    for x in 0..dim {
        for y in 0..dim {
            if puzzle.board().cell(x, y) != Cell::Tent {
                continue;
            }
            assert!(!puzzle.board().neighbors8(x, y).iter().any(|n| n.is(Cell::Tent)));
            assert!(puzzle.board().neighbors4(x, y).iter().any(|n| n.is(Cell::Tree)));
        }
    }
}

#[test]
fn test_mismatched_constraint_sums_rejected() {
    let puzzle = puzzle_with_trees(3, &[(1, 1)], vec![1, 0, 0], vec![1, 1, 0]);
    assert_eq!(
        build_model(&puzzle).unwrap_err(),
        ModelError::ConstraintSumMismatch { rows: 1, cols: 2 }
    );
}

#[test]
fn test_model_shape() {
    let puzzle = puzzle_with_trees(3, &[(1, 1)], vec![0, 1, 0], vec![0, 0, 1]);
    let model = build_model(&puzzle).unwrap();

    assert_eq!(model.dim(), 3);
    assert_eq!(model.cell_count(), 9);
    // One tent and one tree indicator per cell.
    assert_eq!(model.bool_var_count(), 18);

    let sums = model
        .constraints()
        .iter()
        .filter(|c| matches!(c, ModelConstraint::SumEq { .. }))
        .count();
    assert_eq!(sums, 6); // one per row, one per column

    let fixed_trees = model
        .constraints()
        .iter()
        .filter(|c| matches!(c, ModelConstraint::FixValue { .. }))
        .count();
    assert_eq!(fixed_trees, 1);
}

#[test]
fn test_engine_agrees_with_propagation() {
    // A uniquely solvable instance must come out identical from both
    // solvers.
    let reference = puzzle_with_trees(
        5,
        &[(0, 1), (4, 3)],
        vec![1, 0, 0, 0, 1],
        vec![1, 0, 0, 0, 1],
    );

    let mut by_rules = reference.clone();
    assert_eq!(propagate(&mut by_rules), PropagateOutcome::Solved);

    let mut by_model = reference;
    let model = build_model(&by_model).unwrap();
    let assignment = SatEngine::new().solve(&model, None).unwrap();
    fill_board(&mut by_model, &assignment);

    assert_eq!(by_rules, by_model);
}

#[test]
fn test_engine_finishes_where_propagation_stalls() {
    // The symmetric instance that stalls rule propagation still has valid
    // solutions, and the engine picks one of them.
    let mut puzzle = puzzle_with_trees(3, &[(1, 0), (1, 2)], vec![1, 0, 1], vec![1, 0, 1]);
    assert_eq!(propagate(&mut puzzle), PropagateOutcome::Stalled);

    let model = build_model(&puzzle).unwrap();
    let assignment = SatEngine::new().solve(&model, None).unwrap();
    fill_board(&mut puzzle, &assignment);

    assert_board_valid(&puzzle);
    assert_eq!(puzzle.board().count(Cell::Tent), 2);
}

#[test]
fn test_overconstrained_instance_is_infeasible() {
    // The only cell fitting both line counts is (1,1), which no tree
    // touches; the tree at (0,0) also cannot get a tent into a zero line.
    let puzzle = puzzle_with_trees(2, &[(0, 0)], vec![0, 1], vec![0, 1]);
    let model = build_model(&puzzle).unwrap();
    assert_eq!(
        SatEngine::new().solve(&model, None).unwrap_err(),
        EngineError::Infeasible
    );
}

#[test]
fn test_engine_solves_generated_instances() {
    for seed in 0..10u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut puzzle = generate(&mut rng, 7).unwrap().puzzle;
        let model = build_model(&puzzle).unwrap();
        let assignment = SatEngine::new().solve(&model, None).unwrap();
        fill_board(&mut puzzle, &assignment);
        assert_board_valid(&puzzle);
    }
}

#[test]
fn test_weaker_encoding_still_satisfies_counts() {
    // Dropping the tent-needs-tree direction under-constrains the model;
    // line counts and tent separation must still hold in any solution.
    let options = ModelOptions {
        tent_needs_tree: false,
    };
    let mut rng = SmallRng::seed_from_u64(5);
    let mut puzzle = generate(&mut rng, 7).unwrap().puzzle;
    let model = build_model_with(&puzzle, &options).unwrap();
    let assignment = SatEngine::new().solve(&model, None).unwrap();
    fill_board(&mut puzzle, &assignment);

    assert!(puzzle.board().is_full());
    assert!(puzzle.line_counts_satisfied());
    for x in 0..7 {
        for y in 0..7 {
            if puzzle.board().cell(x, y) == Cell::Tent {
                assert!(!puzzle.board().neighbors8(x, y).iter().any(|n| n.is(Cell::Tent)));
            }
        }
    }
}

#[test]
fn test_fill_board_resolves_every_cell() {
    let mut puzzle = puzzle_with_trees(3, &[(1, 1)], vec![1, 0, 0], vec![0, 1, 0]);
    let model = build_model(&puzzle).unwrap();
    let assignment = SatEngine::new().solve(&model, None).unwrap();
    fill_board(&mut puzzle, &assignment);

    assert!(puzzle.board().is_full());
    assert_eq!(puzzle.board().cell(1, 1), Cell::Tree);
    assert_eq!(puzzle.board().cell(0, 1), Cell::Tent);
}
