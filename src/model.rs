//! Declarative constraint model of a puzzle instance.
//!
//! The model is a disposable view rebuilt per solve: one integer variable
//! per cell over the domain {grass, tent, tree}, plus boolean tent/tree
//! indicators linked to it by equivalences, and the puzzle rules stated as
//! linear and conditional sum constraints over the indicators. Solving the
//! model is a [`crate::engine::ConstraintEngine`]'s job; this module's
//! obligation is the encoding and reading the assignment back.

use crate::board::{offset_coord, Cell, K4_OFFSETS, K8_OFFSETS};
use crate::common::ModelError;
use crate::puzzle::Puzzle;

/// Value domain of a cell variable. `Empty` has no counterpart: a model
/// assignment is always total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue {
    Grass,
    Tent,
    Tree,
}

impl From<CellValue> for Cell {
    fn from(value: CellValue) -> Cell {
        match value {
            CellValue::Grass => Cell::Grass,
            CellValue::Tent => Cell::Tent,
            CellValue::Tree => Cell::Tree,
        }
    }
}

/// Index of a boolean indicator variable within a [`Model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolVar(pub usize);

/// A single constraint of the declarative model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelConstraint {
    /// The cell's integer variable is fixed to `value`.
    FixValue { cell: usize, value: CellValue },
    /// The cell's integer variable can never take `value`.
    ForbidValue { cell: usize, value: CellValue },
    /// `var` holds exactly when the cell's variable equals `value`.
    Link {
        var: BoolVar,
        cell: usize,
        value: CellValue,
    },
    /// The sum of `vars` equals `rhs`.
    SumEq { vars: Vec<BoolVar>, rhs: usize },
    /// The sum of `vars` is at least `rhs`, enforced only when `cond`
    /// holds.
    CondSumAtLeast {
        cond: BoolVar,
        vars: Vec<BoolVar>,
        rhs: usize,
    },
    /// The sum of `vars` equals `rhs`, enforced only when `cond` holds.
    CondSumEq {
        cond: BoolVar,
        vars: Vec<BoolVar>,
        rhs: usize,
    },
}

/// Encoding switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelOptions {
    /// Also require every tent to have a tree among its 4-neighbors.
    /// Enabled by default for the complete encoding; disabling it yields a
    /// weaker, under-constrained model.
    pub tent_needs_tree: bool,
}

impl Default for ModelOptions {
    fn default() -> Self {
        ModelOptions {
            tent_needs_tree: true,
        }
    }
}

/// The constraint model handed to an engine. Cell `(x, y)` maps to index
/// `x * dim + y`, matching the board's row-major layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    dim: usize,
    bool_var_count: usize,
    tent_vars: Vec<BoolVar>,
    tree_vars: Vec<BoolVar>,
    constraints: Vec<ModelConstraint>,
}

impl Model {
    /// Board dimension the model was built from.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of cells (and of integer cell variables).
    pub fn cell_count(&self) -> usize {
        self.dim * self.dim
    }

    /// Total number of boolean indicator variables.
    pub fn bool_var_count(&self) -> usize {
        self.bool_var_count
    }

    /// "Is this cell a tent" indicator for `cell`.
    pub fn tent_var(&self, cell: usize) -> BoolVar {
        self.tent_vars[cell]
    }

    /// "Is this cell a tree" indicator for `cell`.
    pub fn tree_var(&self, cell: usize) -> BoolVar {
        self.tree_vars[cell]
    }

    /// All posted constraints, in posting order.
    pub fn constraints(&self) -> &[ModelConstraint] {
        &self.constraints
    }
}

/// A total assignment of every cell, as returned by an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<CellValue>,
}

impl Assignment {
    /// Wrap per-cell values in board index order.
    pub fn new(values: Vec<CellValue>) -> Self {
        Assignment { values }
    }

    /// Resolved value of `cell`.
    pub fn value(&self, cell: usize) -> CellValue {
        self.values[cell]
    }
}

/// Build the constraint model for `puzzle` with default options.
pub fn build_model(puzzle: &Puzzle) -> Result<Model, ModelError> {
    build_model_with(puzzle, &ModelOptions::default())
}

/// Build the constraint model for `puzzle`.
///
/// Fails fast when the row and column constraint totals disagree — such an
/// instance is infeasible and not worth encoding.
pub fn build_model_with(puzzle: &Puzzle, options: &ModelOptions) -> Result<Model, ModelError> {
    if !puzzle.constraint_sums_match() {
        return Err(ModelError::ConstraintSumMismatch {
            rows: puzzle.row_constraints().iter().sum(),
            cols: puzzle.col_constraints().iter().sum(),
        });
    }

    let dim = puzzle.dim();
    let cells = dim * dim;
    let tent_vars: Vec<BoolVar> = (0..cells).map(BoolVar).collect();
    let tree_vars: Vec<BoolVar> = (cells..2 * cells).map(BoolVar).collect();
    let mut constraints = Vec::new();

    // Indicator equivalences, then the tree layout fixed from the board.
    for cell in 0..cells {
        constraints.push(ModelConstraint::Link {
            var: tent_vars[cell],
            cell,
            value: CellValue::Tent,
        });
        constraints.push(ModelConstraint::Link {
            var: tree_vars[cell],
            cell,
            value: CellValue::Tree,
        });
    }
    for x in 0..dim {
        for y in 0..dim {
            let cell = x * dim + y;
            if puzzle.board().cell(x, y) == Cell::Tree {
                constraints.push(ModelConstraint::FixValue {
                    cell,
                    value: CellValue::Tree,
                });
            } else {
                constraints.push(ModelConstraint::ForbidValue {
                    cell,
                    value: CellValue::Tree,
                });
            }
        }
    }

    // Published line counts.
    for x in 0..dim {
        constraints.push(ModelConstraint::SumEq {
            vars: (0..dim).map(|y| tent_vars[x * dim + y]).collect(),
            rhs: puzzle.row_constraint(x),
        });
    }
    for y in 0..dim {
        constraints.push(ModelConstraint::SumEq {
            vars: (0..dim).map(|x| tent_vars[x * dim + y]).collect(),
            rhs: puzzle.col_constraint(y),
        });
    }

    // Adjacency rules, conditioned on the cell's own indicators.
    for x in 0..dim {
        for y in 0..dim {
            let cell = x * dim + y;
            let four: Vec<usize> = neighbor_cells(dim, x, y, &K4_OFFSETS);
            let eight: Vec<usize> = neighbor_cells(dim, x, y, &K8_OFFSETS);

            // Every tree has at least one adjacent tent.
            constraints.push(ModelConstraint::CondSumAtLeast {
                cond: tree_vars[cell],
                vars: four.iter().map(|&c| tent_vars[c]).collect(),
                rhs: 1,
            });

            // Every tent has at least one adjacent tree.
            if options.tent_needs_tree {
                constraints.push(ModelConstraint::CondSumAtLeast {
                    cond: tent_vars[cell],
                    vars: four.iter().map(|&c| tree_vars[c]).collect(),
                    rhs: 1,
                });
            }

            // Two tents cannot touch, diagonals included.
            constraints.push(ModelConstraint::CondSumEq {
                cond: tent_vars[cell],
                vars: eight.iter().map(|&c| tent_vars[c]).collect(),
                rhs: 0,
            });
        }
    }

    Ok(Model {
        dim,
        bool_var_count: 2 * cells,
        tent_vars,
        tree_vars,
        constraints,
    })
}

/// Copy an engine's assignment back onto the board, resolving every cell.
pub fn fill_board(puzzle: &mut Puzzle, assignment: &Assignment) {
    let dim = puzzle.dim();
    for x in 0..dim {
        for y in 0..dim {
            let value = assignment.value(x * dim + y);
            puzzle.board_mut().set(x, y, value.into());
        }
    }
}

/// Flat indices of the on-board neighbors of `(x, y)` under `offsets`.
fn neighbor_cells(dim: usize, x: usize, y: usize, offsets: &[(isize, isize)]) -> Vec<usize> {
    offsets
        .iter()
        .filter_map(|&d| offset_coord(dim, x, y, d))
        .map(|(nx, ny)| nx * dim + ny)
        .collect()
}
