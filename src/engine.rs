//! Constraint-engine interface and the SAT-backed default engine.
//!
//! The engine is a collaborator: it receives a finished [`Model`] and hands
//! back a feasible total assignment or a definitive infeasibility signal.
//! [`SatEngine`] lowers the model to CNF and delegates the search to
//! varisat; the search itself is the engine's business, the lowering is
//! ours.

use std::time::Duration;

use itertools::Itertools;
use varisat::{CnfFormula, ExtendFormula, Lit, Solver, Var};

use crate::common::EngineError;
use crate::model::{Assignment, BoolVar, CellValue, Model, ModelConstraint};

/// A generic constraint-solving engine.
pub trait ConstraintEngine {
    /// Solve `model`, returning a total assignment or
    /// [`EngineError::Infeasible`]. `budget` is forwarded opaquely; an
    /// engine without deadline support may ignore it.
    fn solve(
        &mut self,
        model: &Model,
        budget: Option<Duration>,
    ) -> Result<Assignment, EngineError>;
}

/// Default engine backed by the varisat SAT solver.
#[derive(Debug, Default)]
pub struct SatEngine;

impl SatEngine {
    pub fn new() -> Self {
        SatEngine
    }
}

impl ConstraintEngine for SatEngine {
    // varisat exposes no deadline, so the budget is accepted and dropped.
    fn solve(
        &mut self,
        model: &Model,
        _budget: Option<Duration>,
    ) -> Result<Assignment, EngineError> {
        let mut solver = Solver::new();
        let vars: Vec<Var> = (0..model.bool_var_count())
            .map(|_| solver.new_var())
            .collect();
        let lit = |v: BoolVar| Lit::from_var(vars[v.0], true);

        let mut formula = CnfFormula::new();

        // The integer cell variable takes a single value, so a cell's tent
        // and tree indicators exclude each other. Together with the unit
        // clauses from Fix/Forbid below this realizes the three-value
        // domain: both indicators false means grass.
        for cell in 0..model.cell_count() {
            formula.add_clause(&[!lit(model.tent_var(cell)), !lit(model.tree_var(cell))]);
        }

        for constraint in model.constraints() {
            match constraint {
                // Indicator identity is structural here: the SAT variable
                // *is* the linked indicator.
                ModelConstraint::Link { .. } => {}
                ModelConstraint::FixValue { cell, value } => match value {
                    CellValue::Tent => formula.add_clause(&[lit(model.tent_var(*cell))]),
                    CellValue::Tree => formula.add_clause(&[lit(model.tree_var(*cell))]),
                    CellValue::Grass => {
                        formula.add_clause(&[!lit(model.tent_var(*cell))]);
                        formula.add_clause(&[!lit(model.tree_var(*cell))]);
                    }
                },
                ModelConstraint::ForbidValue { cell, value } => match value {
                    CellValue::Tent => formula.add_clause(&[!lit(model.tent_var(*cell))]),
                    CellValue::Tree => formula.add_clause(&[!lit(model.tree_var(*cell))]),
                    CellValue::Grass => formula
                        .add_clause(&[lit(model.tent_var(*cell)), lit(model.tree_var(*cell))]),
                },
                ModelConstraint::SumEq { vars, rhs } => {
                    let lits: Vec<Lit> = vars.iter().map(|&v| lit(v)).collect();
                    encode_at_most_k(&mut formula, &lits, *rhs, &[]);
                    encode_at_least_k(&mut formula, &lits, *rhs, &[]);
                }
                ModelConstraint::CondSumAtLeast { cond, vars, rhs } => {
                    let lits: Vec<Lit> = vars.iter().map(|&v| lit(v)).collect();
                    encode_at_least_k(&mut formula, &lits, *rhs, &[!lit(*cond)]);
                }
                ModelConstraint::CondSumEq { cond, vars, rhs } => {
                    let lits: Vec<Lit> = vars.iter().map(|&v| lit(v)).collect();
                    encode_at_most_k(&mut formula, &lits, *rhs, &[!lit(*cond)]);
                    encode_at_least_k(&mut formula, &lits, *rhs, &[!lit(*cond)]);
                }
            }
        }

        solver.add_formula(&formula);
        let feasible = solver
            .solve()
            .map_err(|e| EngineError::Backend(e.to_string()))?;
        if !feasible {
            return Err(EngineError::Infeasible);
        }
        let sat_model = solver
            .model()
            .ok_or_else(|| EngineError::Backend("solver produced no model".into()))?;

        let mut values = Vec::with_capacity(model.cell_count());
        for cell in 0..model.cell_count() {
            let tent = sat_model.contains(&lit(model.tent_var(cell)));
            let tree = sat_model.contains(&lit(model.tree_var(cell)));
            values.push(match (tent, tree) {
                (_, true) => CellValue::Tree,
                (true, false) => CellValue::Tent,
                (false, false) => CellValue::Grass,
            });
        }
        Ok(Assignment::new(values))
    }
}

/// Clauses forbidding more than `k` of `lits` from holding: every
/// `(k + 1)`-combination must contain a false literal. `prefix` literals are
/// prepended to each clause, which turns the constraint into an implication
/// (the conditional constraints pass the negated condition here). The naive
/// combinatorial encoding is fine at the line lengths and tent counts this
/// puzzle produces.
fn encode_at_most_k(formula: &mut CnfFormula, lits: &[Lit], k: usize, prefix: &[Lit]) {
    if k >= lits.len() {
        return;
    }
    for combo in lits.iter().copied().combinations(k + 1) {
        let mut clause = prefix.to_vec();
        clause.extend(combo.into_iter().map(|l| !l));
        formula.add_clause(&clause);
    }
}

/// Clauses requiring at least `k` of `lits` to hold: every
/// `(n - k + 1)`-combination must contain a true literal.
fn encode_at_least_k(formula: &mut CnfFormula, lits: &[Lit], k: usize, prefix: &[Lit]) {
    if k == 0 {
        return;
    }
    if k > lits.len() {
        // Unsatisfiable whenever the prefix condition holds.
        formula.add_clause(prefix);
        return;
    }
    for combo in lits.iter().copied().combinations(lits.len() - k + 1) {
        let mut clause = prefix.to_vec();
        clause.extend(combo);
        formula.add_clause(&clause);
    }
}
