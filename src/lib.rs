//! Generator and solvers for the Tents and Trees grid logic puzzle.
//!
//! A puzzle is an N×N board seeded with trees, each tree paired with an
//! adjacent tent, every row and column carrying a published tent count, and
//! no two tents touching (diagonals included). The crate generates valid
//! instances ([`generate`]), solves them by deterministic rule propagation
//! ([`propagate`]), and solves them completely by building a declarative
//! constraint model ([`build_model`]) handed to a [`ConstraintEngine`].

mod board;
mod common;
mod config;
mod engine;
mod generator;
mod logging;
mod model;
mod propagate;
mod puzzle;

pub use board::*;
pub use common::*;
pub use config::*;
pub use engine::*;
pub use generator::*;
pub use logging::init_logging;
pub use model::*;
pub use propagate::*;
pub use puzzle::*;
