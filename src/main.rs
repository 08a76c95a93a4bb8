use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use tents::{
    build_model, fill_board, generate_with, init_logging, propagate, ConstraintEngine,
    GeneratorConfig, PropagateOutcome, SatEngine,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Grid dimension (side length).
    #[arg(long, default_value_t = 7)]
    dim: usize,
    /// Solver to run on the generated puzzle.
    #[arg(long, value_enum, default_value_t = SolverKind::RuleBased)]
    solver: SolverKind,
    /// Fix RNG seed for reproducible puzzles (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
    /// Override the number of tents instead of using the density formula.
    #[arg(long)]
    tents: Option<usize>,
}

#[derive(ValueEnum, Clone, Debug)]
enum SolverKind {
    /// Deterministic rule propagation; may stall on hard instances.
    RuleBased,
    /// Full constraint model handed to the SAT engine.
    ConstraintModel,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (puzzle will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let config = GeneratorConfig {
        tent_count: cli.tents,
        ..GeneratorConfig::default()
    };
    let generated =
        generate_with(&mut rng, cli.dim, &config).map_err(|e| anyhow::anyhow!(e))?;
    let mut puzzle = generated.puzzle;

    println!("Puzzle:");
    println!("{}", puzzle);

    match cli.solver {
        SolverKind::RuleBased => match propagate(&mut puzzle) {
            PropagateOutcome::Solved => {
                println!("Solved!");
                println!("{}", puzzle);
            }
            PropagateOutcome::Stalled => {
                println!("Could not fully solve by deduction alone; partial board:");
                println!("{}", puzzle);
                println!("Re-run with --solver constraint-model to finish it.");
            }
        },
        SolverKind::ConstraintModel => {
            let model = build_model(&puzzle).map_err(|e| anyhow::anyhow!(e))?;
            let mut engine = SatEngine::new();
            let assignment = engine.solve(&model, None).map_err(|e| anyhow::anyhow!(e))?;
            fill_board(&mut puzzle, &assignment);
            println!("Solved!");
            println!("{}", puzzle);
        }
    }
    Ok(())
}
