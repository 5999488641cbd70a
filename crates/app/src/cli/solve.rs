use std::{io, path::PathBuf, time::Instant};

use allot::prelude::{Budget, ILPSolver, PurchaseModel, Receipt, Solver, persistence};
use clap::Args;
use humanize_duration::{Truncate, prelude::DurationExt};

#[derive(Debug, Args)]
pub(crate) struct SolveArgs {
    /// Path to an exported item document
    #[arg(long)]
    file: PathBuf,

    /// Budget to spend
    #[arg(long, env = "DEFAULT_BUDGET", default_value_t = 0.0)]
    budget: f64,

    /// Print the model formulation before solving
    #[arg(long)]
    show_model: bool,
}

pub(crate) async fn run(args: SolveArgs) -> Result<(), String> {
    let document = tokio::fs::read(&args.file)
        .await
        .map_err(|error| format!("failed to read {}: {error}", args.file.display()))?;

    let items = persistence::import(&document)
        .map_err(|error| format!("invalid item file {}: {error}", args.file.display()))?;

    let budget = Budget::new(args.budget).map_err(|error| format!("invalid budget: {error}"))?;

    let start = Instant::now();

    let model = PurchaseModel::build(&items, budget)
        .map_err(|error| format!("failed to build model: {error}"))?;

    if args.show_model {
        println!("{model}");
    }

    let plan = ILPSolver::solve(model).map_err(|error| format!("failed to solve: {error}"))?;

    let elapsed = start.elapsed();

    Receipt::new(&plan, budget)
        .write_to(io::stdout().lock())
        .map_err(|error| error.to_string())?;

    println!(
        "Solved {} items in {} ({:.6}s)",
        items.len(),
        elapsed.human(Truncate::Nano),
        elapsed.as_secs_f32()
    );

    Ok(())
}
