use clap::{Parser, Subcommand};

mod check;
mod solve;

#[derive(Debug, Parser)]
#[command(name = "allot-app", about = "Allot purchase planner CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Solve an exported item file against a budget
    Solve(solve::SolveArgs),

    /// Validate an exported item file
    Check(check::CheckArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Solve(args) => solve::run(args).await,
            Commands::Check(args) => check::run(args).await,
        }
    }
}
