//! Command-line interface for the golfer scheduling engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod solve;

pub use error::CliError;
use solve::{SolveArgs, run_solve};
#[cfg(test)]
use solve::{
    DEFAULT_GROUP_SIZE, DefaultSolverBuilder, OutputFormat, SolveConfig, SolverBuilder,
    config_from_layers_for_test, execute_solve, run_solve_with, write_solve_response,
};

pub(crate) const ARG_PLAYERS: &str = "players";
pub(crate) const ARG_GROUP_SIZE: &str = "group-size";
pub(crate) const ARG_MAX_PARALLEL: &str = "max-parallel";
pub(crate) const ARG_PRUNE_DOMINATED_GROUPS: &str = "prune-dominated-groups";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ENV_PLAYERS: &str = "GOLFER_CMDS_SOLVE_PLAYERS";

/// Run the golfer CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => run_solve(args)?,
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "golfer",
    about = "Schedule players into groups so that no two meet twice",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search for the best balanced schedule of an instance.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
