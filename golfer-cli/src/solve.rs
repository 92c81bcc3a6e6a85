//! Solve command implementation for the golfer CLI.

use std::io::Write;

use clap::{Parser, ValueEnum};
use golfer_core::{SolveRequest, SolveResponse, Solver};
use golfer_solver_bnb::{BranchAndBoundConfig, BranchAndBoundSolver};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_FORMAT, ARG_GROUP_SIZE, ARG_MAX_PARALLEL, ARG_PLAYERS, ARG_PRUNE_DOMINATED_GROUPS,
    CliError, ENV_PLAYERS,
};

/// Group size used when none is configured.
pub(crate) const DEFAULT_GROUP_SIZE: u8 = 4;

/// How the solve result is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Explored state count, score, then one group per line.
    #[default]
    Text,
    /// The full solve response as pretty-printed JSON.
    Json,
}

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Search every schedule of the instance for the best balanced \
                 one. Options can come from CLI flags, configuration files, \
                 or environment variables.",
    about = "Find the best schedule for an instance"
)]
#[ortho_config(prefix = "GOLFER")]
pub(crate) struct SolveArgs {
    /// Number of players to schedule (1 to 16).
    #[arg(long = ARG_PLAYERS, value_name = "count")]
    #[serde(default)]
    pub(crate) players: Option<u8>,
    /// Number of players in every group (defaults to 4).
    #[arg(long = ARG_GROUP_SIZE, value_name = "count")]
    #[serde(default)]
    pub(crate) group_size: Option<u8>,
    /// Upper bound on branches searched concurrently; 0 searches sequentially.
    #[arg(long = ARG_MAX_PARALLEL, value_name = "count")]
    #[serde(default)]
    pub(crate) max_parallel: Option<usize>,
    /// Skip groups dominated by the group before them.
    #[arg(long = ARG_PRUNE_DOMINATED_GROUPS, value_name = "bool")]
    #[serde(default)]
    pub(crate) prune_dominated_groups: Option<bool>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Instance to solve.
    pub(crate) request: SolveRequest,
    /// Solver tuning.
    pub(crate) solver: BranchAndBoundConfig,
    /// Output format.
    pub(crate) format: OutputFormat,
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let player_count = args.players.ok_or(CliError::MissingArgument {
            field: ARG_PLAYERS,
            env: ENV_PLAYERS,
        })?;
        let group_size = args.group_size.unwrap_or(DEFAULT_GROUP_SIZE);

        let defaults = BranchAndBoundConfig::default();
        let solver = BranchAndBoundConfig {
            max_parallel: args.max_parallel.unwrap_or(defaults.max_parallel),
            prune_dominated_groups: args
                .prune_dominated_groups
                .unwrap_or(defaults.prune_dominated_groups),
        };

        Ok(Self {
            request: SolveRequest {
                player_count,
                group_size,
            },
            solver,
            format: args.format.unwrap_or_default(),
        })
    }
}

/// Builds a solver instance for the current solve invocation.
pub(crate) trait SolverBuilder {
    fn build(&self, config: &SolveConfig) -> Box<dyn Solver>;
}

pub(crate) struct DefaultSolverBuilder;

impl SolverBuilder for DefaultSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Box<dyn Solver> {
        Box::new(BranchAndBoundSolver::with_config(config.solver))
    }
}

pub(crate) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_solve_with(args, &DefaultSolverBuilder, &mut stdout)
}

pub(crate) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let response = execute_solve(&config, builder)?;
    write_solve_response(writer, &response, config.format)
}

pub(crate) fn execute_solve(
    config: &SolveConfig,
    builder: &dyn SolverBuilder,
) -> Result<SolveResponse, CliError> {
    config
        .request
        .validate()
        .map_err(CliError::InvalidRequest)?;
    log::debug!("resolved solve configuration: {config:?}");
    let solver = builder.build(config);
    let response = solver
        .solve(&config.request)
        .map_err(|source| CliError::Solve { source })?;
    if !response.is_feasible() {
        log::warn!(
            "no balanced schedule exists for {} players in groups of {}",
            config.request.player_count,
            config.request.group_size
        );
    }
    Ok(response)
}

pub(crate) fn write_solve_response(
    writer: &mut dyn Write,
    response: &SolveResponse,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_text(writer, response).map_err(CliError::WriteSolveOutput),
        OutputFormat::Json => {
            let payload = serde_json::to_string_pretty(response)
                .map_err(CliError::SerialiseSolveResponse)?;
            writeln!(writer, "{payload}").map_err(CliError::WriteSolveOutput)
        }
    }
}

fn write_text(writer: &mut dyn Write, response: &SolveResponse) -> std::io::Result<()> {
    writeln!(
        writer,
        "states explored: {}",
        response.diagnostics.states_explored
    )?;
    writeln!(writer, "score: {}", response.score)?;
    writeln!(writer)?;
    writeln!(writer, "result:")?;
    write!(writer, "{}", response.schedule)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
