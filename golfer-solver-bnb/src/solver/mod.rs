//! `BranchAndBoundSolver` implementation backed by the recursive driver.

use std::time::Instant;

use golfer_core::{Diagnostics, Schedule, SolveError, SolveRequest, SolveResponse, Solver};

use crate::search::SearchContext;

/// Configuration for [`BranchAndBoundSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchAndBoundConfig {
    /// Upper bound on branches running concurrently on spawned threads.
    ///
    /// Zero runs the whole search on the calling thread.
    pub max_parallel: usize,
    /// Skip pending groups dominated by the group before them.
    ///
    /// Finds the same best score while visiting fewer states.
    pub prune_dominated_groups: bool,
}

impl BranchAndBoundConfig {
    /// Default upper bound on concurrently running branches.
    pub const DEFAULT_MAX_PARALLEL: usize = 32;
}

impl Default for BranchAndBoundConfig {
    fn default() -> Self {
        Self {
            max_parallel: Self::DEFAULT_MAX_PARALLEL,
            prune_dominated_groups: false,
        }
    }
}

/// Exhaustive solver returning the first highest-scoring schedule.
///
/// # Examples
///
/// ```
/// use golfer_core::{Score, SolveRequest, Solver};
/// use golfer_solver_bnb::BranchAndBoundSolver;
///
/// let solver = BranchAndBoundSolver::new();
/// let request = SolveRequest { player_count: 4, group_size: 4 };
/// let response = solver.solve(&request).expect("valid request");
/// assert_eq!(response.score, Score::new(13));
/// assert_eq!(response.schedule.to_string(), "0 1 2 3\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BranchAndBoundSolver {
    config: BranchAndBoundConfig,
}

impl BranchAndBoundSolver {
    /// Construct a solver using default configuration.
    pub fn new() -> Self {
        Self::with_config(BranchAndBoundConfig::default())
    }

    /// Construct a solver with explicit configuration.
    pub const fn with_config(config: BranchAndBoundConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub const fn config(&self) -> &BranchAndBoundConfig {
        &self.config
    }
}

impl Solver for BranchAndBoundSolver {
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError> {
        let schedule = request.empty_schedule()?;
        if request.group_size > request.player_count {
            log::warn!(
                "group size {} exceeds player count {}; no group can be filled",
                request.group_size,
                request.player_count
            );
        }
        log::info!(
            "searching schedules for {} players in groups of {} (max_parallel={}, prune_dominated_groups={})",
            request.player_count,
            request.group_size,
            self.config.max_parallel,
            self.config.prune_dominated_groups
        );
        let started_at = Instant::now();

        let context =
            SearchContext::new(self.config.max_parallel, self.config.prune_dominated_groups);
        let best = context.run(schedule);
        let diagnostics = Diagnostics {
            states_explored: context.states_explored(),
            solve_time: started_at.elapsed(),
        };
        log::info!(
            "search finished: score {} after {} states in {:?}",
            best.score,
            diagnostics.states_explored,
            diagnostics.solve_time
        );

        Ok(SolveResponse {
            schedule: best.schedule,
            score: best.score,
            diagnostics,
        })
    }
}

/// Find the best schedule for `player_count` players in groups of `group_size`
/// with the default configuration.
///
/// Returns the schedule together with the number of states explored. The
/// schedule is empty when nothing scores above zero.
///
/// # Examples
///
/// ```
/// let (schedule, explored) = golfer_solver_bnb::search(3, 3).expect("valid instance");
/// assert_eq!(schedule.to_string(), "0 1 2\n");
/// assert_eq!(explored, 11);
/// ```
pub fn search(player_count: u8, group_size: u8) -> Result<(Schedule, u64), SolveError> {
    let request = SolveRequest {
        player_count,
        group_size,
    };
    let response = BranchAndBoundSolver::new().solve(&request)?;
    Ok((response.schedule, response.diagnostics.states_explored))
}
