//! Solver boundary: requests, responses, and the [`Solver`] trait.

use std::time::Duration;

use thiserror::Error;

use crate::{MAX_PLAYERS, Schedule, Score};

/// Parameters of a scheduling instance.
///
/// # Examples
/// ```rust
/// use golfer_core::{SolveRequest, SolveRequestValidationError};
///
/// let request = SolveRequest { player_count: 9, group_size: 3 };
/// assert!(request.validate().is_ok());
///
/// let too_many = SolveRequest { player_count: 17, group_size: 3 };
/// assert!(matches!(
///     too_many.validate(),
///     Err(SolveRequestValidationError::TooManyPlayers { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveRequest {
    /// Number of players to schedule.
    pub player_count: u8,
    /// Number of players in every group.
    pub group_size: u8,
}

/// Reasons a [`SolveRequest`] is rejected before searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveRequestValidationError {
    /// The instance has no players.
    #[error("player count must be at least 1")]
    NoPlayers,
    /// The played-relation cannot represent this many players.
    #[error("player count {count} exceeds the maximum of {max}")]
    TooManyPlayers {
        /// Requested player count.
        count: u8,
        /// Largest supported player count.
        max: usize,
    },
    /// Groups this small never form a pair.
    #[error("group size {size} is too small; groups need at least 2 players")]
    GroupTooSmall {
        /// Requested group size.
        size: u8,
    },
}

impl SolveRequest {
    /// Check the instance against the engine's capacity.
    pub fn validate(&self) -> Result<(), SolveRequestValidationError> {
        if self.player_count == 0 {
            return Err(SolveRequestValidationError::NoPlayers);
        }
        if usize::from(self.player_count) > MAX_PLAYERS {
            return Err(SolveRequestValidationError::TooManyPlayers {
                count: self.player_count,
                max: MAX_PLAYERS,
            });
        }
        if self.group_size < 2 {
            return Err(SolveRequestValidationError::GroupTooSmall {
                size: self.group_size,
            });
        }
        Ok(())
    }

    /// The empty schedule the search starts from.
    pub fn empty_schedule(&self) -> Result<Schedule, SolveRequestValidationError> {
        self.validate()?;
        Ok(Schedule::empty_for(self))
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostics {
    /// Number of search states visited, including the empty root.
    pub states_explored: u64,
    /// Wall-clock time spent searching.
    pub solve_time: Duration,
}

/// Result of a completed search.
///
/// When no schedule scores above zero, [`schedule`](Self::schedule) is the
/// empty starting schedule and [`score`](Self::score) is [`Score::ZERO`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolveResponse {
    /// Best schedule found.
    pub schedule: Schedule,
    /// Score of [`schedule`](Self::schedule).
    pub score: Score,
    /// Search counters.
    pub diagnostics: Diagnostics,
}

impl SolveResponse {
    /// Whether a balanced, fully packed schedule was found.
    pub const fn is_feasible(&self) -> bool {
        !self.score.is_zero()
    }
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The request failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] SolveRequestValidationError),
}

/// Alias for the solver error type.
pub type Error = SolveError;

/// Find the best schedule for an instance.
///
/// Implementations return [`Error::InvalidConfig`] for invalid requests rather
/// than panicking. An instance with no positively scoring schedule is not an
/// error; it yields a response with a zero score.
/// Solvers must be `Send + Sync` to operate safely across threads.
pub trait Solver: Send + Sync {
    /// Solve a request, producing the best schedule or an error.
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, Error>;
}
