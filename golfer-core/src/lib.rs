//! Core domain types for the Golfer scheduling engine.
//!
//! The engine partitions `P` players into a sequence of fixed-size groups so
//! that no pair of players meets twice and every player ends up with the same
//! number of matches. This crate holds the incremental search state
//! ([`Schedule`]), the played-relation bitsets it is built on, the pruning
//! predicates, the scoring function, and the [`Solver`] boundary implemented
//! by search backends.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod group;
mod moves;
mod played;
mod schedule;
mod score;
mod solver;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use group::Group;
pub use moves::Move;
pub use played::{MAX_PLAYERS, OpponentSet, PlayedRelation};
pub use schedule::Schedule;
pub use score::Score;
pub use solver::{
    Diagnostics, Error, SolveError, SolveRequest, SolveRequestValidationError, SolveResponse,
    Solver,
};

/// Identifier of a player in `0..player_count`.
pub type Player = u8;
