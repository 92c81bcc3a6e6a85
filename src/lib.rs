//! Facade crate for the Golfer scheduling engine.
//!
//! This crate re-exports the core domain types and exposes the exhaustive
//! branch-and-bound solver behind a feature flag.

#![forbid(unsafe_code)]

pub use golfer_core::{
    Diagnostics, Group, MAX_PLAYERS, Move, OpponentSet, PlayedRelation, Player, Schedule, Score,
    SolveError, SolveRequest, SolveRequestValidationError, SolveResponse, Solver,
};

#[cfg(feature = "test-support")]
pub use golfer_core::test_support;

#[cfg(feature = "solver-bnb")]
pub use golfer_solver_bnb::{
    BranchAndBoundConfig, BranchAndBoundSolver, ConcurrencyGovernor, SlotGuard, search,
};
