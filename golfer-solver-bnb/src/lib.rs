//! Exhaustive branch-and-bound solver for the social golfer problem.
//!
//! This crate provides [`BranchAndBoundSolver`], the default implementation of
//! the [`Solver`](golfer_core::Solver) trait. It walks every schedule reachable
//! through the pruning predicates of [`Schedule`](golfer_core::Schedule) and
//! keeps the first one with the highest score.
//!
//! Sibling branches run on scoped threads while the [`ConcurrencyGovernor`] has
//! free slots and fall back to the caller's stack otherwise. Branch results are
//! folded in branch order, so the returned schedule never depends on thread
//! timing.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod governor;
mod search;
mod solver;

pub use governor::{ConcurrencyGovernor, SlotGuard};
pub use solver::{BranchAndBoundConfig, BranchAndBoundSolver, search};
