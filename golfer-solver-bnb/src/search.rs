//! Recursive branch-and-bound driver.
//!
//! Every node tries, for each player in ascending order, opening a group and
//! appending to the pending group. Branches either run inline, mutating the
//! node's schedule and reverting afterwards, or on a scoped thread that owns a
//! clone of it. Either way the branch outcomes are folded in branch order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, Scope, ScopedJoinHandle};

use golfer_core::{Move, Schedule, Score};

use crate::governor::ConcurrencyGovernor;

/// A schedule that beat the score it was compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) schedule: Schedule,
    pub(crate) score: Score,
}

/// Shared state of one search: the governor and the explored-state counter.
#[derive(Debug)]
pub(crate) struct SearchContext {
    governor: ConcurrencyGovernor,
    explored: AtomicU64,
    prune_dominated_groups: bool,
}

enum Branch<'scope> {
    Spawned(ScopedJoinHandle<'scope, Option<Candidate>>),
    Finished(Option<Candidate>),
}

impl SearchContext {
    pub(crate) const fn new(max_parallel: usize, prune_dominated_groups: bool) -> Self {
        Self {
            governor: ConcurrencyGovernor::new(max_parallel),
            explored: AtomicU64::new(0),
            prune_dominated_groups,
        }
    }

    /// Number of states visited so far.
    pub(crate) fn states_explored(&self) -> u64 {
        self.explored.load(Ordering::Relaxed)
    }

    /// Search every extension of `schedule`, returning the best schedule found.
    ///
    /// `schedule` is handed back unchanged when nothing beats its own score.
    pub(crate) fn run(&self, mut schedule: Schedule) -> Candidate {
        match self.explore(&mut schedule) {
            Some(best) => best,
            None => Candidate {
                score: schedule.score(),
                schedule,
            },
        }
    }

    /// Visit one node. Returns the first descendant with the strictly highest
    /// score above the node's own, or `None` if no descendant beats it.
    ///
    /// `schedule` is restored to its entry state before returning.
    fn explore(&self, schedule: &mut Schedule) -> Option<Candidate> {
        self.record_state();
        let floor = schedule.score();
        let moves = self.moves(schedule);
        if moves.is_empty() {
            return None;
        }

        let outcomes = if moves.len() > 1 && self.governor.has_capacity() {
            self.explore_concurrently(schedule, &moves, floor)
        } else {
            moves
                .iter()
                .map(|step| self.branch(schedule, *step, floor))
                .collect()
        };

        outcomes
            .into_iter()
            .flatten()
            .fold(None, |best: Option<Candidate>, outcome| match best {
                Some(current) if current.score >= outcome.score => Some(current),
                _ => Some(outcome),
            })
    }

    fn explore_concurrently(
        &self,
        schedule: &mut Schedule,
        moves: &[Move],
        floor: Score,
    ) -> Vec<Option<Candidate>> {
        thread::scope(|scope| {
            let branches: Vec<Branch<'_>> = moves
                .iter()
                .map(|step| self.launch(scope, schedule, *step, floor))
                .collect();
            branches
                .into_iter()
                .map(|branch| match branch {
                    Branch::Finished(outcome) => outcome,
                    Branch::Spawned(handle) => handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload)),
                })
                .collect()
        })
    }

    fn launch<'scope, 'env>(
        &'env self,
        scope: &'scope Scope<'scope, 'env>,
        schedule: &mut Schedule,
        step: Move,
        floor: Score,
    ) -> Branch<'scope> {
        let Some(slot) = self.governor.try_acquire() else {
            return Branch::Finished(self.branch(schedule, step, floor));
        };
        let mut child = schedule.clone();
        Branch::Spawned(scope.spawn(move || {
            let outcome = self.branch(&mut child, step, floor);
            drop(slot);
            outcome
        }))
    }

    /// Apply `step`, search below it, and revert it.
    ///
    /// Yields the best schedule of the branch when it scores above `floor`.
    fn branch(&self, schedule: &mut Schedule, step: Move, floor: Score) -> Option<Candidate> {
        schedule.apply(step);
        let outcome = self
            .explore(schedule)
            .or_else(|| {
                let score = schedule.score();
                (score > floor).then(|| Candidate {
                    schedule: schedule.clone(),
                    score,
                })
            })
            .filter(|candidate| candidate.score > floor);
        let reverted = schedule.revert(step);
        debug_assert!(reverted, "failed to revert {step}");
        outcome
    }

    fn moves(&self, schedule: &Schedule) -> Vec<Move> {
        schedule
            .legal_moves()
            .filter(|step| match step {
                Move::Append(player) if self.prune_dominated_groups => {
                    schedule.follows_previous_group(*player)
                }
                _ => true,
            })
            .collect()
    }

    fn record_state(&self) {
        let explored = self.explored.fetch_add(1, Ordering::Relaxed).saturating_add(1);
        if explored.is_power_of_two() {
            log::debug!("explored {explored} states");
        }
    }
}
