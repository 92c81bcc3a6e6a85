//! Proptest strategies for branch-and-bound property-based tests.
//!
//! Instances are kept small enough for an exhaustive search to finish in a
//! debug build within a handful of milliseconds.

use golfer_core::{Move, Schedule, SolveRequest};
use proptest::prelude::*;

/// Strategy for instances with at most six players and groups of two to four.
///
/// Six players in pairs is excluded: its exhaustive search visits millions of
/// states.
pub fn small_instance_strategy() -> impl Strategy<Value = SolveRequest> {
    (1_u8..=6, 2_u8..=4)
        .prop_filter("six players in pairs is too slow", |&(players, size)| {
            (players, size) != (6, 2)
        })
        .prop_map(|(player_count, group_size)| SolveRequest {
            player_count,
            group_size,
        })
}

/// Strategy for a sequence of choices driving [`random_walk`].
pub fn choices_strategy() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(any::<usize>(), 0..40)
}

/// Follow legal moves from the empty schedule, picking the move at
/// `choice % legal.len()` at each step, and return every schedule visited.
pub fn random_walk(start: Schedule, choices: &[usize]) -> Vec<Schedule> {
    let mut visited = vec![start.clone()];
    let mut schedule = start;
    for choice in choices {
        let legal: Vec<Move> = schedule.legal_moves().collect();
        let Some(step) = legal.get(choice % legal.len().max(1)).copied() else {
            break;
        };
        schedule.apply(step);
        visited.push(schedule.clone());
    }
    visited
}
