//! Test-only helpers for building schedules and checking their invariants.
//!
//! Solver crates enable the `test-support` feature to reuse these checks in
//! behaviour and property tests.

use thiserror::Error;

use crate::{MAX_PLAYERS, Move, Player, Schedule, Score, SolveRequestValidationError};

/// An invariant a returned schedule must satisfy but does not.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A group holds more players than the group size.
    #[error("group {index} holds {len} players; the group size is {group_size}")]
    OversizedGroup {
        /// Position of the group in the schedule.
        index: usize,
        /// Players in the group.
        len: usize,
        /// Configured group size.
        group_size: u8,
    },
    /// A group other than the last one is not full.
    #[error("group {index} holds {len} players but is followed by another group")]
    UnfilledGroup {
        /// Position of the group in the schedule.
        index: usize,
        /// Players in the group.
        len: usize,
    },
    /// A group references a player outside the instance.
    #[error("group {index} references unknown player {player}")]
    UnknownPlayer {
        /// Position of the group in the schedule.
        index: usize,
        /// Offending player.
        player: Player,
    },
    /// Two players share more than one group.
    #[error("players {a} and {b} share {times} groups")]
    Rematch {
        /// Lower player of the pair.
        a: Player,
        /// Higher player of the pair.
        b: Player,
        /// Number of shared groups.
        times: u32,
    },
    /// A positively scored schedule has unequal match counts.
    #[error("schedule scores {score} but match counts differ")]
    Unbalanced {
        /// Score reported for the schedule.
        score: Score,
    },
    /// The score disagrees with the closed-form formula.
    #[error("schedule scores {actual} but the formula gives {expected}")]
    ScoreMismatch {
        /// Score derived from the groups.
        expected: Score,
        /// Score reported by the schedule.
        actual: Score,
    },
    /// The incremental played-relation no longer matches the groups.
    #[error("played-relation drifted from the groups")]
    PlayedRelationDrift,
}

/// Build a schedule by replaying `groups` without consulting the pruning
/// predicates. Empty groups are skipped.
pub fn schedule_from_groups(
    player_count: u8,
    group_size: u8,
    groups: &[&[Player]],
) -> Result<Schedule, SolveRequestValidationError> {
    let mut schedule = Schedule::new(player_count, group_size)?;
    for group in groups {
        let mut members = group.iter().copied();
        let Some(leader) = members.next() else {
            continue;
        };
        schedule.apply(Move::OpenGroup(leader));
        for member in members {
            schedule.apply(Move::Append(member));
        }
    }
    Ok(schedule)
}

/// Total matches of every player, summed group by group.
pub fn match_totals(schedule: &Schedule) -> Vec<u32> {
    schedule
        .players()
        .map(|player| {
            schedule
                .groups()
                .iter()
                .filter(|group| group.contains(player))
                .map(|group| u32::try_from(group.len().saturating_sub(1)).unwrap_or(u32::MAX))
                .sum()
        })
        .collect()
}

/// Check every structural invariant of a schedule returned by a solver.
///
/// Verifies group sizes, the absence of rematches, the incremental
/// played-relation, and, for positively scored schedules, balance and the
/// score formula.
pub fn check_schedule(schedule: &Schedule) -> Result<(), InvariantViolation> {
    check_group_sizes(schedule)?;
    check_no_rematch(schedule)?;
    if !schedule.played_relation_is_consistent() {
        return Err(InvariantViolation::PlayedRelationDrift);
    }
    check_score(schedule)
}

fn check_group_sizes(schedule: &Schedule) -> Result<(), InvariantViolation> {
    let group_size = schedule.group_size();
    let capacity = usize::from(group_size);
    let last = schedule.groups().len().saturating_sub(1);
    for (index, group) in schedule.groups().iter().enumerate() {
        if group.len() > capacity {
            return Err(InvariantViolation::OversizedGroup {
                index,
                len: group.len(),
                group_size,
            });
        }
        if index < last && group.len() < capacity {
            return Err(InvariantViolation::UnfilledGroup {
                index,
                len: group.len(),
            });
        }
        if let Some(&player) = group
            .players()
            .iter()
            .find(|player| **player >= schedule.player_count())
        {
            return Err(InvariantViolation::UnknownPlayer { index, player });
        }
    }
    Ok(())
}

fn check_no_rematch(schedule: &Schedule) -> Result<(), InvariantViolation> {
    let mut meetings = [[0_u32; MAX_PLAYERS]; MAX_PLAYERS];
    for group in schedule.groups() {
        let members = group.players();
        for (position, &a) in members.iter().enumerate() {
            for &b in members.iter().skip(position + 1) {
                let (low, high) = if a < b { (a, b) } else { (b, a) };
                let Some(cell) = meetings
                    .get_mut(usize::from(low))
                    .and_then(|row| row.get_mut(usize::from(high)))
                else {
                    continue;
                };
                *cell += 1;
                if *cell > 1 {
                    return Err(InvariantViolation::Rematch {
                        a: low,
                        b: high,
                        times: *cell,
                    });
                }
            }
        }
    }
    Ok(())
}

fn check_score(schedule: &Schedule) -> Result<(), InvariantViolation> {
    let actual = schedule.score();
    if actual.is_zero() {
        return Ok(());
    }
    let totals = match_totals(schedule);
    let Some(&matches) = totals.first() else {
        return Err(InvariantViolation::Unbalanced { score: actual });
    };
    if totals.iter().any(|total| *total != matches) {
        return Err(InvariantViolation::Unbalanced { score: actual });
    }
    let expected = Score::balanced(matches, schedule.player_count(), schedule.groups().len());
    if expected == actual {
        Ok(())
    } else {
        Err(InvariantViolation::ScoreMismatch { expected, actual })
    }
}
