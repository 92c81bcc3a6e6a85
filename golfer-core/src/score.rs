//! Scoring of complete and partial schedules.

use std::fmt;

use crate::Schedule;

/// Comparable quality of a schedule; higher is better.
///
/// A nonzero score is only awarded to fully packed, perfectly balanced
/// schedules and equals `matches_per_player * player_count + group_count`.
/// Group count only breaks ties between schedules with the same number of
/// matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Score(u64);

impl Score {
    /// Score of an infeasible or incomplete schedule.
    pub const ZERO: Self = Self(0);

    /// Wrap a raw score value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw score value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Whether the score marks an infeasible or incomplete schedule.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Score of a balanced schedule from its components.
    ///
    /// # Examples
    ///
    /// ```
    /// use golfer_core::Score;
    ///
    /// assert_eq!(Score::balanced(3, 4, 1).value(), 13);
    /// ```
    pub fn balanced(matches_per_player: u32, player_count: u8, group_count: usize) -> Self {
        let groups = u64::try_from(group_count).unwrap_or(u64::MAX);
        Self(
            u64::from(matches_per_player)
                .saturating_mul(u64::from(player_count))
                .saturating_add(groups),
        )
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Schedule {
    /// Evaluate the schedule.
    ///
    /// Returns [`Score::ZERO`] when the schedule is empty, when the pending
    /// group is not yet full, or when players have unequal match counts.
    pub fn score(&self) -> Score {
        let Some(pending) = self.pending() else {
            return Score::ZERO;
        };
        if pending.len() < usize::from(self.group_size()) {
            return Score::ZERO;
        }
        self.matches_per_player()
            .map_or(Score::ZERO, |matches| {
                Score::balanced(matches, self.player_count(), self.groups().len())
            })
    }

    /// The shared match count when every player has played the same number
    /// of matches.
    pub fn matches_per_player(&self) -> Option<u32> {
        let mut counts = self.players().map(|player| self.match_count(player));
        let first = counts.next()?;
        counts.all(|count| count == first).then_some(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::schedule_from_groups;
    use rstest::rstest;

    fn build(player_count: u8, group_size: u8, groups: &[&[u8]]) -> Schedule {
        schedule_from_groups(player_count, group_size, groups).expect("valid instance")
    }

    #[rstest]
    fn empty_schedule_scores_zero() {
        let schedule = build(4, 2, &[]);
        assert_eq!(schedule.score(), Score::ZERO);
    }

    #[rstest]
    fn incomplete_pending_group_scores_zero() {
        let schedule = build(4, 2, &[&[0, 1], &[2, 3], &[0]]);
        assert_eq!(schedule.score(), Score::ZERO);
    }

    #[rstest]
    fn unbalanced_schedule_scores_zero() {
        let schedule = build(4, 2, &[&[0, 1], &[0, 2]]);
        assert_eq!(schedule.matches_per_player(), None);
        assert_eq!(schedule.score(), Score::ZERO);
    }

    #[rstest]
    #[case::single_table(4, 4, vec![&[0, 1, 2, 3][..]], 13)]
    #[case::two_pairs(4, 2, vec![&[0, 1][..], &[2, 3]], 6)]
    #[case::round_robin(
        4,
        2,
        vec![&[0, 1][..], &[0, 2], &[0, 3], &[1, 2], &[1, 3], &[2, 3]],
        18
    )]
    #[case::fano_plane(
        7,
        3,
        vec![
            &[0, 1, 2][..],
            &[0, 3, 4],
            &[0, 5, 6],
            &[1, 3, 5],
            &[1, 4, 6],
            &[2, 3, 6],
            &[2, 4, 5],
        ],
        49
    )]
    fn balanced_schedule_score_matches_formula(
        #[case] player_count: u8,
        #[case] group_size: u8,
        #[case] groups: Vec<&[u8]>,
        #[case] expected: u64,
    ) {
        let schedule = build(player_count, group_size, &groups);
        assert_eq!(schedule.score(), Score::new(expected));
    }

    #[rstest]
    fn scores_order_by_value() {
        assert!(Score::new(2) > Score::new(1));
        assert!(Score::ZERO.is_zero());
        assert_eq!(Score::new(84).to_string(), "84");
    }
}
