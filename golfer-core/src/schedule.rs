//! Incremental schedule-construction state.
//!
//! A [`Schedule`] is the node type of the search tree: the groups placed so
//! far plus the played-relation derived from them. The last group is the
//! *pending* group; every earlier group is full. The played-relation is kept
//! in step with the groups on every mutation and is only recomputed from
//! scratch by [`Schedule::played_relation_is_consistent`].
//!
//! Two symmetry classes are broken by the predicates here. Groups are only
//! accepted in ascending order of their leaders, and players only join a group
//! in ascending order. A load-balance look-ahead additionally refuses to open
//! a group for a player who already has more matches than a lower-numbered
//! player, since such branches can never reach the all-equal balance that a
//! nonzero score requires.

use std::fmt;

use crate::{Group, Move, PlayedRelation, Player, SolveRequest, SolveRequestValidationError};

/// In-progress assignment of players to groups.
///
/// Branches that run concurrently each take a [`Clone`] of the schedule; a
/// strictly sequential caller may instead [`apply`](Self::apply) a move and
/// [`revert`](Self::revert) it on backtrack.
///
/// # Examples
///
/// ```
/// use golfer_core::{Schedule, Score};
///
/// # fn main() -> Result<(), golfer_core::SolveRequestValidationError> {
/// let mut schedule = Schedule::new(4, 4)?;
/// assert!(schedule.can_open_group(0));
/// schedule.open_group(0);
/// for player in 1..4 {
///     assert!(schedule.can_append(player));
///     schedule.append(player);
/// }
/// assert_eq!(schedule.score(), Score::new(3 * 4 + 1));
/// assert_eq!(schedule.to_string(), "0 1 2 3\n");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    player_count: u8,
    group_size: u8,
    groups: Vec<Group>,
    played: PlayedRelation,
}

impl Schedule {
    /// Create an empty schedule after validating the instance parameters.
    pub fn new(player_count: u8, group_size: u8) -> Result<Self, SolveRequestValidationError> {
        SolveRequest {
            player_count,
            group_size,
        }
        .empty_schedule()
    }

    /// Create an empty schedule for a request that has already been validated.
    pub(crate) fn empty_for(request: &SolveRequest) -> Self {
        Self {
            player_count: request.player_count,
            group_size: request.group_size,
            groups: Vec::new(),
            played: PlayedRelation::default(),
        }
    }

    /// Number of players in the instance.
    pub const fn player_count(&self) -> u8 {
        self.player_count
    }

    /// Capacity of every group.
    pub const fn group_size(&self) -> u8 {
        self.group_size
    }

    /// Groups placed so far; the last one is the pending group.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The group currently being filled, if any group exists.
    pub fn pending(&self) -> Option<&Group> {
        self.groups.last()
    }

    /// Whether no group has been opened yet.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The played-relation derived from the groups.
    pub const fn played(&self) -> &PlayedRelation {
        &self.played
    }

    /// Whether `a` and `b` already share a group.
    pub fn has_played(&self, a: Player, b: Player) -> bool {
        self.played.has_played(a, b)
    }

    /// Total matches played by `player` so far.
    pub fn match_count(&self, player: Player) -> u32 {
        self.played.match_count(player)
    }

    /// Iterate over every player identifier of the instance.
    pub fn players(&self) -> impl Iterator<Item = Player> + use<> {
        0..self.player_count
    }

    fn is_full(&self, group: &Group) -> bool {
        group.len() >= usize::from(self.group_size)
    }

    /// Whether a new group led by `player` may be opened.
    ///
    /// Always true for an empty schedule. Otherwise the pending group must be
    /// full, `player` must not be smaller than any existing leader, and
    /// `player` must not have more matches than any lower-numbered player.
    pub fn can_open_group(&self, player: Player) -> bool {
        if player >= self.player_count {
            return false;
        }
        let Some(pending) = self.pending() else {
            return true;
        };
        if !self.is_full(pending) {
            return false;
        }
        // Leaders never decrease, so the newest leader is the largest.
        if pending.leader().is_some_and(|leader| leader > player) {
            return false;
        }
        let own = self.match_count(player);
        (0..player).all(|other| self.match_count(other) >= own)
    }

    /// Whether `player` may join the pending group.
    ///
    /// The pending group must exist and have room, `player` must be greater
    /// than every member, and `player` must not have met any member yet.
    pub fn can_append(&self, player: Player) -> bool {
        if player >= self.player_count {
            return false;
        }
        let Some(pending) = self.pending() else {
            return false;
        };
        if self.is_full(pending) {
            return false;
        }
        pending
            .players()
            .iter()
            .all(|&member| member < player && !self.has_played(player, member))
    }

    /// Whether appending `player` keeps the pending group from being dominated
    /// by the group before it.
    ///
    /// While every member placed so far is no greater than the member at the
    /// same position of the previous group, the next member must be at least
    /// the previous group's member at the next position. Schedules rejected
    /// here are reached again through a lexicographically earlier ordering.
    pub fn follows_previous_group(&self, player: Player) -> bool {
        let [.., previous, pending] = self.groups.as_slice() else {
            return true;
        };
        let placed = pending.players();
        let dominated = placed
            .iter()
            .zip(previous.players())
            .all(|(own, earlier)| own <= earlier);
        match previous.get(placed.len()) {
            Some(threshold) if dominated => player >= threshold,
            _ => true,
        }
    }

    /// Start a new singleton group led by `player`.
    ///
    /// Callers check [`can_open_group`](Self::can_open_group) first.
    pub fn open_group(&mut self, player: Player) {
        debug_assert!(player < self.player_count, "player {player} out of range");
        self.groups.push(Group::singleton(player));
    }

    /// Add `player` to the pending group and record its new pairings.
    ///
    /// Callers check [`can_append`](Self::can_append) first.
    pub fn append(&mut self, player: Player) {
        let Some(pending) = self.groups.last_mut() else {
            debug_assert!(false, "append({player}) requires a pending group");
            return;
        };
        for &member in pending.players() {
            self.played.mark(player, member);
        }
        let pushed = pending.push(player);
        debug_assert!(pushed, "pending group overflowed");
    }

    /// Remove the pending group, forgetting every pairing it formed.
    pub fn close_last_group(&mut self) -> Option<Group> {
        let group = self.groups.pop()?;
        let members = group.players();
        for (index, &a) in members.iter().enumerate() {
            for &b in members.iter().skip(index + 1) {
                self.played.unmark(a, b);
            }
        }
        Some(group)
    }

    /// Remove the most recently appended player from the pending group.
    ///
    /// The group's leader is never removed this way; use
    /// [`close_last_group`](Self::close_last_group) for that. Returns the
    /// removed player, or `None` when the pending group only holds its leader.
    pub fn undo_append(&mut self) -> Option<Player> {
        let pending = self.groups.last_mut()?;
        if pending.len() < 2 {
            return None;
        }
        let player = pending.pop()?;
        for &member in pending.players() {
            self.played.unmark(player, member);
        }
        Some(player)
    }

    /// Whether `step` is allowed by the pruning predicates.
    pub fn is_legal(&self, step: Move) -> bool {
        match step {
            Move::OpenGroup(player) => self.can_open_group(player),
            Move::Append(player) => self.can_append(player),
        }
    }

    /// Apply `step` in place.
    pub fn apply(&mut self, step: Move) {
        match step {
            Move::OpenGroup(player) => self.open_group(player),
            Move::Append(player) => self.append(player),
        }
    }

    /// Undo a `step` previously passed to [`apply`](Self::apply).
    ///
    /// Returns `false` when the schedule's tail does not match `step`.
    pub fn revert(&mut self, step: Move) -> bool {
        match step {
            Move::OpenGroup(player) => {
                let opened = self
                    .pending()
                    .is_some_and(|group| group.len() == 1 && group.leader() == Some(player));
                opened && self.close_last_group().is_some()
            }
            Move::Append(player) => {
                let appended = self.pending().and_then(Group::last) == Some(player);
                appended && self.undo_append().is_some()
            }
        }
    }

    /// Every legal move in search order: for each player ascending, opening a
    /// group before appending.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.players()
            .flat_map(|player| [Move::OpenGroup(player), Move::Append(player)])
            .filter(|step| self.is_legal(*step))
    }

    /// Recompute the played-relation from the groups and compare it with the
    /// incrementally maintained one.
    pub fn played_relation_is_consistent(&self) -> bool {
        let mut expected = PlayedRelation::default();
        for group in &self.groups {
            let members = group.players();
            for (index, &a) in members.iter().enumerate() {
                for &b in members.iter().skip(index + 1) {
                    expected.mark(a, b);
                }
            }
        }
        expected == self.played
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            writeln!(f, "{group}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Schedule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Schedule", 3)?;
        state.serialize_field("player_count", &self.player_count)?;
        state.serialize_field("group_size", &self.group_size)?;
        state.serialize_field("groups", &self.groups)?;
        state.end()
    }
}
