//! Fixed-width played-relation bitsets.
//!
//! Every player owns an [`OpponentSet`]: a 16-bit mask with bit `q` set once
//! the player has shared a group with player `q`. The mask width is the hard
//! capacity of the engine, exposed as [`MAX_PLAYERS`].

use crate::Player;

/// Largest player count representable by the 16-bit played-relation.
pub const MAX_PLAYERS: usize = 16;

/// Set of opponents a single player has already met.
///
/// # Examples
///
/// ```
/// use golfer_core::OpponentSet;
///
/// let mut opponents = OpponentSet::EMPTY;
/// opponents.insert(3);
/// opponents.insert(7);
/// assert!(opponents.contains(3));
/// assert_eq!(opponents.len(), 2);
/// assert_eq!(opponents.bits(), 0b1000_1000);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OpponentSet(u16);

impl OpponentSet {
    /// A set with no opponents.
    pub const EMPTY: Self = Self(0);

    /// Raw bit representation; bit `q` is set when `q` is in the set.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Whether `player` is in the set. Out-of-range players never are.
    pub fn contains(self, player: Player) -> bool {
        self.0 & bit(player) != 0
    }

    /// Add `player`. Out-of-range players are ignored.
    pub fn insert(&mut self, player: Player) {
        self.0 |= bit(player);
    }

    /// Remove `player`.
    pub fn remove(&mut self, player: Player) {
        self.0 &= !bit(player);
    }

    /// Number of opponents in the set.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

fn bit(player: Player) -> u16 {
    1_u16.checked_shl(u32::from(player)).unwrap_or(0)
}

/// Symmetric "has already played" relation over every player.
///
/// The relation is kept incrementally by [`Schedule`](crate::Schedule):
/// [`mark`](Self::mark) when a pair first shares a group and
/// [`unmark`](Self::unmark) when that is undone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PlayedRelation {
    rows: [OpponentSet; MAX_PLAYERS],
}

impl PlayedRelation {
    /// Whether `a` and `b` have shared a group.
    pub fn has_played(&self, a: Player, b: Player) -> bool {
        self.opponents(a).contains(b)
    }

    /// Record that `a` and `b` shared a group, in both directions.
    pub fn mark(&mut self, a: Player, b: Player) {
        if let Some(row) = self.rows.get_mut(usize::from(a)) {
            row.insert(b);
        }
        if let Some(row) = self.rows.get_mut(usize::from(b)) {
            row.insert(a);
        }
    }

    /// Forget that `a` and `b` shared a group, in both directions.
    pub fn unmark(&mut self, a: Player, b: Player) {
        if let Some(row) = self.rows.get_mut(usize::from(a)) {
            row.remove(b);
        }
        if let Some(row) = self.rows.get_mut(usize::from(b)) {
            row.remove(a);
        }
    }

    /// Opponents `player` has met so far.
    pub fn opponents(&self, player: Player) -> OpponentSet {
        self.rows
            .get(usize::from(player))
            .copied()
            .unwrap_or(OpponentSet::EMPTY)
    }

    /// Number of distinct opponents `player` has met.
    ///
    /// Rematches are never recorded, so this is also the player's total
    /// match count.
    pub fn match_count(&self, player: Player) -> u32 {
        self.opponents(player).len()
    }
}
