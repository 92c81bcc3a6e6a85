//! Groups of players scheduled to meet one another.

use std::fmt;

use crate::{MAX_PLAYERS, Player};

/// An ordered group of players.
///
/// Players are stored in insertion order, which the search keeps strictly
/// ascending; the first player is the group's leader. The group is a small
/// `Copy` value so schedules can be duplicated cheaply when branching.
///
/// # Examples
///
/// ```
/// use golfer_core::Group;
///
/// let group = Group::singleton(4);
/// assert_eq!(group.leader(), Some(4));
/// assert_eq!(group.players(), &[4]);
/// assert_eq!(group.to_string(), "4");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Group {
    players: [Player; MAX_PLAYERS],
    len: u8,
}

impl Group {
    /// A group containing only `leader`.
    pub const fn singleton(leader: Player) -> Self {
        let mut players = [0; MAX_PLAYERS];
        players[0] = leader;
        Self { players, len: 1 }
    }

    /// Players in insertion order.
    pub fn players(&self) -> &[Player] {
        self.players
            .get(..usize::from(self.len))
            .unwrap_or_default()
    }

    /// Number of players in the group.
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// Whether the group has no players.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First player added to the group.
    pub fn leader(&self) -> Option<Player> {
        self.players().first().copied()
    }

    /// Most recently added player.
    pub fn last(&self) -> Option<Player> {
        self.players().last().copied()
    }

    /// Player at `index` in insertion order.
    pub fn get(&self, index: usize) -> Option<Player> {
        self.players().get(index).copied()
    }

    /// Whether `player` belongs to the group.
    pub fn contains(&self, player: Player) -> bool {
        self.players().contains(&player)
    }

    /// Append `player`; returns `false` when the group is at capacity.
    pub(crate) fn push(&mut self, player: Player) -> bool {
        let Some(slot) = self.players.get_mut(usize::from(self.len)) else {
            return false;
        };
        *slot = player;
        self.len += 1;
        true
    }

    /// Remove and return the most recently added player.
    pub(crate) fn pop(&mut self) -> Option<Player> {
        let player = self.last()?;
        self.len -= 1;
        // Unused slots stay zeroed so derived equality only sees live players.
        if let Some(slot) = self.players.get_mut(usize::from(self.len)) {
            *slot = 0;
        }
        Some(player)
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.players()).finish()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut players = self.players().iter();
        if let Some(first) = players.next() {
            write!(f, "{first}")?;
        }
        for player in players {
            write!(f, " {player}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Group {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.players())
    }
}
