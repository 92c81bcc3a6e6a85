//! Single-step extensions of a [`Schedule`](crate::Schedule).

use std::fmt;

use crate::Player;

/// One way of extending a schedule by a single player.
///
/// The search tries both kinds for every player index, because opening a new
/// group and extending the pending one are independent opportunities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Start a new group led by the player.
    OpenGroup(Player),
    /// Add the player to the pending group.
    Append(Player),
}

impl Move {
    /// Player the move places.
    pub const fn player(self) -> Player {
        match self {
            Self::OpenGroup(player) | Self::Append(player) => player,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenGroup(player) => write!(f, "open group with {player}"),
            Self::Append(player) => write!(f, "append {player}"),
        }
    }
}
