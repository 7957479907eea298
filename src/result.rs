//! Round result types.

use alloc::vec::Vec;

use crate::player::PlayerId;
use crate::role::{Role, seating_order};

/// A player's final position in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    /// The player ID.
    pub player_id: PlayerId,
    /// The role earned this round.
    pub role: Role,
}

/// Result of a completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// Standings in finishing order: President first, Trash last.
    pub standings: Vec<Standing>,
}

impl RoundResult {
    /// Returns the role earned by the player, if they took part.
    #[must_use]
    pub fn role_of(&self, player_id: PlayerId) -> Option<Role> {
        self.standings
            .iter()
            .find(|standing| standing.player_id == player_id)
            .map(|standing| standing.role)
    }

    /// Returns the seating order for the next round.
    #[must_use]
    pub fn seating_order(&self) -> Vec<PlayerId> {
        seating_order(&self.standings)
    }
}
