//! Roles and role assignment at round end.

use alloc::vec::Vec;
use core::fmt;

use crate::error::RoleError;
use crate::player::PlayerId;
use crate::result::Standing;

/// A rank label assigned at round end, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    /// First to empty their hand.
    President,
    /// Second to empty their hand.
    VicePresident,
    /// Any middle finisher.
    Neutral,
    /// Second to last.
    ViceTrash,
    /// Last player holding cards.
    Trash,
}

impl Role {
    /// Returns the standard role list for `players` players.
    ///
    /// Returns an empty list for fewer than two players.
    #[must_use]
    pub fn standard_list(players: usize) -> Vec<Self> {
        match players {
            0 | 1 => Vec::new(),
            2 => alloc::vec![Self::President, Self::Trash],
            3 => alloc::vec![Self::President, Self::Neutral, Self::Trash],
            _ => {
                let mut roles = Vec::with_capacity(players);
                roles.push(Self::President);
                roles.push(Self::VicePresident);
                roles.extend(core::iter::repeat_n(Self::Neutral, players - 4));
                roles.push(Self::ViceTrash);
                roles.push(Self::Trash);
                roles
            }
        }
    }

    /// Returns the display name of the role.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::President => "President",
            Self::VicePresident => "Vice President",
            Self::Neutral => "Neutral",
            Self::ViceTrash => "Vice Trash",
            Self::Trash => "Trash",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps finishing order onto an ordered role list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssigner {
    roles: Vec<Role>,
}

impl RoleAssigner {
    /// Creates an assigner for the given role list, best role first.
    #[must_use]
    pub const fn new(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    /// Returns the role list.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Assigns roles to `finished` (first finisher first) followed by the
    /// one player still holding cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of players differs from the number of
    /// roles, or if a player appears twice.
    pub fn assign(
        &self,
        finished: &[PlayerId],
        remaining: PlayerId,
    ) -> Result<Vec<Standing>, RoleError> {
        let players = finished.len() + 1;
        if players != self.roles.len() {
            return Err(RoleError::CountMismatch {
                roles: self.roles.len(),
                players,
            });
        }

        let order = finished.iter().copied().chain(core::iter::once(remaining));
        let mut standings: Vec<Standing> = Vec::with_capacity(players);
        for (player_id, &role) in order.zip(&self.roles) {
            if standings.iter().any(|s| s.player_id == player_id) {
                return Err(RoleError::DuplicatePlayer(player_id));
            }
            standings.push(Standing { player_id, role });
        }

        Ok(standings)
    }
}

/// Returns the seating order for the next round: President first.
///
/// Players sharing a role keep their order in `standings`.
#[must_use]
pub fn seating_order(standings: &[Standing]) -> Vec<PlayerId> {
    let mut sorted = standings.to_vec();
    sorted.sort_by_key(|standing| standing.role);
    sorted.into_iter().map(|standing| standing.player_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_lists_by_player_count() {
        assert_eq!(
            Role::standard_list(2),
            alloc::vec![Role::President, Role::Trash]
        );
        assert_eq!(
            Role::standard_list(4),
            alloc::vec![
                Role::President,
                Role::VicePresident,
                Role::ViceTrash,
                Role::Trash
            ]
        );
        let six = Role::standard_list(6);
        assert_eq!(six.len(), 6);
        assert_eq!(six[2], Role::Neutral);
        assert_eq!(six[3], Role::Neutral);
        assert!(Role::standard_list(1).is_empty());
    }

    #[test]
    fn assign_appends_remaining_player_as_trash() {
        let assigner = RoleAssigner::new(Role::standard_list(4));
        let standings = assigner.assign(&[3, 1, 0], 2).unwrap();

        assert_eq!(standings[0], Standing { player_id: 3, role: Role::President });
        assert_eq!(standings[3], Standing { player_id: 2, role: Role::Trash });
        assert_eq!(seating_order(&standings), alloc::vec![3, 1, 0, 2]);
    }

    #[test]
    fn assign_rejects_bad_input() {
        let assigner = RoleAssigner::new(Role::standard_list(3));
        assert_eq!(
            assigner.assign(&[0], 1),
            Err(RoleError::CountMismatch { roles: 3, players: 2 })
        );
        assert_eq!(
            assigner.assign(&[0, 1], 0),
            Err(RoleError::DuplicatePlayer(0))
        );
    }
}
