//! Game configuration options.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::role::Role;

/// Smallest table a round can start with.
pub const MIN_PLAYERS: usize = 2;

/// Largest table covered by [`RoleTable::default`].
pub const DEFAULT_MAX_PLAYERS: usize = 8;

/// Ordered role lists keyed by player count.
///
/// ```
/// use president::{Role, RoleTable};
///
/// let table = RoleTable::standard(5);
/// assert_eq!(table.get(3), Some(&[Role::President, Role::Neutral, Role::Trash][..]));
/// assert_eq!(table.get(6), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleTable {
    lists: HashMap<usize, Vec<Role>>,
}

impl RoleTable {
    /// Creates a table with no role lists.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lists: HashMap::new(),
        }
    }

    /// Creates a table with the standard lists for [`MIN_PLAYERS`] to
    /// `max_players` players.
    #[must_use]
    pub fn standard(max_players: usize) -> Self {
        (MIN_PLAYERS..=max_players).fold(Self::empty(), |table, players| {
            table.with_list(Role::standard_list(players))
        })
    }

    /// Adds or replaces the list for `roles.len()` players.
    ///
    /// Lists for fewer than [`MIN_PLAYERS`] players are kept but never used:
    /// rounds refuse to start below that size.
    #[must_use]
    pub fn with_list(mut self, roles: Vec<Role>) -> Self {
        self.lists.insert(roles.len(), roles);
        self
    }

    /// Returns the role list for the given player count.
    #[must_use]
    pub fn get(&self, players: usize) -> Option<&[Role]> {
        self.lists.get(&players).map(Vec::as_slice)
    }

    /// Returns the largest supported player count.
    #[must_use]
    pub fn max_players(&self) -> Option<usize> {
        self.lists.keys().copied().max()
    }
}

impl Default for RoleTable {
    fn default() -> Self {
        Self::standard(DEFAULT_MAX_PLAYERS)
    }
}

/// Configuration options for a President game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use president::GameOptions;
///
/// let options = GameOptions::default()
///     .with_deal_offset(0)
///     .with_max_lead_size(3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Role lists keyed by player count.
    pub roles: RoleTable,
    /// Seat index that receives the first dealt card.
    pub deal_offset: usize,
    /// Largest number of cards that may be led on an empty pile.
    pub max_lead_size: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            roles: RoleTable::default(),
            deal_offset: 1,
            max_lead_size: 4,
        }
    }
}

impl GameOptions {
    /// Sets the role table.
    ///
    /// # Example
    ///
    /// ```
    /// use president::{GameOptions, RoleTable};
    ///
    /// let options = GameOptions::default().with_roles(RoleTable::standard(5));
    /// assert_eq!(options.roles.max_players(), Some(5));
    /// ```
    #[must_use]
    pub fn with_roles(mut self, roles: RoleTable) -> Self {
        self.roles = roles;
        self
    }

    /// Sets the seat index that receives the first dealt card.
    ///
    /// # Example
    ///
    /// ```
    /// use president::GameOptions;
    ///
    /// let options = GameOptions::default().with_deal_offset(0);
    /// assert_eq!(options.deal_offset, 0);
    /// ```
    #[must_use]
    pub const fn with_deal_offset(mut self, offset: usize) -> Self {
        self.deal_offset = offset;
        self
    }

    /// Sets the largest number of cards that may be led on an empty pile.
    ///
    /// # Example
    ///
    /// ```
    /// use president::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_lead_size(2);
    /// assert_eq!(options.max_lead_size, 2);
    /// ```
    #[must_use]
    pub const fn with_max_lead_size(mut self, max: usize) -> Self {
        self.max_lead_size = max;
        self
    }
}
