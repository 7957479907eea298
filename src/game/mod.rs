//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::JoinError;
use crate::options::GameOptions;
use crate::player::{Player, PlayerId, RosterEntry, SeatStatus, StateView};
use crate::result::RoundResult;
use crate::role::RoleAssigner;

mod deal;
mod round;
pub mod state;
mod turn;

pub use state::{GameState, TableState, TurnEvent};

/// A President game engine that manages seating, dealing, and turn
/// resolution.
///
/// The game owns every player's hand and the table. Plays are submitted
/// with [`Game::play`], or a round is driven to completion with
/// [`Game::run_round`].
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Players in join order; a player's ID is their index.
    players: Vec<Player>,
    /// Table state for the current round.
    table: TableState,
    /// Role list for the current round.
    assigner: Option<RoleAssigner>,
    /// Number of rounds started.
    round: u32,
    /// Result of the last completed round.
    last_result: Option<RoundResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use president::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            state: GameState::WaitingForPlayers,
            players: Vec::new(),
            table: TableState::default(),
            assigner: None,
            round: 0,
            last_result: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Joins the game under the given name.
    ///
    /// Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is being played or the role table has no
    /// list for one more player.
    pub fn join(&mut self, name: impl Into<String>) -> Result<PlayerId, JoinError> {
        if matches!(self.state, GameState::AwaitingPlay(_)) {
            return Err(JoinError::RoundInProgress);
        }

        let count = self.players.len() + 1;
        if count > self.options.roles.max_players().unwrap_or(0) {
            return Err(JoinError::TableFull);
        }
        let id = PlayerId::try_from(self.players.len()).map_err(|_| JoinError::TableFull)?;

        self.players.push(Player::new(id, name.into()));
        Ok(id)
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns all players in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the specified player.
    #[must_use]
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.get(usize::from(player_id))
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the table state of the current (or last) round.
    #[must_use]
    pub const fn table(&self) -> &TableState {
        &self.table
    }

    /// Returns the player ID whose turn it is.
    ///
    /// Returns `None` if no round is awaiting a play.
    #[must_use]
    pub const fn current_player(&self) -> Option<PlayerId> {
        match self.state {
            GameState::AwaitingPlay(player_id) => Some(player_id),
            _ => None,
        }
    }

    /// Returns the number of rounds started.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the result of the last completed round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns a read-only view of the table for the specified player.
    ///
    /// Returns `None` if the player ID is not found.
    #[must_use]
    pub fn view(&self, player_id: PlayerId) -> Option<StateView<'_>> {
        let player = self.player(player_id)?;

        let roster = self
            .table
            .seating
            .iter()
            .filter_map(|&id| self.player(id))
            .map(|seat| {
                let status = self
                    .table
                    .finished
                    .iter()
                    .position(|&id| id == seat.id)
                    .map_or(
                        SeatStatus::Active {
                            cards: seat.hand.len(),
                        },
                        |index| SeatStatus::Finished { place: index + 1 },
                    );
                RosterEntry {
                    player_id: seat.id,
                    name: &seat.name,
                    role: seat.role,
                    status,
                }
            })
            .collect();

        Some(StateView {
            player_id,
            hand: &player.hand,
            last_play: self.table.last_play(),
            max_lead_size: self.options.max_lead_size,
            roster,
        })
    }
}
