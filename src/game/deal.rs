use alloc::vec::Vec;

use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::MIN_PLAYERS;
use crate::player::PlayerId;
use crate::role::RoleAssigner;

use super::{Game, GameState, TableState};

impl Game {
    /// Returns the seating order for the next round.
    ///
    /// The first round uses join order. Later rounds seat by the last
    /// round's roles, President first; players who joined since are seated
    /// after them in join order.
    #[must_use]
    pub fn next_seating(&self) -> Vec<PlayerId> {
        let mut seating = self
            .last_result
            .as_ref()
            .map(|result| result.seating_order())
            .unwrap_or_default();
        seating.retain(|&id| self.player(id).is_some());

        for player in &self.players {
            if !seating.contains(&player.id) {
                seating.push(player.id);
            }
        }
        seating
    }

    fn begin_round(&mut self) -> Result<(Vec<PlayerId>, RoleAssigner), DealError> {
        if matches!(self.state, GameState::AwaitingPlay(_)) {
            return Err(DealError::RoundInProgress);
        }

        let count = self.players.len();
        if count < MIN_PLAYERS {
            return Err(DealError::UnsupportedPlayerCount(count));
        }
        let roles = self
            .options
            .roles
            .get(count)
            .ok_or(DealError::UnsupportedPlayerCount(count))?;

        Ok((self.next_seating(), RoleAssigner::new(roles.to_vec())))
    }

    fn seat(&mut self, seating: Vec<PlayerId>, assigner: RoleAssigner) {
        self.round += 1;
        self.assigner = Some(assigner);
        self.table = TableState::new(seating);

        log::info!(
            "round {} started with {} players",
            self.round,
            self.players.len()
        );

        self.state = self
            .table
            .current()
            .map_or(GameState::RoundComplete, GameState::AwaitingPlay);
    }

    /// Shuffles a fresh deck, deals it, and seats players for a new round.
    ///
    /// The deck is dealt round-robin over the seating order starting at
    /// [`GameOptions::deal_offset`](crate::GameOptions::deal_offset). The
    /// first seat acts first.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, fewer than
    /// [`MIN_PLAYERS`](crate::MIN_PLAYERS) players are seated, or no role
    /// list exists for the number of players.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        let (seating, assigner) = self.begin_round()?;

        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);

        let mut hands: Vec<Hand> = alloc::vec![Hand::new(); seating.len()];
        deck.deal(&mut hands, self.options.deal_offset);

        for (&player_id, hand) in seating.iter().zip(hands) {
            if let Some(player) = self.players.get_mut(usize::from(player_id)) {
                player.hand = hand;
            }
        }

        self.seat(seating, assigner);
        Ok(())
    }

    /// Seats players for a new round with predetermined hands, indexed by
    /// player ID. Useful for replays and tests.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, fewer than
    /// [`MIN_PLAYERS`](crate::MIN_PLAYERS) players are seated, no role list
    /// exists for the number of players, or the number of hands differs from
    /// the number of players.
    pub fn start_round_with_hands(&mut self, hands: Vec<Hand>) -> Result<(), DealError> {
        if hands.len() != self.players.len() {
            return Err(DealError::HandCountMismatch {
                expected: self.players.len(),
                found: hands.len(),
            });
        }

        let (seating, assigner) = self.begin_round()?;

        for (player, mut hand) in self.players.iter_mut().zip(hands) {
            hand.sort();
            player.hand = hand;
        }

        self.seat(seating, assigner);
        Ok(())
    }
}
