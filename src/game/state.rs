//! Game state types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::player::PlayerId;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round has been started yet.
    WaitingForPlayers,
    /// Waiting for the given player to play or skip.
    AwaitingPlay(PlayerId),
    /// One player is left holding cards and roles have been assigned.
    RoundComplete,
}

/// Something that happened during one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// The player passed.
    Skipped {
        /// The acting player.
        player_id: PlayerId,
    },
    /// The player's cards became the pile.
    Played {
        /// The acting player.
        player_id: PlayerId,
        /// Cards played.
        cards: Vec<Card>,
    },
    /// The player bombed; the pile is cleared.
    Bombed {
        /// The acting player.
        player_id: PlayerId,
        /// Cards played.
        cards: Vec<Card>,
    },
    /// Everyone else passed and the pile was cleared.
    PileCleared {
        /// The player who leads the fresh pile.
        leader: PlayerId,
    },
    /// The player emptied their hand.
    HandEmptied {
        /// The player who finished.
        player_id: PlayerId,
        /// Whether the emptying play was a bomb.
        bomb: bool,
    },
    /// Only one player holds cards; roles have been assigned.
    RoundComplete,
}

/// Round-scoped table state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    pub(crate) last_play: Option<Vec<Card>>,
    pub(crate) seating: Vec<PlayerId>,
    pub(crate) turn_order: Vec<PlayerId>,
    pub(crate) current_index: usize,
    pub(crate) consecutive_skips: usize,
    pub(crate) finished: Vec<PlayerId>,
    pub(crate) last_player: Option<PlayerId>,
}

impl TableState {
    /// Creates the table for a new round, first seat to act.
    #[must_use]
    pub fn new(seating: Vec<PlayerId>) -> Self {
        Self {
            turn_order: seating.clone(),
            seating,
            ..Self::default()
        }
    }

    /// Returns the pile, if any.
    #[must_use]
    pub fn last_play(&self) -> Option<&[Card]> {
        self.last_play.as_deref()
    }

    /// Returns the round's seating order.
    #[must_use]
    pub fn seating(&self) -> &[PlayerId] {
        &self.seating
    }

    /// Returns the players still holding cards, in turn order.
    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    /// Returns the number of consecutive skips since the last accepted play
    /// or pile reset.
    #[must_use]
    pub const fn consecutive_skips(&self) -> usize {
        self.consecutive_skips
    }

    /// Returns the players who emptied their hand, first finisher first.
    #[must_use]
    pub fn finished(&self) -> &[PlayerId] {
        &self.finished
    }

    /// Returns the player who made the last accepted play.
    #[must_use]
    pub const fn last_player(&self) -> Option<PlayerId> {
        self.last_player
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current(&self) -> Option<PlayerId> {
        self.turn_order.get(self.current_index).copied()
    }

    /// Returns the number of players still holding cards.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.turn_order.len()
    }

    pub(crate) fn advance(&mut self) {
        if !self.turn_order.is_empty() {
            self.current_index = (self.current_index + 1) % self.turn_order.len();
        }
    }

    /// Clears the pile and hands the lead to the last player to play, or to
    /// the current player if they are out.
    ///
    /// A reset of a pile that was already empty keeps the current player:
    /// the last player to play already had their lead.
    pub(crate) fn reset_pile(&mut self) -> Option<PlayerId> {
        let had_pile = self.last_play.take().is_some();
        self.consecutive_skips = 0;

        if let Some(index) = self
            .last_player
            .filter(|_| had_pile)
            .and_then(|leader| self.turn_order.iter().position(|&id| id == leader))
        {
            self.current_index = index;
        }
        self.current()
    }

    /// Moves the current player from the turn order to the finished list.
    /// The next player in order becomes current.
    pub(crate) fn finish_current(&mut self, bomb: bool) -> Option<PlayerId> {
        if self.current_index >= self.turn_order.len() {
            return None;
        }

        let player_id = self.turn_order.remove(self.current_index);
        if bomb {
            self.finished.insert(0, player_id);
        } else {
            self.finished.push(player_id);
        }

        if self.current_index >= self.turn_order.len() {
            self.current_index = 0;
        }
        Some(player_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn reset_leads_with_last_player_when_active() {
        let mut table = TableState::new(alloc::vec![0, 1, 2, 3]);
        table.last_play = Some(alloc::vec![Card::new(Suit::Clubs, Rank::Five)]);
        table.last_player = Some(1);
        table.current_index = 3;
        table.consecutive_skips = 3;

        assert_eq!(table.reset_pile(), Some(1));
        assert_eq!(table.consecutive_skips(), 0);
        assert!(table.last_play().is_none());
    }

    #[test]
    fn reset_keeps_current_when_last_player_is_out() {
        let mut table = TableState::new(alloc::vec![0, 2, 3]);
        table.last_player = Some(1);
        table.current_index = 2;

        assert_eq!(table.reset_pile(), Some(3));
    }

    #[test]
    fn reset_of_empty_pile_keeps_current() {
        let mut table = TableState::new(alloc::vec![0, 1, 2]);
        table.last_player = Some(0);
        table.current_index = 2;
        table.consecutive_skips = 2;

        assert_eq!(table.reset_pile(), Some(2));
        assert_eq!(table.consecutive_skips(), 0);
    }

    #[test]
    fn bomb_finisher_goes_to_front() {
        let mut table = TableState::new(alloc::vec![0, 1, 2, 3]);
        table.current_index = 3;
        assert_eq!(table.finish_current(false), Some(3));
        assert_eq!(table.current(), Some(0));

        table.current_index = 1;
        assert_eq!(table.finish_current(true), Some(1));
        assert_eq!(table.finished(), &[1, 3]);
        assert_eq!(table.turn_order(), &[0, 2]);
        assert_eq!(table.current(), Some(2));
    }
}
