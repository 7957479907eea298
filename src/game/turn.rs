use alloc::vec::Vec;

use crate::card::Card;
use crate::error::PlayError;
use crate::play::Play;
use crate::player::PlayerId;
use crate::result::RoundResult;
use crate::rules::{PlayKind, check_play};

use super::{Game, GameState, TurnEvent};

impl Game {
    fn ensure_player_turn(&self, player_id: PlayerId) -> Result<(), PlayError> {
        let GameState::AwaitingPlay(current) = self.state else {
            return Err(PlayError::InvalidState);
        };

        if self.player(player_id).is_none() {
            return Err(PlayError::PlayerNotFound);
        }

        if current != player_id {
            return Err(PlayError::NotYourTurn);
        }

        Ok(())
    }

    /// Submits a play for the player whose turn it is.
    ///
    /// On success returns what happened, in order. On error nothing changes
    /// and the same player is still to act.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is awaiting a play, the player is not
    /// found or not to act, the cards are not all in the player's hand, or
    /// the play breaks a legality rule (see [`check_play`]).
    pub fn play(&mut self, player_id: PlayerId, play: Play) -> Result<Vec<TurnEvent>, PlayError> {
        self.ensure_player_turn(player_id)?;

        match play {
            Play::Skip => Ok(self.apply_skip(player_id)),
            Play::Cards(cards) => {
                let kind = check_play(self.table.last_play(), &cards, self.options.max_lead_size)?;
                let hand = &mut self.players[usize::from(player_id)].hand;
                if !hand.remove_cards(&cards) {
                    return Err(PlayError::CardsNotInHand);
                }

                Ok(match kind {
                    PlayKind::Ordinary => self.apply_ordinary(player_id, cards),
                    PlayKind::Bomb => self.apply_bomb(player_id, cards),
                })
            }
        }
    }

    /// Skips the turn for the specified player.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is awaiting a play or it is not the
    /// player's turn.
    pub fn skip(&mut self, player_id: PlayerId) -> Result<Vec<TurnEvent>, PlayError> {
        self.play(player_id, Play::Skip)
    }

    /// Plays the given cards for the specified player.
    ///
    /// # Errors
    ///
    /// See [`Game::play`].
    pub fn play_cards(
        &mut self,
        player_id: PlayerId,
        cards: &[Card],
    ) -> Result<Vec<TurnEvent>, PlayError> {
        self.play(player_id, Play::cards(cards))
    }

    fn apply_skip(&mut self, player_id: PlayerId) -> Vec<TurnEvent> {
        let mut events = alloc::vec![TurnEvent::Skipped { player_id }];
        log::debug!("player {player_id} skips");

        self.table.consecutive_skips += 1;
        self.table.advance();

        if self.table.consecutive_skips >= self.table.active_count().saturating_sub(1) {
            if let Some(leader) = self.table.reset_pile() {
                log::debug!("pile cleared, player {leader} leads");
                events.push(TurnEvent::PileCleared { leader });
            }
        }

        self.sync_state();
        events
    }

    fn apply_ordinary(&mut self, player_id: PlayerId, cards: Vec<Card>) -> Vec<TurnEvent> {
        log::debug!("player {player_id} plays {} card(s)", cards.len());

        self.table.last_play = Some(cards.clone());
        self.table.consecutive_skips = 0;
        self.table.last_player = Some(player_id);

        let mut events = alloc::vec![TurnEvent::Played { player_id, cards }];
        if self.players[usize::from(player_id)].hand.is_empty() {
            self.hand_emptied(player_id, false, &mut events);
        } else {
            self.table.advance();
        }

        self.sync_state();
        events
    }

    fn apply_bomb(&mut self, player_id: PlayerId, cards: Vec<Card>) -> Vec<TurnEvent> {
        log::debug!("player {player_id} bombs with {} card(s)", cards.len());

        self.table.last_play = None;
        self.table.consecutive_skips = 0;
        self.table.last_player = Some(player_id);

        let mut events = alloc::vec![TurnEvent::Bombed { player_id, cards }];
        if self.players[usize::from(player_id)].hand.is_empty() {
            self.hand_emptied(player_id, true, &mut events);
            if let (GameState::AwaitingPlay(_), Some(leader)) = (self.state, self.table.current()) {
                events.push(TurnEvent::PileCleared { leader });
            }
        } else {
            // Bomber leads the fresh pile.
            events.push(TurnEvent::PileCleared { leader: player_id });
        }

        self.sync_state();
        events
    }

    fn hand_emptied(&mut self, player_id: PlayerId, bomb: bool, events: &mut Vec<TurnEvent>) {
        self.table.finish_current(bomb);
        events.push(TurnEvent::HandEmptied { player_id, bomb });

        if let Some(player) = self.player(player_id) {
            log::info!("{} has emptied their hand", player.name);
        }

        if self.table.active_count() <= 1 {
            self.complete_round();
            events.push(TurnEvent::RoundComplete);
        }
    }

    fn complete_round(&mut self) {
        // SAFETY: rounds start with at least `MIN_PLAYERS` seated and a role
        // list keyed by that count, players cannot join mid-round, and the
        // round completes as soon as one player holds cards. `finished` plus
        // that player therefore covers every seat exactly once.
        let standings = self
            .assigner
            .take()
            .zip(self.table.turn_order.first().copied())
            .and_then(|(assigner, remaining)| {
                assigner.assign(&self.table.finished, remaining).ok()
            })
            .expect("every seated player has finished or is the one left holding cards");

        for standing in &standings {
            if let Some(player) = self.players.get_mut(usize::from(standing.player_id)) {
                player.role = Some(standing.role);
                log::info!("{} became {}", player.name, standing.role);
            }
        }

        self.last_result = Some(RoundResult {
            round: self.round,
            standings,
        });
        self.state = GameState::RoundComplete;
    }

    fn sync_state(&mut self) {
        if self.state == GameState::RoundComplete {
            return;
        }
        if let Some(current) = self.table.current() {
            self.state = GameState::AwaitingPlay(current);
        }
    }
}
