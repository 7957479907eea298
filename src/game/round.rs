use crate::error::RoundError;
use crate::player::Decide;
use crate::result::RoundResult;

use super::{Game, GameState};

impl Game {
    /// Starts a new round and drives it to completion.
    ///
    /// `controllers` is indexed by player ID. See [`Game::play_out`].
    ///
    /// # Errors
    ///
    /// Returns an error if the number of controllers differs from the number
    /// of players or the round cannot be started.
    pub fn run_round<D: Decide>(
        &mut self,
        controllers: &mut [D],
    ) -> Result<RoundResult, RoundError> {
        self.ensure_controllers(controllers.len())?;
        self.start_round()?;
        self.play_out(controllers)
    }

    /// Drives the round in progress to completion.
    ///
    /// The current player's controller is asked for a play until one is
    /// accepted. A rejected play is reported through [`Decide::rejected`]
    /// and the same controller is asked again; the turn never advances on an
    /// invalid play. A controller that never returns a legal play keeps
    /// this loop running.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of controllers differs from the number
    /// of players or no round has been started.
    pub fn play_out<D: Decide>(
        &mut self,
        controllers: &mut [D],
    ) -> Result<RoundResult, RoundError> {
        self.ensure_controllers(controllers.len())?;
        if self.state == GameState::WaitingForPlayers {
            return Err(RoundError::InvalidState);
        }

        while let GameState::AwaitingPlay(player_id) = self.state {
            let controller = &mut controllers[usize::from(player_id)];
            let play = match self.view(player_id) {
                Some(view) => controller.decide(&view),
                None => return Err(RoundError::InvalidState),
            };

            if let Err(err) = self.play(player_id, play) {
                log::warn!("player {player_id} made an invalid play: {err}");
                controller.rejected(err);
            }
        }

        self.last_result.clone().ok_or(RoundError::InvalidState)
    }

    fn ensure_controllers(&self, found: usize) -> Result<(), RoundError> {
        if found == self.players.len() {
            Ok(())
        } else {
            Err(RoundError::ControllerMismatch {
                expected: self.players.len(),
                found,
            })
        }
    }
}
