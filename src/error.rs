//! Error types for game operations.

use thiserror::Error;

use crate::player::PlayerId;

/// Errors that can occur while constructing or parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is outside the fixed rank enumeration.
    #[error("invalid card rank")]
    InvalidRank,
    /// Suit is outside the fixed suit enumeration.
    #[error("invalid card suit")]
    InvalidSuit,
    /// Input text is not a rank followed by a suit.
    #[error("malformed card text")]
    Malformed,
}

/// Errors that can occur when joining the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Players cannot join while a round is being played.
    #[error("a round is in progress")]
    RoundInProgress,
    /// No role list exists for one more player.
    #[error("the table is full")]
    TableFull,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already being played.
    #[error("a round is in progress")]
    RoundInProgress,
    /// No role list is configured for this many players.
    #[error("unsupported player count: {0}")]
    UnsupportedPlayerCount(usize),
    /// Predetermined hands do not match the number of players.
    #[error("expected {expected} hands, got {found}")]
    HandCountMismatch {
        /// Number of seated players.
        expected: usize,
        /// Number of hands supplied.
        found: usize,
    },
}

/// Errors that can occur when a play is submitted.
///
/// Errors from [`PlayError::is_illegal_play`] and
/// [`PlayError::is_malformed_input`] are recoverable: the game state is left
/// untouched and the same player is still to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// No round is awaiting a play.
    #[error("invalid game state for this play")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// A card play with no cards.
    #[error("a play must contain at least one card")]
    EmptyPlay,
    /// Cards of more than one rank.
    #[error("all cards in a play must share one rank")]
    MixedRanks,
    /// The play does not match the size of the pile.
    #[error("expected {expected} card(s), got {found}")]
    SizeMismatch {
        /// Size of the pile.
        expected: usize,
        /// Size of the play.
        found: usize,
    },
    /// The play does not outrank the pile.
    #[error("play must outrank the pile")]
    NotHigher,
    /// Too many cards to lead on an empty pile.
    #[error("cannot lead more than {max} card(s), got {found}")]
    TooManyCards {
        /// Largest allowed lead.
        max: usize,
        /// Size of the play.
        found: usize,
    },
    /// The play names cards the player does not hold.
    #[error("cards are not in the player's hand")]
    CardsNotInHand,
}

impl PlayError {
    /// Returns whether the play broke a legality rule.
    #[must_use]
    pub const fn is_illegal_play(&self) -> bool {
        matches!(
            self,
            Self::EmptyPlay
                | Self::MixedRanks
                | Self::SizeMismatch { .. }
                | Self::NotHigher
                | Self::TooManyCards { .. }
        )
    }

    /// Returns whether the play referenced cards outside the player's hand.
    #[must_use]
    pub const fn is_malformed_input(&self) -> bool {
        matches!(self, Self::CardsNotInHand)
    }
}

/// Errors that can occur when assigning roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoleError {
    /// The number of players differs from the number of roles.
    #[error("{players} player(s) for {roles} role(s)")]
    CountMismatch {
        /// Number of roles available.
        roles: usize,
        /// Number of players to rank.
        players: usize,
    },
    /// A player appears more than once in the finishing order.
    #[error("player {0} appears more than once")]
    DuplicatePlayer(PlayerId),
}

/// Errors that can occur while driving a round with controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The number of controllers differs from the number of players.
    #[error("expected {expected} controllers, got {found}")]
    ControllerMismatch {
        /// Number of seated players.
        expected: usize,
        /// Number of controllers supplied.
        found: usize,
    },
    /// The round could not be started.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// No round is being played.
    #[error("no round is in progress")]
    InvalidState,
}
