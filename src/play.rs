//! Plays offered by players.

use alloc::vec::Vec;

use crate::card::Card;

/// A play offered by the acting player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Play {
    /// Pass the turn.
    Skip,
    /// Cards to put on the pile.
    Cards(Vec<Card>),
}

impl Play {
    /// Creates a card play.
    #[must_use]
    pub fn cards(cards: impl Into<Vec<Card>>) -> Self {
        Self::Cards(cards.into())
    }
}

impl From<Vec<Card>> for Play {
    fn from(cards: Vec<Card>) -> Self {
        Self::Cards(cards)
    }
}
