//! The standard 52-card deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::hand::Hand;

/// A deck of cards, consumed once per round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an ordered deck with one card per (rank, suit) pair.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Shuffles the deck into a uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals the whole deck round-robin into `hands`, starting at `offset`
    /// (wrapping), then sorts every hand by rank.
    ///
    /// Hand sizes differ by at most one card. Does nothing if `hands` is
    /// empty.
    pub fn deal(self, hands: &mut [Hand], offset: usize) {
        if hands.is_empty() {
            return;
        }

        let count = hands.len();
        let start = offset % count;
        for (index, card) in self.cards.into_iter().enumerate() {
            hands[(start + index) % count].add_card(card);
        }

        for hand in hands {
            hand.sort();
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_wraps_large_offsets() {
        let mut wrapped = alloc::vec![Hand::new(); 3];
        Deck::new().deal(&mut wrapped, usize::MAX);

        let mut reduced = alloc::vec![Hand::new(); 3];
        Deck::new().deal(&mut reduced, usize::MAX % 3);

        assert_eq!(wrapped, reduced);
        assert_eq!(wrapped.iter().map(Hand::len).sum::<usize>(), DECK_SIZE);
    }

    #[test]
    fn deal_starts_at_offset() {
        let mut hands = alloc::vec![Hand::new(); 4];
        Deck::new().deal(&mut hands, 5);

        assert!(hands[1].contains_all(&[Card::new(Suit::Clubs, Rank::Three)]));
        assert!(hands.iter().all(|hand| hand.len() == 13));
    }
}
