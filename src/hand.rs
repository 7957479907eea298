//! Player hand representation.

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// A player's hand: an unordered multiset of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sorts the cards ascending by rank. Order has no gameplay effect.
    pub fn sort(&mut self) {
        self.cards.sort_by_key(|card| (card.rank, card.suit));
    }

    /// Returns how many cards of the given rank the hand holds.
    #[must_use]
    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|card| card.rank == rank).count()
    }

    /// Returns whether every card of `cards` is in the hand, counting
    /// repeated cards separately.
    #[must_use]
    pub fn contains_all(&self, cards: &[Card]) -> bool {
        self.positions_of(cards).is_some()
    }

    /// Removes exactly the given sub-multiset from the hand.
    ///
    /// Returns `false` and leaves the hand untouched if any card is missing.
    #[must_use]
    pub fn remove_cards(&mut self, cards: &[Card]) -> bool {
        let Some(mut positions) = self.positions_of(cards) else {
            return false;
        };
        positions.sort_unstable_by(|a, b| b.cmp(a));
        for index in positions {
            self.cards.remove(index);
        }
        true
    }

    /// Groups the cards by rank, lowest rank first.
    #[must_use]
    pub fn groups(&self) -> Vec<Vec<Card>> {
        let mut sorted = self.cards.clone();
        sorted.sort_by_key(|card| (card.rank, card.suit));
        sorted
            .chunk_by(|a, b| a.rank == b.rank)
            .map(<[Card]>::to_vec)
            .collect()
    }

    fn positions_of(&self, cards: &[Card]) -> Option<Vec<usize>> {
        let mut taken: Vec<usize> = Vec::with_capacity(cards.len());
        for card in cards {
            let index = self
                .cards
                .iter()
                .enumerate()
                .position(|(index, held)| held == card && !taken.contains(&index))?;
            taken.push(index);
        }
        Some(taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    const fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn remove_cards_is_all_or_nothing() {
        let mut hand = Hand::from_cards(alloc::vec![
            card(Suit::Hearts, Rank::Five),
            card(Suit::Spades, Rank::Five),
            card(Suit::Clubs, Rank::King),
        ]);

        assert!(!hand.remove_cards(&[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Diamonds, Rank::Five),
        ]));
        assert_eq!(hand.len(), 3);

        assert!(hand.remove_cards(&[
            card(Suit::Spades, Rank::Five),
            card(Suit::Hearts, Rank::Five),
        ]));
        assert_eq!(hand.cards(), &[card(Suit::Clubs, Rank::King)]);
    }

    #[test]
    fn repeated_card_needs_repeated_copies() {
        let hand = Hand::from_cards(alloc::vec![card(Suit::Hearts, Rank::Five)]);
        assert!(hand.contains_all(&[card(Suit::Hearts, Rank::Five)]));
        assert!(!hand.contains_all(&[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Hearts, Rank::Five),
        ]));
    }

    #[test]
    fn groups_are_ascending_by_rank() {
        let hand = Hand::from_cards(alloc::vec![
            card(Suit::Hearts, Rank::Two),
            card(Suit::Spades, Rank::Four),
            card(Suit::Clubs, Rank::Four),
            card(Suit::Diamonds, Rank::Jack),
        ]);

        let groups = hand.groups();
        assert_eq!(groups.len(), 3);
        assert_eq!(
            groups[0],
            alloc::vec![card(Suit::Clubs, Rank::Four), card(Suit::Spades, Rank::Four)]
        );
        assert_eq!(groups[2], alloc::vec![card(Suit::Hearts, Rank::Two)]);
        assert_eq!(hand.count_rank(Rank::Four), 2);
    }
}
