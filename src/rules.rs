//! Play legality rules.

use crate::card::Card;
use crate::error::PlayError;

/// Kind of a legal card play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayKind {
    /// A play judged against the pile.
    Ordinary,
    /// A play of only the bomb rank. Always legal and clears the pile.
    Bomb,
}

/// Checks a card play against the pile.
///
/// Hand membership is not checked here.
///
/// # Errors
///
/// Returns the rule the play breaks:
/// - [`PlayError::EmptyPlay`] if `cards` is empty
/// - [`PlayError::MixedRanks`] if the cards do not share one rank
/// - [`PlayError::SizeMismatch`] if a pile is present and the sizes differ
/// - [`PlayError::NotHigher`] if a pile is present and is not outranked
/// - [`PlayError::TooManyCards`] if leading more than `max_lead_size` cards
pub fn check_play(
    last_play: Option<&[Card]>,
    cards: &[Card],
    max_lead_size: usize,
) -> Result<PlayKind, PlayError> {
    let Some(first) = cards.first() else {
        return Err(PlayError::EmptyPlay);
    };

    if cards.iter().any(|card| card.rank != first.rank) {
        return Err(PlayError::MixedRanks);
    }

    if first.rank.is_bomb() {
        return Ok(PlayKind::Bomb);
    }

    match last_play {
        Some(pile) => {
            if cards.len() != pile.len() {
                return Err(PlayError::SizeMismatch {
                    expected: pile.len(),
                    found: cards.len(),
                });
            }
            if !pile.iter().all(|card| first.beats(card)) {
                return Err(PlayError::NotHigher);
            }
        }
        None => {
            if cards.len() > max_lead_size {
                return Err(PlayError::TooManyCards {
                    max: max_lead_size,
                    found: cards.len(),
                });
            }
        }
    }

    Ok(PlayKind::Ordinary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    const fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn pile_requires_same_size_and_higher_rank() {
        let pile = [card(Suit::Hearts, Rank::Ten)];

        assert_eq!(
            check_play(
                Some(&pile),
                &[card(Suit::Hearts, Rank::Jack), card(Suit::Spades, Rank::Jack)],
                4
            ),
            Err(PlayError::SizeMismatch {
                expected: 1,
                found: 2
            })
        );
        assert_eq!(
            check_play(Some(&pile), &[card(Suit::Hearts, Rank::Jack)], 4),
            Ok(PlayKind::Ordinary)
        );
        assert_eq!(
            check_play(Some(&pile), &[card(Suit::Spades, Rank::Ten)], 4),
            Err(PlayError::NotHigher)
        );
        assert_eq!(
            check_play(Some(&pile), &[card(Suit::Spades, Rank::Nine)], 4),
            Err(PlayError::NotHigher)
        );
    }

    #[test]
    fn bomb_is_legal_on_any_pile() {
        let pile = [card(Suit::Clubs, Rank::Queen), card(Suit::Diamonds, Rank::Queen)];
        let bomb = [card(Suit::Hearts, Rank::Two), card(Suit::Spades, Rank::Two)];

        assert_eq!(check_play(Some(&pile), &bomb, 4), Ok(PlayKind::Bomb));
        assert_eq!(check_play(Some(&pile), &bomb[..1], 4), Ok(PlayKind::Bomb));
        assert_eq!(check_play(None, &bomb, 4), Ok(PlayKind::Bomb));
    }

    #[test]
    fn lead_size_and_shape() {
        assert_eq!(check_play(None, &[], 4), Err(PlayError::EmptyPlay));
        assert_eq!(
            check_play(
                None,
                &[card(Suit::Hearts, Rank::Five), card(Suit::Hearts, Rank::Six)],
                4
            ),
            Err(PlayError::MixedRanks)
        );
        assert_eq!(
            check_play(
                None,
                &[card(Suit::Hearts, Rank::Five), card(Suit::Clubs, Rank::Five)],
                1
            ),
            Err(PlayError::TooManyCards { max: 1, found: 2 })
        );
        assert_eq!(
            check_play(None, &[card(Suit::Hearts, Rank::Three)], 4),
            Ok(PlayKind::Ordinary)
        );
    }
}
