//! Card types, rank ordering, and card parsing.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit. Suits carry no weight in President.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the display symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(CardError::InvalidSuit)
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" | "C" | "♣" => Ok(Self::Clubs),
            "d" | "D" | "♦" => Ok(Self::Diamonds),
            "h" | "H" | "♥" => Ok(Self::Hearts),
            "s" | "S" | "♠" => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, declared from lowest to highest.
///
/// `Two` is the highest rank and the bomb rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 3, the lowest rank.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
    /// 2, the bomb.
    Two,
}

impl Rank {
    /// All ranks from lowest to highest.
    pub const ALL: [Self; 13] = [
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
        Self::Two,
    ];

    /// Builds a rank from its face value (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the value is outside `1..=13`.
    pub const fn from_face(value: u8) -> Result<Self, CardError> {
        match value {
            1 => Ok(Self::Ace),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            8 => Ok(Self::Eight),
            9 => Ok(Self::Nine),
            10 => Ok(Self::Ten),
            11 => Ok(Self::Jack),
            12 => Ok(Self::Queen),
            13 => Ok(Self::King),
            _ => Err(CardError::InvalidRank),
        }
    }

    /// Returns whether this is the bomb rank.
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Two)
    }

    /// Returns the short display label of the rank.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
            Self::Two => "2",
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "t" | "T" => return Ok(Self::Ten),
            "j" => return Ok(Self::Jack),
            "q" => return Ok(Self::Queen),
            "k" => return Ok(Self::King),
            "a" => return Ok(Self::Ace),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|rank| rank.label() == s)
            .ok_or(CardError::InvalidRank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
///
/// Equality is by (rank, suit), which identifies one of the 52 cards. For
/// play legality only the rank matters; see [`Card::beats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates a card from raw values, validating both against the fixed
    /// enumerations.
    ///
    /// `suit` is an index into [`Suit::ALL`]; `rank` is a face value
    /// (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] or [`CardError::InvalidRank`] when
    /// either value is out of range.
    pub fn try_new(suit: u8, rank: u8) -> Result<Self, CardError> {
        Ok(Self::new(Suit::try_from(suit)?, Rank::from_face(rank)?))
    }

    /// Returns whether this card has a strictly greater rank than `other`.
    #[must_use]
    pub fn beats(&self, other: &Self) -> bool {
        self.rank > other.rank
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses cards such as `10h`, `QS`, `2♠` or `tc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(index, _)| index)
            .filter(|&index| index > 0)
            .ok_or(CardError::Malformed)?;
        let (rank, suit) = s.split_at(split);
        Ok(Self::new(suit.parse()?, rank.parse()?))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_order_two_highest() {
        assert!(Rank::Two > Rank::Ace);
        assert!(Rank::Three < Rank::Four);
        assert!(Card::new(Suit::Clubs, Rank::Two).beats(&Card::new(Suit::Spades, Rank::Ace)));
        assert!(!Card::new(Suit::Clubs, Rank::Ten).beats(&Card::new(Suit::Spades, Rank::Ten)));
    }

    #[test]
    fn try_new_validates_enumerations() {
        assert_eq!(
            Card::try_new(2, 11),
            Ok(Card::new(Suit::Hearts, Rank::Jack))
        );
        assert_eq!(Card::try_new(2, 1), Ok(Card::new(Suit::Hearts, Rank::Ace)));
        assert_eq!(Card::try_new(4, 5), Err(CardError::InvalidSuit));
        assert_eq!(Card::try_new(0, 0), Err(CardError::InvalidRank));
        assert_eq!(Card::try_new(0, 14), Err(CardError::InvalidRank));
    }

    #[test]
    fn parses_text_and_symbols() {
        assert_eq!("10h".parse(), Ok(Card::new(Suit::Hearts, Rank::Ten)));
        assert_eq!("QS".parse(), Ok(Card::new(Suit::Spades, Rank::Queen)));
        assert_eq!("2♠".parse(), Ok(Card::new(Suit::Spades, Rank::Two)));
        assert_eq!("tc".parse(), Ok(Card::new(Suit::Clubs, Rank::Ten)));
        assert_eq!("1h".parse::<Card>(), Err(CardError::InvalidRank));
        assert_eq!("Qx".parse::<Card>(), Err(CardError::InvalidSuit));
        assert_eq!("h".parse::<Card>(), Err(CardError::Malformed));
        assert_eq!("".parse::<Card>(), Err(CardError::Malformed));
    }
}
