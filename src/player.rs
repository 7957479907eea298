//! Players and the decision capability the engine drives.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::PlayError;
use crate::hand::Hand;
use crate::play::Play;
use crate::role::Role;
use crate::rules::check_play;

/// Player identifier, assigned in join order starting at 0.
pub type PlayerId = u8;

/// A seated player. Persists across rounds.
#[derive(Debug, Clone)]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) hand: Hand,
    pub(crate) role: Option<Role>,
}

impl Player {
    pub(crate) const fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            hand: Hand::new(),
            role: None,
        }
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the role earned in the last completed round.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        self.role
    }
}

/// Whether a seat is still playing this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    /// Still holding cards.
    Active {
        /// Number of cards held.
        cards: usize,
    },
    /// Emptied their hand this round.
    Finished {
        /// Current finishing place, starting at 1. A later bomb finisher
        /// moves it down by one.
        place: usize,
    },
}

/// One seat in a [`StateView`] roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry<'a> {
    /// The player ID.
    pub player_id: PlayerId,
    /// The player's name.
    pub name: &'a str,
    /// Role earned in the last completed round.
    pub role: Option<Role>,
    /// Status in the current round.
    pub status: SeatStatus,
}

/// Read-only view of the table handed to the acting player.
#[derive(Debug, Clone)]
pub struct StateView<'a> {
    /// The acting player.
    pub player_id: PlayerId,
    /// The acting player's hand.
    pub hand: &'a Hand,
    /// The pile, if any.
    pub last_play: Option<&'a [Card]>,
    /// Largest number of cards that may be led on an empty pile.
    pub max_lead_size: usize,
    /// Every seat, in this round's seating order.
    pub roster: Vec<RosterEntry<'a>>,
}

/// The capability to choose a play.
///
/// The engine only depends on this trait.
pub trait Decide {
    /// Chooses a play for the acting player.
    fn decide(&mut self, view: &StateView<'_>) -> Play;

    /// Notifies that the last play was rejected. The same player will be
    /// asked again.
    fn rejected(&mut self, error: PlayError) {
        let _ = error;
    }
}

impl<D: Decide + ?Sized> Decide for &mut D {
    fn decide(&mut self, view: &StateView<'_>) -> Play {
        (**self).decide(view)
    }

    fn rejected(&mut self, error: PlayError) {
        (**self).rejected(error);
    }
}

impl<D: Decide + ?Sized> Decide for Box<D> {
    fn decide(&mut self, view: &StateView<'_>) -> Play {
        (**self).decide(view)
    }

    fn rejected(&mut self, error: PlayError) {
        (**self).rejected(error);
    }
}

/// The deterministic computer policy.
///
/// Plays the lowest-ranked legal group of the required size, or skips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Computer;

impl Computer {
    /// Chooses a play for the given view.
    #[must_use]
    pub fn choose(view: &StateView<'_>) -> Play {
        let required = view.last_play.map_or(1, <[Card]>::len);

        view.hand
            .groups()
            .into_iter()
            .filter(|group| group.len() >= required)
            .map(|mut group| {
                group.truncate(required);
                group
            })
            .find(|candidate| check_play(view.last_play, candidate, view.max_lead_size).is_ok())
            .map_or(Play::Skip, Play::Cards)
    }
}

impl Decide for Computer {
    fn decide(&mut self, view: &StateView<'_>) -> Play {
        Self::choose(view)
    }
}

/// A player controller: a human input source or the computer policy.
pub enum Controller {
    /// External input, such as a terminal prompt.
    Human(Box<dyn Decide>),
    /// The built-in computer policy.
    Computer(Computer),
}

impl Controller {
    /// Creates a human controller from an input source.
    #[must_use]
    pub fn human(input: impl Decide + 'static) -> Self {
        Self::Human(Box::new(input))
    }

    /// Creates a computer controller.
    #[must_use]
    pub const fn computer() -> Self {
        Self::Computer(Computer)
    }
}

impl core::fmt::Debug for Controller {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Human(_) => f.write_str("Human"),
            Self::Computer(_) => f.write_str("Computer"),
        }
    }
}

impl Decide for Controller {
    fn decide(&mut self, view: &StateView<'_>) -> Play {
        match self {
            Self::Human(input) => input.decide(view),
            Self::Computer(computer) => computer.decide(view),
        }
    }

    fn rejected(&mut self, error: PlayError) {
        match self {
            Self::Human(input) => input.rejected(error),
            Self::Computer(computer) => computer.rejected(error),
        }
    }
}
