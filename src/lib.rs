//! A President card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages seating, dealing, turn
//! resolution (including skips, pile resets, and bombs), and role assignment
//! at round end.
//!
//! # Example
//!
//! ```no_run
//! use president::{Controller, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! for name in ["Ann", "Bo", "Cy", "Di"] {
//!     game.join(name).unwrap();
//! }
//!
//! let mut controllers: Vec<Controller> = (0..4).map(|_| Controller::computer()).collect();
//! let result = game.run_round(&mut controllers).unwrap();
//! assert_eq!(result.standings.len(), 4);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod play;
pub mod player;
pub mod result;
pub mod role;
pub mod rules;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, DealError, JoinError, PlayError, RoleError, RoundError};
pub use game::{Game, GameState, TableState, TurnEvent};
pub use hand::Hand;
pub use options::{DEFAULT_MAX_PLAYERS, GameOptions, MIN_PLAYERS, RoleTable};
pub use play::Play;
pub use player::{
    Computer, Controller, Decide, Player, PlayerId, RosterEntry, SeatStatus, StateView,
};
pub use result::{RoundResult, Standing};
pub use role::{Role, RoleAssigner, seating_order};
pub use rules::{PlayKind, check_play};
