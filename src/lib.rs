//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the round flow (betting,
//! dealing, player actions, dealer play and settlement) as a finite state
//! machine, and an advisory boundary that asks a strategy [`Advisor`] for
//! suggestions without ever letting the answer affect the game.
//!
//! # Example
//!
//! ```
//! use bjcoach::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.place_bet(10).unwrap();
//! game.deal().unwrap();
//! while game.state() == GameState::PlayerTurn && game.round().unwrap().player().value() < 17 {
//!     game.hit().unwrap();
//! }
//! if game.state() == GameState::PlayerTurn {
//!     game.stand().unwrap();
//! }
//! println!("{}", game.settlement().unwrap().message());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod advisory;
pub mod card;
pub mod chips;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
#[cfg(feature = "std")]
pub mod session;
pub mod wallet;

// Re-export main types
pub use advisory::strategy::{BasicStrategyAdvisor, DealerOdds};
pub use advisory::{Advice, Advisor, Advisory, AdvisoryRequest, AdvisoryTicket, Recommendation};
#[cfg(feature = "std")]
pub use advisory::{
    desk::AdvisoryDesk,
    json::{JsonAdvisor, Transport},
};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use chips::Chips;
pub use deck::Deck;
pub use error::{ActionError, AdvisoryError, BetError, DealError, DeckError, ResetError};
pub use game::{DEALER_STANDS_AT, Game, GameState, Generation, Round};
pub use hand::{DealerHand, Hand, HandValue};
pub use options::GameOptions;
pub use result::{Outcome, Settlement};
#[cfg(feature = "std")]
pub use session::Session;
pub use wallet::Wallet;
