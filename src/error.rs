//! Error types for game operations.

use alloc::string::String;

use crate::chips::Chips;

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("deck exhausted")]
    Exhausted,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet is below the table minimum or above the balance.
    #[error("invalid bet amount {amount}: minimum is {minimum}, balance is {balance}")]
    InvalidBet {
        /// The rejected amount.
        amount: usize,
        /// The table minimum.
        minimum: usize,
        /// The balance at the time of the bet.
        balance: Chips,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The deck ran out while dealing; the round was aborted.
    #[error("deck exhausted while dealing")]
    DeckExhausted,
}

impl From<DeckError> for DealError {
    fn from(_: DeckError) -> Self {
        Self::DeckExhausted
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// The deck ran out mid-action; the round was aborted.
    #[error("deck exhausted")]
    DeckExhausted,
}

impl From<DeckError> for ActionError {
    fn from(_: DeckError) -> Self {
        Self::DeckExhausted
    }
}

/// Errors that can occur when resetting for the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResetError {
    /// The round has not been settled yet.
    #[error("round has not been settled")]
    InvalidState,
}

/// Reasons an advisory could not be produced.
///
/// These never reach the game: the advisory desk logs them and treats the
/// advisory as absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisoryError {
    /// The advisor could not be reached or refused the request.
    #[error("advisor unavailable: {0}")]
    Unavailable(String),
    /// The advisor did not answer in time.
    #[error("advisor timed out")]
    TimedOut,
    /// The advisor answered with something that is not a valid advisory.
    #[error("malformed advisory: {0}")]
    Malformed(String),
}
