//! Deck construction and drawing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered sequence of cards owned by a single round.
///
/// Cards are drawn from the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    dealt: usize,
}

impl Deck {
    /// Creates an unshuffled 52-card deck, one card per rank and suit.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards, dealt: 0 }
    }

    /// Creates a 52-card deck in uniformly random order.
    ///
    /// `SliceRandom::shuffle` is a Fisher–Yates shuffle, so every ordering is
    /// equally likely under a uniform random source.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck that yields `draws` in the given order.
    ///
    /// Useful for replaying a recorded round or setting up a known situation.
    ///
    /// ```
    /// use bjcoach::{Card, Deck, Rank, Suit};
    ///
    /// let first = Card::new(Rank::Ace, Suit::Spades);
    /// let second = Card::new(Rank::King, Suit::Hearts);
    /// let mut deck = Deck::stacked(&[first, second]);
    /// assert_eq!(deck.draw(), Ok(first));
    /// assert_eq!(deck.draw(), Ok(second));
    /// assert!(deck.draw().is_err());
    /// ```
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards, dealt: 0 }
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop().ok_or(DeckError::Exhausted)?;
        self.dealt += 1;
        tracing::debug!(card = %card, remaining = self.cards.len(), "drew card");
        Ok(card)
    }

    /// Returns the cards not yet drawn; the last element is drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards drawn so far.
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.dealt
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
