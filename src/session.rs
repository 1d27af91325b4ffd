//! A game with an advisory desk attached.

use crate::advisory::desk::AdvisoryDesk;
use crate::advisory::{Advisor, Advisory};
use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, BetError, DealError, ResetError};
use crate::game::Game;
use crate::result::Settlement;

/// Drives a [`Game`] and asks for advice after every change to the player's
/// hand.
///
/// Advice arrives in the background. Game actions never wait for it, and
/// advice for a hand that has since changed is never returned.
///
/// # Example
///
/// ```
/// use bjcoach::{BasicStrategyAdvisor, Game, GameOptions, Session};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let game = Game::new(GameOptions::default(), 7);
/// let mut session = Session::new(game, BasicStrategyAdvisor::new());
/// session.place_bet(20).unwrap();
/// session.deal().unwrap();
/// if let Some(advisory) = session.await_advisory().await {
///     println!("normal strategy says {}", advisory.normal.recommendation);
/// }
/// # }
/// ```
#[derive(Debug)]
pub struct Session<A> {
    game: Game,
    desk: AdvisoryDesk<A>,
}

impl<A> Session<A>
where
    A: Advisor + Send + Sync + 'static,
{
    /// Creates a session with a desk around `advisor`.
    #[must_use]
    pub fn new(game: Game, advisor: A) -> Self {
        Self::with_desk(game, AdvisoryDesk::new(advisor))
    }

    /// Creates a session with a configured desk.
    #[must_use]
    pub const fn with_desk(game: Game, desk: AdvisoryDesk<A>) -> Self {
        Self { game, desk }
    }

    /// Returns the game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the advisory desk.
    #[must_use]
    pub const fn desk(&self) -> &AdvisoryDesk<A> {
        &self.desk
    }

    /// Places a bet. See [`Game::place_bet`].
    ///
    /// # Errors
    ///
    /// Same as [`Game::place_bet`].
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        self.game.place_bet(amount)
    }

    /// Deals from a shuffled deck and asks for advice. See [`Game::deal`].
    ///
    /// # Errors
    ///
    /// Same as [`Game::deal`].
    pub fn deal(&mut self) -> Result<(), DealError> {
        self.game.deal()?;
        self.consult();
        Ok(())
    }

    /// Deals from `deck` and asks for advice. See [`Game::deal_with`].
    ///
    /// # Errors
    ///
    /// Same as [`Game::deal_with`].
    pub fn deal_with(&mut self, deck: Deck) -> Result<(), DealError> {
        self.game.deal_with(deck)?;
        self.consult();
        Ok(())
    }

    /// Hits and asks for advice on the new hand. See [`Game::hit`].
    ///
    /// # Errors
    ///
    /// Same as [`Game::hit`].
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let card = self.game.hit()?;
        self.consult();
        Ok(card)
    }

    /// Stands. See [`Game::stand`].
    ///
    /// # Errors
    ///
    /// Same as [`Game::stand`].
    pub fn stand(&mut self) -> Result<Settlement, ActionError> {
        let settlement = self.game.stand();
        self.desk.clear();
        settlement
    }

    /// Doubles down. See [`Game::double_down`].
    ///
    /// # Errors
    ///
    /// Same as [`Game::double_down`].
    pub fn double_down(&mut self) -> Result<Settlement, ActionError> {
        let settlement = self.game.double_down();
        self.desk.clear();
        settlement
    }

    /// Starts the next round. See [`Game::reset`].
    ///
    /// # Errors
    ///
    /// Same as [`Game::reset`].
    pub fn reset(&mut self) -> Result<(), ResetError> {
        self.game.reset()?;
        self.desk.clear();
        Ok(())
    }

    /// Returns the advisory for the current hand if it has already arrived.
    pub fn advisory(&mut self) -> Option<&Advisory> {
        self.desk.collect(self.game.generation())
    }

    /// Waits for the advisory for the current hand.
    ///
    /// Resolves to `None` if the advisor failed, timed out, or no request is
    /// outstanding for this hand.
    pub async fn await_advisory(&mut self) -> Option<&Advisory> {
        self.desk.settle(self.game.generation()).await
    }

    fn consult(&mut self) {
        if let Some(ticket) = self.game.advisory_ticket() {
            self.desk.submit(ticket);
        }
    }
}
