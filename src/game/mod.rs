//! Game engine and state management.

use core::slice;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::advisory::{AdvisoryRequest, AdvisoryTicket};
use crate::chips::Chips;
use crate::deck::Deck;
use crate::error::ResetError;
use crate::hand::{self, DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::Settlement;
use crate::wallet::Wallet;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_AT;
pub use state::{GameState, Generation};

/// Cards, deck and result of one round.
///
/// A round is created by the deal and replaced wholesale by the next one.
/// Once settled it no longer changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    player: Hand,
    dealer: DealerHand,
    deck: Deck,
    settlement: Option<Settlement>,
}

impl Round {
    const fn new(deck: Deck) -> Self {
        Self {
            player: Hand::new(),
            dealer: DealerHand::new(),
            deck,
            settlement: None,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the settlement once the round is over.
    #[must_use]
    pub const fn settlement(&self) -> Option<&Settlement> {
        self.settlement.as_ref()
    }

    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.settlement.is_some()
    }

    /// Returns the result message, or an empty string while the round is live.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.settlement.as_ref().map_or("", Settlement::message)
    }
}

#[derive(Debug, Clone)]
enum Phase {
    Betting,
    Dealing,
    PlayerTurn(Round),
    Settled(Round),
}

/// A single-player blackjack table.
///
/// The game owns the wallet and the active round. Every method is one
/// complete transition: it either commits a new state or returns an error
/// and leaves the game as it was.
///
/// # Example
///
/// ```
/// use bjcoach::{Game, GameOptions, GameState};
///
/// let mut game = Game::new(GameOptions::default(), 42);
/// game.place_bet(50).unwrap();
/// game.deal().unwrap();
/// if game.state() == GameState::PlayerTurn {
///     game.stand().unwrap();
/// }
/// assert_eq!(game.state(), GameState::Settled);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    wallet: Wallet,
    phase: Phase,
    generation: Generation,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            wallet: Wallet::new(options.starting_balance, options.minimum_bet),
            phase: Phase::Betting,
            generation: Generation::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        match self.phase {
            Phase::Betting => GameState::Betting,
            Phase::Dealing => GameState::Dealing,
            Phase::PlayerTurn(_) => GameState::PlayerTurn,
            Phase::Settled(_) => GameState::Settled,
        }
    }

    /// Returns the wallet.
    #[must_use]
    pub const fn wallet(&self) -> Wallet {
        self.wallet
    }

    /// Returns the balance.
    #[must_use]
    pub const fn balance(&self) -> Chips {
        self.wallet.balance()
    }

    /// Returns the current bet.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.wallet.bet()
    }

    /// Returns the active or just-settled round.
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        match &self.phase {
            Phase::PlayerTurn(round) | Phase::Settled(round) => Some(round),
            Phase::Betting | Phase::Dealing => None,
        }
    }

    /// Returns the settlement of the last round, while it is still on the table.
    #[must_use]
    pub const fn settlement(&self) -> Option<&Settlement> {
        match &self.phase {
            Phase::Settled(round) => round.settlement(),
            _ => None,
        }
    }

    /// Returns the generation of the current hand snapshot.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Returns whether double down is currently legal and affordable.
    #[must_use]
    pub fn can_double_down(&self) -> bool {
        matches!(&self.phase, Phase::PlayerTurn(round) if round.player.len() == 2)
            && self.wallet.doubled().is_some()
    }

    /// Builds the advisory request for the current hand.
    ///
    /// Returns `None` unless the player is on turn with at least two cards.
    /// Only the dealer's up card is described.
    #[must_use]
    pub fn advisory_ticket(&self) -> Option<AdvisoryTicket> {
        let Phase::PlayerTurn(round) = &self.phase else {
            return None;
        };
        if round.player.len() < 2 {
            return None;
        }
        let up_card = round.dealer.up_card()?;

        Some(AdvisoryTicket {
            generation: self.generation,
            request: AdvisoryRequest {
                player_sum: round.player.value(),
                dealer_sum: hand::value(slice::from_ref(up_card)),
                has_ace: round.player.has_ace(),
                can_double_down: self.can_double_down(),
            },
        })
    }

    /// Clears the settled round and returns to betting.
    ///
    /// The bet is restored to the table minimum; the balance is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been settled.
    pub fn reset(&mut self) -> Result<(), ResetError> {
        if !matches!(self.phase, Phase::Settled(_)) {
            return Err(ResetError::InvalidState);
        }

        let wallet = self.wallet.with_table_bet(self.options.minimum_bet);
        self.commit(wallet, Phase::Betting);
        tracing::info!(balance = %wallet.balance(), "table reset for next round");

        Ok(())
    }

    fn commit(&mut self, wallet: Wallet, phase: Phase) {
        self.wallet = wallet;
        self.phase = phase;
        self.generation = self.generation.next();
    }

    /// Drops the active round after the deck ran out. The wallet is untouched.
    fn abort_round(&mut self) {
        tracing::error!(
            balance = %self.wallet.balance(),
            bet = self.wallet.bet(),
            "deck exhausted, round aborted"
        );
        self.commit(self.wallet, Phase::Betting);
    }
}
