//! Balance and bet bookkeeping.
//!
//! [`Wallet::settle`] is the only place the balance changes.

use crate::chips::Chips;
use crate::error::BetError;
use crate::result::Outcome;

/// The player's money: a balance that persists across rounds and the bet for
/// the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wallet {
    balance: Chips,
    bet: usize,
}

impl Wallet {
    /// Creates a wallet holding `balance` whole units.
    #[must_use]
    pub fn new(balance: usize, bet: usize) -> Self {
        Self {
            balance: Chips::from_units(balance),
            bet,
        }
    }

    /// Returns the balance.
    #[must_use]
    pub const fn balance(&self) -> Chips {
        self.balance
    }

    /// Returns the current bet.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether the balance is at least `amount`.
    #[must_use]
    pub fn covers(&self, amount: usize) -> bool {
        Chips::from_units(amount) <= self.balance
    }

    /// Returns a wallet holding `amount` as the bet.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InvalidBet`] if `amount` is below `minimum` or
    /// above the balance.
    pub fn with_bet(self, amount: usize, minimum: usize) -> Result<Self, BetError> {
        if amount < minimum || !self.covers(amount) {
            return Err(BetError::InvalidBet {
                amount,
                minimum,
                balance: self.balance,
            });
        }

        Ok(Self {
            balance: self.balance,
            bet: amount,
        })
    }

    /// Returns a wallet with the bet set to `bet` without validation, for the
    /// start of the next round.
    #[must_use]
    pub const fn with_table_bet(self, bet: usize) -> Self {
        Self {
            balance: self.balance,
            bet,
        }
    }

    /// Returns a wallet with the bet doubled, if the balance covers losing it.
    #[must_use]
    pub fn doubled(self) -> Option<Self> {
        let bet = self.bet.checked_mul(2)?;
        self.covers(bet).then_some(Self {
            balance: self.balance,
            bet,
        })
    }

    /// Applies the outcome of a round: `balance + bet * multiplier`.
    ///
    /// ```
    /// use bjcoach::{Chips, Outcome, Wallet};
    ///
    /// let wallet = Wallet::new(1000, 50);
    /// assert_eq!(wallet.settle(Outcome::DealerBust).balance(), Chips::new(1050));
    /// assert_eq!(wallet.settle(Outcome::Blackjack).balance(), Chips::new(1075));
    /// assert_eq!(wallet.settle(Outcome::Push).balance(), Chips::new(1000));
    /// assert_eq!(wallet.settle(Outcome::Bust).balance(), Chips::new(950));
    ///
    /// let odd = Wallet::new(1000, 15).settle(Outcome::Blackjack);
    /// assert_eq!(odd.balance().to_string(), "1022.5");
    /// ```
    #[must_use]
    pub fn settle(self, outcome: Outcome) -> Self {
        Self {
            balance: self.balance.saturating_add(outcome.payout(self.bet)),
            bet: self.bet,
        }
    }
}
