//! Round outcomes and settlement records.

use crate::chips::Chips;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Natural blackjack on the deal. Pays 3:2.
    Blackjack,
    /// Player beat the dealer's total.
    Win,
    /// Dealer went over 21.
    DealerBust,
    /// Equal totals; the bet is returned.
    Push,
    /// Dealer beat the player's total.
    Lose,
    /// Player went over 21.
    Bust,
}

impl Outcome {
    /// Payout per unit bet, in half units.
    const fn half_multiplier(self) -> i8 {
        match self {
            Self::Blackjack => 3,
            Self::Win | Self::DealerBust => 2,
            Self::Push => 0,
            Self::Lose | Self::Bust => -2,
        }
    }

    /// Returns the payout multiplier applied to the bet.
    ///
    /// Blackjack 1.5, a win or dealer bust 1, a push 0, a loss or bust -1.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        f64::from(self.half_multiplier()) / 2.0
    }

    /// Returns the signed balance change for `bet`: `bet * multiplier`.
    ///
    /// ```
    /// use bjcoach::{Chips, Outcome};
    ///
    /// assert_eq!(Outcome::Blackjack.payout(15), Chips::from_halves(45));
    /// assert_eq!(Outcome::Bust.payout(15), Chips::new(-15));
    /// ```
    #[must_use]
    pub fn payout(self, bet: usize) -> Chips {
        let bet = i64::try_from(bet).unwrap_or(i64::MAX);
        Chips::from_halves(bet.saturating_mul(i64::from(self.half_multiplier())))
    }

    /// Returns whether the player loses the bet.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        self.half_multiplier() < 0
    }

    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Blackjack => "Blackjack! You win!",
            Self::Win => "You win!",
            Self::DealerBust => "Dealer busts! You win!",
            Self::Push => "It's a tie.",
            Self::Lose => "You lose.",
            Self::Bust => "You bust! Dealer wins.",
        }
    }
}

/// Record of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome.
    pub outcome: Outcome,
    /// The bet that was settled, doubled if the player doubled down.
    pub bet: usize,
    /// Signed balance change.
    pub delta: Chips,
    /// Balance after settlement.
    pub balance: Chips,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}

impl Settlement {
    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.outcome.message()
    }
}
