//! Table configuration.

/// Table stakes for a game.
///
/// Dealer policy and the blackjack payout are fixed and not configurable
/// here.
///
/// ```
/// use bjcoach::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_balance(500)
///     .with_minimum_bet(25);
/// assert_eq!(options.starting_balance, 500);
/// assert_eq!(options.minimum_bet, 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Balance the wallet starts with.
    pub starting_balance: usize,
    /// Smallest accepted bet; also the bet restored on reset.
    pub minimum_bet: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: 1000,
            minimum_bet: 10,
        }
    }
}

impl GameOptions {
    /// Sets the starting balance.
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the minimum bet.
    #[must_use]
    pub const fn with_minimum_bet(mut self, minimum: usize) -> Self {
        self.minimum_bet = minimum;
        self
    }
}
