//! Game state types.

/// Round phase, as seen from outside the game.
///
/// Dealing and the dealer's turn happen inside single transitions and are
/// never observable on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for a bet.
    Betting,
    /// A bet is recorded; the next step is the deal.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Round has ended and the wallet has been settled.
    Settled,
}

/// Counter identifying one snapshot of the player's hand.
///
/// Bumped by every transition that changes the round, so advice computed for
/// an older hand can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    /// Returns the raw counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
