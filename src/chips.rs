//! Money amounts.

use core::fmt;

/// An amount of money, exact to half a unit.
///
/// Bets are whole units, but a blackjack pays 3:2, so a balance can end in
/// a half. Stored as a signed count of half units.
///
/// ```
/// use bjcoach::Chips;
///
/// let balance = Chips::new(1000).saturating_add(Chips::from_halves(45));
/// assert_eq!(balance.to_string(), "1022.5");
/// assert_eq!(balance.whole(), 1022);
/// assert!(!balance.is_whole());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Chips(i64);

impl Chips {
    /// No money.
    pub const ZERO: Self = Self(0);
    /// The largest representable amount.
    pub const MAX: Self = Self(i64::MAX);

    /// Creates an amount of whole units.
    #[must_use]
    pub const fn new(units: i64) -> Self {
        Self(units.saturating_mul(2))
    }

    /// Creates an amount of whole units from an unsigned count, saturating at
    /// [`Chips::MAX`].
    #[must_use]
    pub fn from_units(units: usize) -> Self {
        i64::try_from(units).map_or(Self::MAX, Self::new)
    }

    /// Creates an amount from a count of half units.
    #[must_use]
    pub const fn from_halves(halves: i64) -> Self {
        Self(halves)
    }

    /// Returns the amount as a count of half units.
    #[must_use]
    pub const fn halves(self) -> i64 {
        self.0
    }

    /// Returns the whole units, rounding toward negative infinity.
    #[must_use]
    pub const fn whole(self) -> i64 {
        self.0.div_euclid(2)
    }

    /// Returns whether the amount has no half unit.
    #[must_use]
    pub const fn is_whole(self) -> bool {
        self.0 % 2 == 0
    }

    /// Returns whether the amount is below zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns the amount as a float, e.g. `1022.5`.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "balances stay far below 2^52")]
    pub const fn to_f64(self) -> f64 {
        self.0 as f64 / 2.0
    }

    /// Adds two amounts, saturating at the numeric bounds.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl From<u32> for Chips {
    fn from(units: u32) -> Self {
        Self::new(i64::from(units))
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let halves = self.0.unsigned_abs();
        if self.0 < 0 {
            f.write_str("-")?;
        } else if f.sign_plus() {
            f.write_str("+")?;
        }
        write!(f, "{}", halves / 2)?;
        if halves % 2 == 1 {
            f.write_str(".5")?;
        }
        Ok(())
    }
}
