//! Strategy advisories.
//!
//! An advisor looks at the player's total, the dealer's up card and a couple
//! of flags and suggests a move. Advice is never authoritative: the game
//! does not read it, and a failed or late advisory is simply absent.

use alloc::string::String;
use core::fmt;
use core::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::AdvisoryError;
use crate::game::Generation;

#[cfg(feature = "std")]
pub mod desk;
#[cfg(feature = "std")]
pub mod json;
pub mod strategy;

/// What the advisor is told about the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryRequest {
    /// Value of the player's hand.
    pub player_sum: u8,
    /// Value of the dealer's up card alone.
    pub dealer_sum: u8,
    /// Whether the player holds an Ace, however it is counted.
    pub has_ace: bool,
    /// Whether double down is currently legal.
    pub can_double_down: bool,
}

/// An advisory request tagged with the hand snapshot it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisoryTicket {
    /// Generation of the hand when the request was built.
    pub generation: Generation,
    /// The request body.
    pub request: AdvisoryRequest,
}

/// A suggested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    /// Take another card.
    #[serde(alias = "hit")]
    Hit,
    /// Keep the current hand.
    #[serde(alias = "stand")]
    Stand,
    /// Double the bet and take exactly one more card.
    #[serde(rename = "Double Down", alias = "double down", alias = "DoubleDown")]
    DoubleDown,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::DoubleDown => "Double Down",
        })
    }
}

/// One strategy's suggestion and its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    /// The suggested move.
    pub recommendation: Recommendation,
    /// Free-text explanation.
    pub reasoning: String,
}

/// Suggestions from both strategies for one hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    /// Suggestion from comparing expected values.
    pub mixed: Advice,
    /// Suggestion from the basic strategy table.
    pub normal: Advice,
}

/// Something that answers advisory requests.
///
/// Implementations may be slow or fail; callers treat any error as "no
/// advice available".
pub trait Advisor {
    /// Produces an advisory for `request`.
    fn advise(
        &self,
        request: AdvisoryRequest,
    ) -> impl Future<Output = Result<Advisory, AdvisoryError>> + Send;
}
