use crate::card::Card;
use crate::error::ActionError;
use crate::result::{Outcome, Settlement};

use super::{Game, Phase, Round};

impl Game {
    /// Takes a working copy of the active round.
    fn live_round(&self) -> Result<Round, ActionError> {
        match &self.phase {
            Phase::PlayerTurn(round) => Ok(round.clone()),
            _ => Err(ActionError::InvalidState),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 settles the round as a bust and reveals the dealer's
    /// hole card.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not on turn, or if the deck is empty,
    /// which aborts the round.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let mut round = self.live_round()?;

        let card = match round.deck.draw() {
            Ok(card) => card,
            Err(err) => {
                self.abort_round();
                return Err(err.into());
            }
        };
        round.player.add_card(card);

        if round.player.is_bust() {
            self.finish(round, self.wallet, Outcome::Bust);
        } else {
            tracing::debug!(player_value = round.player.value(), "player hit");
            self.commit(self.wallet, Phase::PlayerTurn(round));
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer reveals the hole card and plays out, then the round is
    /// settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not on turn, or if the deck runs out
    /// while the dealer must draw, which aborts the round.
    pub fn stand(&mut self) -> Result<Settlement, ActionError> {
        let round = self.live_round()?;
        self.resolve(round, self.wallet)
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// Only allowed on the first two cards, and only if the balance covers
    /// losing the doubled bet. The stand that follows is unconditional.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not on turn, the hand already has
    /// more than two cards, the balance cannot cover the doubled bet, or the
    /// deck runs out, which aborts the round.
    pub fn double_down(&mut self) -> Result<Settlement, ActionError> {
        let mut round = self.live_round()?;

        if round.player.len() != 2 {
            return Err(ActionError::CannotDouble);
        }

        let wallet = self.wallet.doubled().ok_or(ActionError::InsufficientFunds)?;

        let card = match round.deck.draw() {
            Ok(card) => card,
            Err(err) => {
                self.abort_round();
                return Err(err.into());
            }
        };
        round.player.add_card(card);
        tracing::debug!(
            card = %card,
            bet = wallet.bet(),
            player_value = round.player.value(),
            "player doubled down"
        );

        self.resolve(round, wallet)
    }
}
