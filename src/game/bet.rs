use crate::deck::Deck;
use crate::error::{BetError, DealError, DeckError};
use crate::result::Outcome;

use super::{Game, Phase, Round};

impl Game {
    /// Places a bet for the next round.
    ///
    /// A bet may be replaced until the cards are dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not accepting bets, or if `amount` is
    /// below the table minimum or above the balance. Nothing changes on error.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if !matches!(self.phase, Phase::Betting | Phase::Dealing) {
            return Err(BetError::InvalidState);
        }

        let wallet = match self.wallet.with_bet(amount, self.options.minimum_bet) {
            Ok(wallet) => wallet,
            Err(err) => {
                tracing::warn!(amount, balance = %self.wallet.balance(), "bet rejected");
                return Err(err);
            }
        };

        self.commit(wallet, Phase::Dealing);
        tracing::info!(bet = amount, balance = %wallet.balance(), "bet placed");

        Ok(())
    }

    /// Deals a new round from a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if !matches!(self.phase, Phase::Dealing) {
            return Err(DealError::InvalidState);
        }

        let deck = Deck::shuffled(&mut self.rng);
        self.deal_with(deck)
    }

    /// Deals a new round from the given deck.
    ///
    /// Cards go to the player, the dealer, the player and the dealer, in that
    /// order; the dealer's second card is dealt face down. A player blackjack
    /// settles the round immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed, or if the deck runs out, in
    /// which case the round is abandoned and the game returns to betting with
    /// the wallet untouched.
    pub fn deal_with(&mut self, deck: Deck) -> Result<(), DealError> {
        if !matches!(self.phase, Phase::Dealing) {
            return Err(DealError::InvalidState);
        }

        let mut round = Round::new(deck);
        if let Err(err) = deal_opening_cards(&mut round) {
            self.abort_round();
            return Err(err.into());
        }

        tracing::info!(
            bet = self.wallet.bet(),
            player_value = round.player.value(),
            dealer_up = round.dealer.visible_value(),
            "round dealt"
        );

        if round.player.is_blackjack() {
            self.finish(round, self.wallet, Outcome::Blackjack);
        } else {
            self.commit(self.wallet, Phase::PlayerTurn(round));
        }

        Ok(())
    }
}

fn deal_opening_cards(round: &mut Round) -> Result<(), DeckError> {
    round.player.add_card(round.deck.draw()?);
    round.dealer.add_card(round.deck.draw()?);
    round.player.add_card(round.deck.draw()?);
    round.dealer.add_card(round.deck.draw()?);
    Ok(())
}
