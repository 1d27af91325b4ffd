use crate::error::{ActionError, DeckError};
use crate::hand::{BLACKJACK, DealerHand, Hand};
use crate::result::{Outcome, Settlement};
use crate::wallet::Wallet;

use super::{Game, Phase, Round};

/// The dealer draws below this total and stands on it or above, soft or hard.
pub const DEALER_STANDS_AT: u8 = 17;

/// Dealer plays their hand: reveal the hole card, then draw until reaching
/// 17 or higher.
fn dealer_play(round: &mut Round) -> Result<(), DeckError> {
    round.dealer.reveal_hole();

    while round.dealer.value() < DEALER_STANDS_AT {
        let card = round.deck.draw()?;
        round.dealer.add_card(card);
        tracing::debug!(card = %card, dealer_value = round.dealer.value(), "dealer drew");
    }

    Ok(())
}

/// Compares final hands. A busted player loses even if the dealer busts too.
fn showdown(player: &Hand, dealer: &DealerHand) -> Outcome {
    let player_value = player.value();
    let dealer_value = dealer.value();

    if player_value > BLACKJACK {
        Outcome::Bust
    } else if dealer_value > BLACKJACK {
        Outcome::DealerBust
    } else if player_value > dealer_value {
        Outcome::Win
    } else if player_value < dealer_value {
        Outcome::Lose
    } else {
        Outcome::Push
    }
}

impl Game {
    /// Plays out the dealer and settles the round against `wallet`.
    pub(super) fn resolve(
        &mut self,
        mut round: Round,
        wallet: Wallet,
    ) -> Result<Settlement, ActionError> {
        if let Err(err) = dealer_play(&mut round) {
            self.abort_round();
            return Err(err.into());
        }

        let outcome = showdown(&round.player, &round.dealer);
        Ok(self.finish(round, wallet, outcome))
    }

    /// Settles the wallet and closes the round.
    pub(super) fn finish(
        &mut self,
        mut round: Round,
        wallet: Wallet,
        outcome: Outcome,
    ) -> Settlement {
        round.dealer.reveal_hole();

        let settled = wallet.settle(outcome);
        let settlement = Settlement {
            outcome,
            bet: wallet.bet(),
            delta: outcome.payout(wallet.bet()),
            balance: settled.balance(),
            player_value: round.player.value(),
            dealer_value: round.dealer.value(),
        };
        round.settlement = Some(settlement);

        tracing::info!(
            outcome = ?outcome,
            bet = settlement.bet,
            delta = %settlement.delta,
            balance = %settlement.balance,
            player_value = settlement.player_value,
            dealer_value = settlement.dealer_value,
            "round settled"
        );

        self.commit(settled, Phase::Settled(round));
        settlement
    }
}
