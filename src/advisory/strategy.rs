//! A local advisor that needs no network.
//!
//! Two strategies are computed for a dealer that stands on all 17s, drawing
//! from an infinite deck:
//!
//! - *normal*: a basic strategy table for hard and soft totals.
//! - *mixed*: whichever of stand, hit-once or double down has the highest
//!   expected value against the dealer's outcome distribution.
//!
//! The request only says whether the player holds an Ace, so a hand with an
//! Ace is treated as soft.

use alloc::format;
use alloc::string::String;
use core::cmp::Ordering;
use core::future::{self, Future};

use crate::error::AdvisoryError;
use crate::game::DEALER_STANDS_AT;
use crate::hand::BLACKJACK;

use super::{Advice, Advisor, Advisory, AdvisoryRequest, Recommendation};

/// Point values of one draw from an infinite deck, each equally likely.
const DRAWS: [u8; 13] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 11];

/// Dealer finals 17..=21 followed by bust.
type Distribution = [f64; 6];

const BUST: usize = 5;

#[derive(Debug, Clone, Copy)]
struct Total {
    points: u8,
    high_aces: u8,
}

impl Total {
    fn new(points: u8, soft: bool) -> Self {
        Self {
            points,
            high_aces: u8::from(soft),
        }
    }

    fn plus(self, card: u8) -> Self {
        let mut points = self.points.saturating_add(card);
        let mut high_aces = self.high_aces + u8::from(card == 11);
        while points > BLACKJACK && high_aces > 0 {
            points -= 10;
            high_aces -= 1;
        }
        Self { points, high_aces }
    }
}

type Memo = [[Option<Distribution>; 2]; BLACKJACK as usize + 1];

fn dealer_finals(total: Total, memo: &mut Memo) -> Distribution {
    let mut dist = [0.0; 6];
    if total.points > BLACKJACK {
        dist[BUST] = 1.0;
        return dist;
    }
    if total.points >= DEALER_STANDS_AT {
        dist[usize::from(total.points - DEALER_STANDS_AT)] = 1.0;
        return dist;
    }

    let (row, col) = (usize::from(total.points), usize::from(total.high_aces > 0));
    if let Some(cached) = memo[row][col] {
        return cached;
    }

    for card in DRAWS {
        let next = dealer_finals(total.plus(card), memo);
        for (acc, p) in dist.iter_mut().zip(next) {
            *acc += p / 13.0;
        }
    }

    memo[row][col] = Some(dist);
    dist
}

/// Probability of each final dealer total given the up card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DealerOdds {
    dist: Distribution,
}

impl DealerOdds {
    /// Computes the odds for an up card worth `up_card` points (Ace = 11).
    #[must_use]
    pub fn from_up_card(up_card: u8) -> Self {
        let mut memo: Memo = [[None; 2]; BLACKJACK as usize + 1];
        Self {
            dist: dealer_finals(Total::new(up_card, up_card == 11), &mut memo),
        }
    }

    /// Probability that the dealer busts.
    #[must_use]
    pub const fn bust(&self) -> f64 {
        self.dist[BUST]
    }

    /// Probability that the dealer finishes on exactly `total`.
    #[must_use]
    pub fn finishing_on(&self, total: u8) -> f64 {
        if (DEALER_STANDS_AT..=BLACKJACK).contains(&total) {
            self.dist[usize::from(total - DEALER_STANDS_AT)]
        } else {
            0.0
        }
    }

    /// Expected result per unit bet of standing on `player_total`.
    #[must_use]
    pub fn stand_ev(&self, player_total: u8) -> f64 {
        if player_total > BLACKJACK {
            return -1.0;
        }

        let mut ev = self.bust();
        for dealer_total in DEALER_STANDS_AT..=BLACKJACK {
            let p = self.finishing_on(dealer_total);
            match player_total.cmp(&dealer_total) {
                Ordering::Greater => ev += p,
                Ordering::Less => ev -= p,
                Ordering::Equal => {}
            }
        }
        ev
    }

    fn hit_once_ev(&self, start: Total) -> f64 {
        DRAWS
            .iter()
            .map(|&card| self.stand_ev(start.plus(card).points))
            .sum::<f64>()
            / 13.0
    }
}

/// Answers advisory requests locally from basic strategy and expected values.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStrategyAdvisor;

impl BasicStrategyAdvisor {
    /// Creates the advisor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Computes the advisory synchronously.
    ///
    /// ```
    /// use bjcoach::{AdvisoryRequest, BasicStrategyAdvisor, Recommendation};
    ///
    /// let advisory = BasicStrategyAdvisor::new().advise_now(&AdvisoryRequest {
    ///     player_sum: 20,
    ///     dealer_sum: 6,
    ///     has_ace: false,
    ///     can_double_down: true,
    /// });
    /// assert_eq!(advisory.normal.recommendation, Recommendation::Stand);
    /// assert_eq!(advisory.mixed.recommendation, Recommendation::Stand);
    /// ```
    #[must_use]
    pub fn advise_now(&self, request: &AdvisoryRequest) -> Advisory {
        let player = request.player_sum;

        if player == BLACKJACK {
            let advice = stand("You have 21! Always stand with 21.".into());
            return Advisory {
                mixed: advice.clone(),
                normal: advice,
            };
        }
        if player > BLACKJACK {
            let advice = stand("You have busted with a sum over 21.".into());
            return Advisory {
                mixed: advice.clone(),
                normal: advice,
            };
        }

        let soft = request.has_ace;
        let mut normal = if soft {
            soft_table(player, request.dealer_sum, request.can_double_down)
        } else {
            hard_table(player, request.dealer_sum, request.can_double_down)
        };
        let mut mixed = expected_value(request, soft);

        // From 12 up the Ace may already count as 1; only the player can tell.
        if soft && player >= 12 {
            let note = format!(
                " This assumes your Ace still counts as 11; if it counts as 1 you hold a hard {player}."
            );
            normal.reasoning.push_str(&note);
            mixed.reasoning.push_str(&note);
        }

        Advisory { mixed, normal }
    }
}

impl Advisor for BasicStrategyAdvisor {
    fn advise(
        &self,
        request: AdvisoryRequest,
    ) -> impl Future<Output = Result<Advisory, AdvisoryError>> + Send {
        future::ready(Ok(self.advise_now(&request)))
    }
}

const fn stand(reasoning: String) -> Advice {
    Advice {
        recommendation: Recommendation::Stand,
        reasoning,
    }
}

const fn hit(reasoning: String) -> Advice {
    Advice {
        recommendation: Recommendation::Hit,
        reasoning,
    }
}

fn double_or(fallback: Recommendation, can_double: bool, reasoning: String) -> Advice {
    Advice {
        recommendation: if can_double {
            Recommendation::DoubleDown
        } else {
            fallback
        },
        reasoning,
    }
}

fn hard_table(player: u8, dealer: u8, can_double: bool) -> Advice {
    match player {
        17.. => stand(format!(
            "You have {player}. Basic strategy recommends standing on 17 or higher."
        )),
        ..=8 => hit(format!(
            "You have {player}. Basic strategy recommends hitting on 8 or lower."
        )),
        9 if (3..=6).contains(&dealer) => double_or(
            Recommendation::Hit,
            can_double,
            format!("You have 9 against dealer's {dealer}. Basic strategy doubles here when allowed."),
        ),
        9 => hit(format!(
            "You have 9 against dealer's {dealer}. Basic strategy recommends hitting."
        )),
        10 | 11 if dealer < player => double_or(
            Recommendation::Hit,
            can_double,
            format!("You have {player} against dealer's {dealer}. Basic strategy doubles here when allowed."),
        ),
        10 | 11 => hit(format!(
            "You have {player} against dealer's {dealer}. Basic strategy recommends hitting."
        )),
        12 if (4..=6).contains(&dealer) => stand(format!(
            "You have 12 against dealer's {dealer}. Basic strategy recommends standing."
        )),
        12 => hit(format!(
            "You have 12 against dealer's {dealer}. Basic strategy recommends hitting."
        )),
        _ if (2..=6).contains(&dealer) => stand(format!(
            "You have {player} against dealer's {dealer}. Basic strategy recommends standing."
        )),
        _ => hit(format!(
            "You have {player} against dealer's {dealer}. Basic strategy recommends hitting."
        )),
    }
}

fn soft_table(player: u8, dealer: u8, can_double: bool) -> Advice {
    match player {
        19.. => stand(format!(
            "You have soft {player}. Basic strategy recommends standing on soft 19 or higher."
        )),
        18 if (3..=6).contains(&dealer) => double_or(
            Recommendation::Stand,
            can_double,
            format!("You have soft 18 against dealer's {dealer}. Basic strategy doubles here when allowed."),
        ),
        18 if matches!(dealer, 2 | 7 | 8) => stand(format!(
            "You have soft 18 against dealer's {dealer}. Basic strategy recommends standing."
        )),
        18 => hit(format!(
            "You have soft 18 against dealer's {dealer}. Basic strategy recommends hitting."
        )),
        _ if (3..=6).contains(&dealer) && player >= 13 => double_or(
            Recommendation::Hit,
            can_double,
            format!("You have soft {player} against dealer's {dealer}. Basic strategy doubles here when allowed."),
        ),
        _ => hit(format!(
            "You have soft {player} against dealer's {dealer}. Basic strategy recommends hitting."
        )),
    }
}

fn expected_value(request: &AdvisoryRequest, soft: bool) -> Advice {
    let odds = DealerOdds::from_up_card(request.dealer_sum);
    let stand_ev = odds.stand_ev(request.player_sum);
    let hit_ev = odds.hit_once_ev(Total::new(request.player_sum, soft));
    let double_ev = 2.0 * hit_ev;

    if request.can_double_down && double_ev > stand_ev && double_ev > hit_ev {
        Advice {
            recommendation: Recommendation::DoubleDown,
            reasoning: format!(
                "Doubling down has the highest expected value ({double_ev:+.3} per unit bet, \
                 hitting {hit_ev:+.3}, standing {stand_ev:+.3})."
            ),
        }
    } else if hit_ev > stand_ev {
        hit(format!(
            "Hitting has the highest expected value ({hit_ev:+.3} per unit bet, \
             standing {stand_ev:+.3})."
        ))
    } else {
        stand(format!(
            "Standing has the highest expected value ({stand_ev:+.3} per unit bet, \
             hitting {hit_ev:+.3})."
        ))
    }
}
