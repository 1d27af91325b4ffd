//! Advisory integration tests.

use core::future::{self, Future};
use core::task::Poll;
use core::time::Duration;

use bjcoach::advisory::json::{decode_advisory, encode_request};
use bjcoach::{
    Advisor, Advisory, AdvisoryDesk, AdvisoryError, AdvisoryRequest, BasicStrategyAdvisor, Card,
    DealError, DealerOdds, Deck, Game, GameOptions, GameState, JsonAdvisor, Rank, Recommendation,
    Session, Suit, Transport,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Player 10 + 8 against a dealer 10 up with a 7 in the hole, then a spare 2.
fn eighteen_against_ten() -> Deck {
    Deck::stacked(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Seven, Suit::Spades),
        card(Rank::Two, Suit::Hearts),
    ])
}

/// Player 5 + 6 against a dealer 6 up, with small cards behind.
fn eleven_against_six() -> Deck {
    Deck::stacked(&[
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Four, Suit::Hearts),
    ])
}

fn dealt_game(deck: Deck) -> Game {
    let mut game = Game::new(GameOptions::default(), 1);
    game.place_bet(10).unwrap();
    game.deal_with(deck).unwrap();
    game
}

fn request(player_sum: u8, dealer_sum: u8, has_ace: bool, can_double_down: bool) -> AdvisoryRequest {
    AdvisoryRequest {
        player_sum,
        dealer_sum,
        has_ace,
        can_double_down,
    }
}

struct FailingAdvisor;

impl Advisor for FailingAdvisor {
    fn advise(
        &self,
        _request: AdvisoryRequest,
    ) -> impl Future<Output = Result<Advisory, AdvisoryError>> + Send {
        future::ready(Err(AdvisoryError::Unavailable("connection refused".into())))
    }
}

struct CrashingAdvisor;

impl Advisor for CrashingAdvisor {
    fn advise(
        &self,
        _request: AdvisoryRequest,
    ) -> impl Future<Output = Result<Advisory, AdvisoryError>> + Send {
        future::poll_fn(|_| -> Poll<Result<Advisory, AdvisoryError>> {
            panic!("advisor crashed")
        })
    }
}

struct SilentAdvisor;

impl Advisor for SilentAdvisor {
    fn advise(
        &self,
        _request: AdvisoryRequest,
    ) -> impl Future<Output = Result<Advisory, AdvisoryError>> + Send {
        future::pending()
    }
}

struct CannedTransport(&'static str);

impl Transport for CannedTransport {
    fn post(&self, body: String) -> impl Future<Output = Result<String, AdvisoryError>> + Send {
        assert!(body.contains("\"player_sum\""));
        future::ready(Ok(self.0.to_owned()))
    }
}

#[test]
fn dealer_odds_form_a_distribution() {
    for up_card in 2..=11 {
        let odds = DealerOdds::from_up_card(up_card);
        let total: f64 = odds.bust() + (17..=21).map(|t| odds.finishing_on(t)).sum::<f64>();
        assert!((total - 1.0).abs() < 1e-9, "up card {up_card}: {total}");
        assert!(odds.finishing_on(16) < f64::EPSILON);
    }

    let six = DealerOdds::from_up_card(6);
    let ten = DealerOdds::from_up_card(10);
    assert!(six.bust() > ten.bust());
    assert!(six.stand_ev(20) > 0.0);
    assert!((six.stand_ev(22) + 1.0).abs() < f64::EPSILON);
}

#[test]
fn basic_strategy_tables() {
    let advisor = BasicStrategyAdvisor::new();

    let hard_sixteen = advisor.advise_now(&request(16, 10, false, true));
    assert_eq!(hard_sixteen.normal.recommendation, Recommendation::Hit);

    let hard_thirteen = advisor.advise_now(&request(13, 4, false, false));
    assert_eq!(hard_thirteen.normal.recommendation, Recommendation::Stand);

    let eleven = advisor.advise_now(&request(11, 6, false, true));
    assert_eq!(eleven.normal.recommendation, Recommendation::DoubleDown);
    assert_eq!(eleven.mixed.recommendation, Recommendation::DoubleDown);

    let eleven_no_double = advisor.advise_now(&request(11, 6, false, false));
    assert_eq!(eleven_no_double.normal.recommendation, Recommendation::Hit);
    assert_eq!(eleven_no_double.mixed.recommendation, Recommendation::Hit);

    let soft_eighteen = advisor.advise_now(&request(18, 9, true, false));
    assert_eq!(soft_eighteen.normal.recommendation, Recommendation::Hit);

    let soft_nineteen = advisor.advise_now(&request(19, 6, true, true));
    assert_eq!(soft_nineteen.normal.recommendation, Recommendation::Stand);

    let twenty_one = advisor.advise_now(&request(21, 10, true, false));
    assert_eq!(twenty_one.normal.recommendation, Recommendation::Stand);
    assert_eq!(twenty_one.mixed.recommendation, Recommendation::Stand);
    assert_eq!(twenty_one.normal.reasoning, "You have 21! Always stand with 21.");
}

#[test]
fn ace_hands_from_twelve_up_say_softness_is_assumed() {
    let advisor = BasicStrategyAdvisor::new();

    // A, 5, K is a hard 16, but the request only says an Ace is present.
    let with_ace = advisor.advise_now(&request(16, 5, true, false));
    assert!(with_ace.normal.reasoning.contains("if it counts as 1 you hold a hard 16"));
    assert!(with_ace.mixed.reasoning.contains("if it counts as 1 you hold a hard 16"));

    let small_soft = advisor.advise_now(&request(7, 5, true, false));
    assert!(!small_soft.normal.reasoning.contains("counts as 1"));

    let hard = advisor.advise_now(&request(16, 5, false, false));
    assert!(!hard.normal.reasoning.contains("counts as 1"));
    assert!(!hard.mixed.reasoning.contains("counts as 1"));
}

#[test]
fn request_encodes_the_wire_field_names() {
    let body = encode_request(&request(18, 10, false, true)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(value["player_sum"], 18);
    assert_eq!(value["dealer_sum"], 10);
    assert_eq!(value["has_ace"], false);
    assert_eq!(value["can_double_down"], true);
}

#[test]
fn response_decoding_ignores_extra_fields_and_accepts_lowercase() {
    let advisory = decode_advisory(
        r#"{
            "mixed": {"recommendation": "Hit", "reasoning": "better EV", "hit_probability": 1.0, "stand_probability": 0.0},
            "normal": {"recommendation": "stand", "reasoning": "17 or more"}
        }"#,
    )
    .unwrap();

    assert_eq!(advisory.mixed.recommendation, Recommendation::Hit);
    assert_eq!(advisory.normal.recommendation, Recommendation::Stand);

    let double = decode_advisory(
        r#"{"mixed": {"recommendation": "Double Down", "reasoning": ""},
            "normal": {"recommendation": "Double Down", "reasoning": ""}}"#,
    )
    .unwrap();
    assert_eq!(double.normal.recommendation, Recommendation::DoubleDown);
}

#[test]
fn response_with_unknown_recommendation_is_malformed() {
    let err = decode_advisory(
        r#"{"mixed": {"recommendation": "bust", "reasoning": ""},
            "normal": {"recommendation": "bust", "reasoning": ""}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, AdvisoryError::Malformed(_)));
}

#[test]
fn submitting_outside_a_runtime_is_skipped() {
    let game = dealt_game(eighteen_against_ten());
    let mut desk = AdvisoryDesk::new(BasicStrategyAdvisor::new());

    desk.submit(game.advisory_ticket().unwrap());
    assert_eq!(desk.in_flight(), 0);
    assert!(desk.collect(game.generation()).is_none());
}

#[tokio::test]
async fn advisory_arrives_for_the_current_hand() {
    let game = dealt_game(eighteen_against_ten());
    let mut desk = AdvisoryDesk::new(BasicStrategyAdvisor::new());

    desk.submit(game.advisory_ticket().unwrap());
    let advisory = desk.settle(game.generation()).await.unwrap();

    assert_eq!(advisory.normal.recommendation, Recommendation::Stand);
    assert_eq!(advisory.mixed.recommendation, Recommendation::Stand);
    assert_eq!(desk.in_flight(), 0);
}

#[tokio::test]
async fn stale_advisory_is_not_shown_after_a_hit() {
    let mut game = dealt_game(eleven_against_six());
    let mut desk = AdvisoryDesk::new(BasicStrategyAdvisor::new());

    let two_card_ticket = game.advisory_ticket().unwrap();
    desk.submit(two_card_ticket);

    game.hit().unwrap();
    assert_eq!(game.round().unwrap().player().len(), 3);

    assert!(desk.settle(game.generation()).await.is_none());
    assert!(desk.advisory(two_card_ticket.generation).is_none());
    assert_eq!(desk.in_flight(), 0);
}

#[tokio::test]
async fn held_advisory_is_dropped_once_the_hand_changes() {
    let mut game = dealt_game(eleven_against_six());
    let mut desk = AdvisoryDesk::new(BasicStrategyAdvisor::new());

    desk.submit(game.advisory_ticket().unwrap());
    assert!(desk.settle(game.generation()).await.is_some());

    game.hit().unwrap();
    assert!(desk.collect(game.generation()).is_none());
}

#[tokio::test]
async fn failing_advisor_leaves_no_advisory_and_game_unaffected() {
    let mut game = dealt_game(eighteen_against_ten());
    let mut desk = AdvisoryDesk::new(FailingAdvisor);

    desk.submit(game.advisory_ticket().unwrap());
    assert!(desk.settle(game.generation()).await.is_none());

    let settlement = game.stand().unwrap();
    assert_eq!(settlement.player_value, 18);
    assert_eq!(game.state(), GameState::Settled);
}

#[tokio::test]
async fn crashing_advisor_does_not_leave_waiters_hanging() {
    let mut game = dealt_game(eighteen_against_ten());
    let mut desk = AdvisoryDesk::new(CrashingAdvisor);

    desk.submit(game.advisory_ticket().unwrap());
    let settled = tokio::time::timeout(Duration::from_secs(2), desk.settle(game.generation()))
        .await
        .expect("settle returns once the advisor task is gone");
    assert!(settled.is_none());
    assert_eq!(desk.in_flight(), 0);

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::Settled);
}

#[tokio::test]
async fn session_keeps_playing_after_an_advisor_crash() {
    let mut session = Session::new(Game::new(GameOptions::default(), 1), CrashingAdvisor);
    session.place_bet(10).unwrap();
    session.deal_with(eleven_against_six()).unwrap();

    assert!(session.await_advisory().await.is_none());
    session.hit().unwrap();
    assert!(session.await_advisory().await.is_none());
    session.stand().unwrap();
    assert_eq!(session.desk().in_flight(), 0);
}

#[tokio::test]
async fn slow_advisor_times_out() {
    let game = dealt_game(eighteen_against_ten());
    let mut desk = AdvisoryDesk::new(SilentAdvisor).with_timeout(Duration::from_millis(20));

    desk.submit(game.advisory_ticket().unwrap());
    assert_eq!(desk.in_flight(), 1);
    assert!(desk.settle(game.generation()).await.is_none());
    assert_eq!(desk.in_flight(), 0);
}

#[tokio::test]
async fn game_actions_do_not_wait_for_the_advisor() {
    let mut session = Session::new(Game::new(GameOptions::default(), 1), SilentAdvisor);
    session.place_bet(10).unwrap();
    session.deal_with(eleven_against_six()).unwrap();

    session.hit().unwrap();
    assert!(session.advisory().is_none());
    session.stand().unwrap();
    assert_eq!(session.game().state(), GameState::Settled);
    assert_eq!(session.desk().in_flight(), 2);
}

#[tokio::test]
async fn failed_deal_asks_for_no_advice() {
    let mut session = Session::new(
        Game::new(GameOptions::default(), 1),
        BasicStrategyAdvisor::new(),
    );
    assert_eq!(session.deal().unwrap_err(), DealError::InvalidState);

    session.place_bet(10).unwrap();
    let short = Deck::stacked(&[card(Rank::Two, Suit::Hearts), card(Rank::Three, Suit::Clubs)]);
    assert_eq!(session.deal_with(short).unwrap_err(), DealError::DeckExhausted);

    assert_eq!(session.desk().in_flight(), 0);
    assert!(session.await_advisory().await.is_none());
}

#[tokio::test]
async fn json_advisor_round_trips_through_a_transport() {
    let transport = CannedTransport(
        r#"{"mixed": {"recommendation": "Stand", "reasoning": "Standing has a higher expected value."},
            "normal": {"recommendation": "Stand", "reasoning": "You have 18."}}"#,
    );
    let mut session = Session::new(
        Game::new(GameOptions::default(), 1),
        JsonAdvisor::new(transport),
    );
    session.place_bet(10).unwrap();
    session.deal_with(eighteen_against_ten()).unwrap();

    let advisory = session.await_advisory().await.unwrap();
    assert_eq!(advisory.normal.reasoning, "You have 18.");
}

#[tokio::test]
async fn session_refreshes_advice_after_each_hit() {
    let mut session = Session::new(
        Game::new(GameOptions::default(), 1),
        BasicStrategyAdvisor::new(),
    );
    session.place_bet(10).unwrap();
    session.deal_with(eleven_against_six()).unwrap();

    let first = session.await_advisory().await.unwrap().clone();
    assert_eq!(first.normal.recommendation, Recommendation::DoubleDown);

    session.hit().unwrap();
    let second = session.await_advisory().await.unwrap();
    assert_eq!(second.normal.recommendation, Recommendation::Stand);

    session.stand().unwrap();
    assert!(session.advisory().is_none());
    session.reset().unwrap();
    assert_eq!(session.game().state(), GameState::Betting);
}
