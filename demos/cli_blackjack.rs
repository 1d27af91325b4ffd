//! CLI blackjack with a strategy coach.
//!
//! Set `RUST_LOG=bjcoach=debug` to watch the engine's transitions.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcoach::{
    Advice, BasicStrategyAdvisor, Card, DealerHand, Game, GameOptions, GameState, Hand, Outcome,
    Session,
};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("Blackjack CLI (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);
    let minimum = game.options().minimum_bet;
    let mut session = Session::new(game, BasicStrategyAdvisor::new());

    loop {
        if !session.game().wallet().covers(minimum) {
            println!("You are out of money. Game over.");
            break;
        }

        let balance = session.game().balance();
        println!("\nBalance: {balance}");
        let most = balance.whole();
        let Some(bet) = prompt_usize(&format!("Bet amount ({minimum}-{most}, 0 to quit): "))
        else {
            break;
        };
        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = session.place_bet(bet) {
            println!("{err}");
            continue;
        }

        if let Err(err) = session.deal() {
            println!("{err}");
            continue;
        }

        while session.game().state() == GameState::PlayerTurn {
            print_table(session.game());
            if let Some(advisory) = session.await_advisory().await {
                print_advice("Basic strategy", &advisory.normal);
                print_advice("Expected value", &advisory.mixed);
            }

            println!("{}", format_actions(session.game()));
            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => session.hit().map(|card| println!("You draw {card}.")),
                "s" | "stand" => session.stand().map(|_| ()),
                "d" | "double" => session.double_down().map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("{err}");
            }
        }

        if let Some(settlement) = session.game().settlement() {
            print_table(session.game());
            let message = if settlement.outcome == Outcome::Push {
                colorize(settlement.message(), "33")
            } else if settlement.outcome.is_loss() {
                colorize(settlement.message(), "31")
            } else {
                colorize(settlement.message(), "32")
            };
            println!("{message} ({:+})", settlement.delta);
        }

        if session.game().state() == GameState::Settled && session.reset().is_err() {
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" || input.is_empty() {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    let Some(round) = game.round() else {
        return;
    };

    let dealer = round.dealer();
    let dealer_value = if dealer.is_hole_revealed() {
        dealer.value()
    } else {
        dealer.visible_value()
    };
    println!("\nDealer: {} (value {dealer_value})", format_dealer(dealer));
    println!(
        "You:    {} (value {}) | bet {}",
        format_hand(round.player()),
        round.player().value(),
        game.bet()
    );
    println!("Deck: {} cards remaining\n", round.deck().remaining());
}

fn print_advice(source: &str, advice: &Advice) {
    println!(
        "{}: {}. {}",
        source,
        colorize(&advice.recommendation.to_string(), "36"),
        advice.reasoning
    );
}

fn format_actions(game: &Game) -> String {
    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("double", "d", game.can_double_down()),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    let mut parts: Vec<String> = dealer.visible_cards().iter().map(format_card).collect();
    if !dealer.is_hole_revealed() && dealer.len() > 1 {
        parts.push("??".to_string());
    }
    parts.join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), code)
}
