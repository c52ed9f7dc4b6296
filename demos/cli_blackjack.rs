//! CLI blackjack demo.
//!
//! Run with `--verbose` to print engine logs to stderr.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use blackjack_table::{
    Card, CommandStatus, Game, GameEvent, GameOptions, GameState, HandView, Snapshot, Suit,
};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        eprintln!("[{:<5}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Debug);
        }
    }

    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);
    replay(&game);

    loop {
        let snapshot = game.snapshot();
        match snapshot.state {
            GameState::GameOver => {
                if prompt_line("New game? (y/n): ").starts_with('y') {
                    let _ = game.new_game();
                    replay(&game);
                    continue;
                }
                break;
            }
            GameState::Betting | GameState::Settled => {
                if !betting_turn(&game, &snapshot) {
                    break;
                }
            }
            GameState::PlayerTurn(_) => {
                print_table(&snapshot);
                if !player_turn(&game, &snapshot) {
                    break;
                }
            }
            GameState::Dealing | GameState::DealerTurn => {}
        }
        replay(&game);
    }

    println!("Goodbye.");
}

/// Returns `false` when the player quits.
fn betting_turn(game: &Game, snapshot: &Snapshot) -> bool {
    let chips = game.affordable_chips();
    println!(
        "\nBankroll {} | bet {} {:?}",
        snapshot.bankroll, snapshot.bet, snapshot.bet_chips
    );
    println!("Chips: {chips:?}  [r]educe [c]lear [d]eal [q]uit");

    let input = prompt_line("Bet: ");
    match input.as_str() {
        "q" | "quit" => return false,
        "r" | "reduce" => report(game.reduce_bet()),
        "c" | "clear" => report(game.clear_bet()),
        "d" | "deal" => match game.start_round() {
            Ok(status) => report(status),
            Err(err) => println!("{err}"),
        },
        other => match other.parse::<usize>() {
            Ok(chip) if chips.contains(&chip) => {
                if let Err(err) = game.place_bet(chip) {
                    println!("{err}");
                }
            }
            _ => println!("Pick one of the listed chips."),
        },
    }
    true
}

/// Returns `false` when the player quits.
fn player_turn(game: &Game, snapshot: &Snapshot) -> bool {
    println!("{}", format_actions(snapshot));
    let action = prompt_line("Action: ");

    let result = match action.as_str() {
        "h" | "hit" => Ok(game.hit()),
        "s" | "stand" => Ok(game.stand()),
        "d" | "double" => game.double(),
        "p" | "split" => game.split(),
        "q" | "quit" => return false,
        _ => {
            println!("Unknown action.");
            return true;
        }
    };

    match result {
        Ok(status) => report(status),
        Err(err) => println!("{err}"),
    }
    true
}

fn report(status: CommandStatus) {
    if !status.is_applied() {
        println!("Not now.");
    }
}

/// Prints queued events, holding the table busy while it does.
fn replay(game: &Game) {
    let Some(_reveal) = game.begin_reveal() else {
        return;
    };

    for event in game.drain_events() {
        let pause = match event {
            GameEvent::CardDealt { .. } | GameEvent::HoleRevealed(_) => 250,
            GameEvent::Reshuffled => 1000,
            _ => 0,
        };
        match &event {
            GameEvent::Settled(result) => {
                for hand in &result.hands {
                    let code = if hand.outcome.is_win() { "32" } else { "31" };
                    println!("{} hand: {}", hand.slot, colorize(&hand.outcome.to_string(), code));
                }
                println!("Payout: {} (net {})", result.total_payout, result.net);
            }
            _ => println!("{event}"),
        }
        thread::sleep(Duration::from_millis(pause));
    }
}

fn print_table(snapshot: &Snapshot) {
    println!("\nShoe: {} cards remaining", snapshot.cards_remaining);

    let mut dealer: Vec<String> = snapshot.dealer.cards.iter().map(format_card).collect();
    dealer.extend((0..snapshot.dealer.hidden).map(|_| "??".to_string()));
    println!("Dealer: {} (value {})", dealer.join(" "), snapshot.dealer.value);

    for hand in &snapshot.hands {
        println!("{}", format_hand(hand));
    }
    println!();
}

fn format_hand(hand: &HandView) -> String {
    let marker = if hand.active { "*" } else { " " };
    let cards = hand
        .cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{marker} {} hand: {cards} | value {} | bet {} | {:?}",
        hand.slot, hand.value, hand.bet, hand.status
    )
}

fn format_actions(snapshot: &Snapshot) -> String {
    let parts = [
        format_action("hit", "h", snapshot.can_hit),
        format_action("stand", "s", snapshot.can_hit),
        format_action("double", "d", snapshot.can_double),
        format_action("split", "p", snapshot.can_split),
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

fn format_card(card: &Card) -> String {
    let code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), code)
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}
