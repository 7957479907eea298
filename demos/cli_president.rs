//! CLI President example: one human seat against computer players.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use president::{
    Card, Controller, Decide, Game, GameOptions, Hand, Play, PlayError, SeatStatus, StateView,
    Suit,
};

const COMPUTER_NAMES: [&str; 4] = ["Ada", "Brick", "Cleo", "Dex"];

/// Reads plays from the terminal.
struct Terminal;

impl Decide for Terminal {
    fn decide(&mut self, view: &StateView<'_>) -> Play {
        print_table(view);
        loop {
            let input = prompt_line("Play (e.g. '10h 10s', 's' to skip, 'q' to quit): ");
            match input.as_str() {
                "q" | "quit" => std::process::exit(0),
                "s" | "skip" | "pass" => return Play::Skip,
                _ => {}
            }

            let parsed: Result<Vec<Card>, _> = input
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|part| !part.is_empty())
                .map(str::parse)
                .collect();
            match parsed {
                Ok(cards) if !cards.is_empty() => return Play::Cards(cards),
                Ok(_) => println!("Enter at least one card."),
                Err(err) => println!("Could not read that: {err}."),
            }
        }
    }

    fn rejected(&mut self, error: PlayError) {
        println!("Sorry, that is not a valid play: {error}.");
    }
}

fn main() {
    env_logger::init();
    println!("President CLI example");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    let name = prompt_line("Your name: ");
    let name = if name.is_empty() { "You".to_string() } else { name };
    let Ok(human) = game.join(name) else {
        println!("Could not join the table.");
        return;
    };

    let opponents = loop {
        let Some(count) = prompt_usize("Number of computer opponents (1-4): ") else {
            return;
        };
        if (1..=COMPUTER_NAMES.len()).contains(&count) {
            break count;
        }
        println!("Please choose between 1 and {}.", COMPUTER_NAMES.len());
    };

    for &opponent in &COMPUTER_NAMES[..opponents] {
        if let Err(err) = game.join(opponent) {
            println!("Join error: {err}");
            return;
        }
    }

    let mut controllers: Vec<Controller> = game
        .players()
        .iter()
        .map(|player| {
            if player.id() == human {
                Controller::human(Terminal)
            } else {
                Controller::computer()
            }
        })
        .collect();

    loop {
        match game.run_round(&mut controllers) {
            Ok(result) => {
                println!("\nRound {} complete.", result.round);
                for standing in &result.standings {
                    let name = game.player(standing.player_id).map_or("?", |p| p.name());
                    println!("  {:<14} {}", standing.role, name);
                }
            }
            Err(err) => {
                println!("Round error: {err}");
                break;
            }
        }

        match prompt_line("\nPlay again? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => {
                println!("Goodbye.");
                break;
            }
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
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(view: &StateView<'_>) {
    println!();
    for seat in &view.roster {
        let marker = if seat.player_id == view.player_id { "*" } else { " " };
        let status = match seat.status {
            SeatStatus::Active { cards } => format!("{cards} card(s)"),
            SeatStatus::Finished { place } => format!("out (#{place})"),
        };
        let role = seat.role.map(|r| format!(" [{r}]")).unwrap_or_default();
        println!("{marker} {}{role}: {status}", seat.name);
    }

    match view.last_play {
        Some(pile) => println!("\nPile: {}", format_cards(pile)),
        None => println!("\nPile: (empty, you lead)"),
    }
    println!("Hand: {}", format_hand(view.hand));
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    format_cards(hand.cards())
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
