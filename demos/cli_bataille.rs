//! CLI Bataille example.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bataille::{
    Card, Color, DealtCards, Locale, Match, MatchSummary, MatchView, PresentationOptions,
    RoundOutcome, RoundResult, drive_round, hand_progress_percent,
};

fn main() {
    println!("Bataille CLI example (enter to play, 'n' for a new game, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let locale = if std::env::args().any(|arg| arg == "--english") {
        Locale::English
    } else {
        Locale::French
    };
    let options = PresentationOptions::default().with_locale(locale);

    let mut game = Match::new(seed);
    let mut view = Terminal { options };

    loop {
        print_table(&game, locale);

        match prompt_line("> ").as_str() {
            "q" | "quit" => return,
            "n" | "new" => {
                game.reset();
                println!("{}", locale.new_game_notice());
            }
            _ if game.is_over() => println!("{}", locale.game_over_hint()),
            _ => {
                if drive_round(&mut game, &mut view).is_none() {
                    println!("{}", locale.no_round_notice());
                }
            }
        }
    }
}

struct Terminal {
    options: PresentationOptions,
}

impl MatchView for Terminal {
    fn reveal(&mut self, dealt: &DealtCards) {
        let locale = self.options.locale;
        println!(
            "{}: {} ({})   {}: {} ({})",
            locale.player_label(),
            format_card(&dealt.player_card),
            locale.suit_name(dealt.player_card.suit),
            locale.computer_label(),
            format_card(&dealt.computer_card),
            locale.suit_name(dealt.computer_card.suit)
        );
        let _ = io::stdout().flush();
        thread::sleep(Duration::from_millis(u64::from(self.options.reveal_delay_ms)));
    }

    fn show_round(&mut self, result: &RoundResult) {
        let message = self.options.locale.round_message(result.outcome);
        let code = match result.outcome {
            RoundOutcome::Win => "32",
            RoundOutcome::Lose => "31",
            RoundOutcome::Tie => "33",
        };
        println!("{}", colorize(message, code));
    }

    fn show_final(&mut self, summary: &MatchSummary) {
        let locale = self.options.locale;
        println!();
        println!("{}", locale.final_title(summary.outcome));
        println!("{}", locale.final_message(summary.outcome));
        println!("{}:", locale.final_score_label());
        println!("  {}: {}", locale.player_label(), summary.player_score);
        println!("  {}: {}", locale.computer_label(), summary.computer_score);
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Match, locale: Locale) {
    println!();
    print_side(
        locale,
        locale.player_label(),
        game.player_score(),
        game.player_hand().len(),
    );
    print_side(
        locale,
        locale.computer_label(),
        game.computer_score(),
        game.computer_hand().len(),
    );
}

fn print_side(locale: Locale, label: &str, score: u8, remaining: usize) {
    let percent = usize::from(hand_progress_percent(remaining));
    let filled = percent / 5;
    let bar = format!("{}{}", "#".repeat(filled), ".".repeat(20 - filled));
    println!(
        "{label:<12} {} {score:>2} | [{bar}] {remaining:>2} {}",
        locale.score_label(),
        locale.cards_label()
    );
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let code = match card.color() {
        Color::Red => "31",
        Color::Black => "34",
    };
    colorize(&card.to_string(), code)
}
