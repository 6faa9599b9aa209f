#![cfg(feature = "std")]

use rand::rngs::SmallRng;
use tokio::io::{self, AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::{
    common::{PuzzleError, RoundOutcome},
    player::{Action, Player},
    round::RoundView,
    runner::SessionListener,
    session::SessionSummary,
    ui,
};

/// What a line of input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    Help,
}

pub const HELP: &str = "\
    A        place the first A from the bank into the next empty slot
    A 3      place an A into slot 3 (swaps out whatever is there)
    -3       send the letter in slot 3 back to the bank
    hint     fill the next empty slot with the right letter
    reset    clear all slots
    skip     give up on this word
    back     return to the previous word
    quit     end the session";

/// Parse one line of player input against the current round.
pub fn parse_command(input: &str, view: &RoundView) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input - type help for commands".to_string());
    }
    match input.to_ascii_lowercase().as_str() {
        "help" | "?" => return Ok(Command::Help),
        "hint" => return Ok(Command::Play(Action::Hint)),
        "reset" => return Ok(Command::Play(Action::Reset)),
        "skip" => return Ok(Command::Play(Action::Skip)),
        "back" => return Ok(Command::Play(Action::Previous)),
        "quit" | "exit" => return Ok(Command::Play(Action::Quit)),
        _ => {}
    }

    if let Some(rest) = input.strip_prefix('-') {
        let slot = parse_slot(rest, view.word_len())?;
        return Ok(Command::Play(Action::Remove { slot }));
    }

    let mut chars = input.chars();
    let letter = chars.next().ok_or("No letter")?.to_ascii_uppercase();
    if !letter.is_ascii_alphabetic() {
        return Err(format!("Invalid letter '{}' - must be A-Z", letter));
    }
    let rest: String = chars.collect();
    let slot = if rest.trim().is_empty() {
        None
    } else {
        Some(parse_slot(&rest, view.word_len())?)
    };
    let tile = view
        .bank
        .iter()
        .find(|l| l.character() == letter)
        .ok_or_else(|| format!("No '{}' left in the bank", letter))?;
    Ok(Command::Play(Action::Place {
        letter: tile.id(),
        slot,
    }))
}

fn parse_slot(input: &str, len: usize) -> Result<usize, String> {
    let input = input.trim();
    let n: usize = input
        .parse()
        .map_err(|_| format!("Invalid slot '{}' - must be a number 1-{}", input, len))?;
    if n == 0 || n > len {
        return Err(format!("Slot {} out of bounds - must be 1-{}", n, len));
    }
    Ok(n - 1)
}

/// Interactive player reading commands from stdin.
pub struct CliPlayer {
    lines: Lines<BufReader<Stdin>>,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(io::stdin()).lines(),
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Player for CliPlayer {
    async fn next_action(&mut self, _rng: &mut SmallRng, view: &RoundView) -> anyhow::Result<Action> {
        loop {
            print!("> ");
            use std::io::Write;
            std::io::stdout().flush()?;
            let Some(line) = self.lines.next_line().await? else {
                return Ok(Action::Quit);
            };
            match parse_command(&line, view) {
                Ok(Command::Play(action)) => return Ok(action),
                Ok(Command::Help) => println!("{}", HELP),
                Err(msg) => println!("    {}", msg),
            }
        }
    }

    fn handle_rejection(&mut self, _action: Action, error: PuzzleError) {
        println!("    {}", error);
    }
}

/// Prints the game to the terminal as it unfolds.
#[derive(Debug, Default)]
pub struct CliListener {
    score: u32,
}

impl CliListener {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionListener for CliListener {
    fn on_round_started(&mut self, index: usize, total: usize, _view: &RoundView) {
        println!("\n    --- Word {} of {} ---", index + 1, total);
    }

    fn on_turn(&mut self, index: usize, total: usize, view: &RoundView) {
        print!("{}", ui::render_round(view, index, total, self.score));
    }

    fn on_retry(&mut self, wrong_attempts: u32, remaining: u32) {
        println!("    Not quite ({} wrong, {} left). Letters are back in the bank.", wrong_attempts, remaining);
    }

    fn on_locked(&mut self, outcome: RoundOutcome, answer: &str) {
        println!("    {}", ui::outcome_banner(outcome));
        if outcome == RoundOutcome::Failed {
            println!("    The word was {}", answer);
        }
    }

    fn on_round_complete(&mut self, _outcome: RoundOutcome, score_delta: u32) {
        self.score += score_delta;
    }

    fn on_session_complete(&mut self, summary: &SessionSummary) {
        self.score = summary.final_score;
        println!("\n{}", ui::render_summary(summary));
    }
}
