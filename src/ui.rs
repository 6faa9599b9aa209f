#![cfg(feature = "std")]

use std::fmt::Write;

use crate::{
    common::{Phase, RoundOutcome},
    rating::Rating,
    round::RoundView,
    session::SessionSummary,
};

/// Draw the round: hint, numbered slots, tray and remaining budgets.
pub fn render_round(view: &RoundView, index: usize, total: usize, score: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "    ╔══ Quest {}/{} ══ Score {} ══╗", index + 1, total, score);
    let _ = writeln!(out, "    Hint: {}", view.hint);

    let slots: Vec<String> = match (&view.revealed, view.phase) {
        (Some(word), Phase::LockedReveal) | (Some(word), Phase::Success) => {
            word.chars().map(|c| format!("[{}]", c)).collect()
        }
        _ => view
            .slots
            .iter()
            .map(|s| match s {
                Some(l) => format!("[{}]", l.character()),
                None => "[ ]".to_string(),
            })
            .collect(),
    };
    let _ = writeln!(out, "    Slots: {}", slots.join(" "));
    let numbers: Vec<String> = (1..=view.word_len()).map(|n| format!("{:^3}", n)).collect();
    let _ = writeln!(out, "           {}", numbers.join(" "));

    let bank: Vec<String> = view.bank.iter().map(|l| l.character().to_string()).collect();
    let _ = writeln!(out, "    Bank:  {}", bank.join(" "));
    let _ = writeln!(
        out,
        "    Hints left: {}   Attempts left: {}",
        view.hints_remaining(),
        view.max_wrong_attempts.saturating_sub(view.wrong_attempts)
    );
    out
}

/// Banner shown while a round dwells on its outcome.
pub fn outcome_banner(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Success => "Excellent!",
        RoundOutcome::Failed => "Next Question...",
        RoundOutcome::Skipped => "Skipped",
    }
}

/// Result screen text.
pub fn render_summary(summary: &SessionSummary) -> String {
    let rating: Rating = summary.rating;
    let stars: String = (0..crate::config::MAX_STARS)
        .map(|i| if i < rating.stars { '★' } else { '☆' })
        .collect();
    let mut out = String::new();
    let _ = writeln!(out, "    {}  {}", stars, rating.tier.headline());
    let _ = writeln!(out, "    {}", rating.tier.subtext());
    let _ = writeln!(
        out,
        "    Score {} | solved {} of {} | failed {} | skipped {}",
        summary.final_score, summary.solved, summary.shown, summary.failed, summary.skipped
    );
    out
}
