use std::num::NonZeroU32;

use ratatui::style::Style;

use guess_engine::{AttemptLimit, Feedback, GuessSession, Outcome, Secret, Tally, Verdict};

use crate::theme::{Glyphs, Palette, styles};

pub(crate) const INVALID_INPUT_TEXT: &str = "Enter a number, dude!";

pub(crate) fn prompt_text(limit: AttemptLimit) -> String {
    let base = format!(
        "Guess the number between {} and {}",
        Secret::MIN,
        Secret::MAX
    );
    match limit.max().map(NonZeroU32::get) {
        Some(1) => format!("{base} (1 attempt)"),
        Some(max) => format!("{base} ({max} attempts)"),
        None => base,
    }
}

pub(crate) fn feedback_text(feedback: Feedback) -> String {
    match feedback {
        Feedback::Verdict(Verdict::Higher) => "Higher".to_string(),
        Feedback::Verdict(Verdict::Lower) => "Lower".to_string(),
        Feedback::Verdict(Verdict::Won { secret }) => {
            format!("Correct! The number was {secret}.")
        }
        Feedback::Verdict(Verdict::Lost { secret }) => {
            format!("Out of attempts! The number was {secret}.")
        }
        Feedback::InvalidInput => INVALID_INPUT_TEXT.to_string(),
        Feedback::SessionClosed => "The game is over. Press y to play again.".to_string(),
    }
}

pub(crate) fn feedback_style(feedback: Feedback, palette: &Palette) -> Style {
    match feedback {
        Feedback::Verdict(Verdict::Higher) => styles::higher(palette),
        Feedback::Verdict(Verdict::Lower) => styles::lower(palette),
        Feedback::Verdict(Verdict::Won { .. }) => styles::correct(palette),
        Feedback::Verdict(Verdict::Lost { .. }) => styles::lost(palette),
        Feedback::InvalidInput | Feedback::SessionClosed => styles::warning(palette),
    }
}

pub(crate) fn attempts_text(session: &GuessSession) -> String {
    let used = session.attempts_used();
    match session.attempts_limit().max() {
        Some(max) => format!("Attempts: {used} / {max}"),
        None => format!("Attempts so far: {used}"),
    }
}

pub(crate) fn outcome_glyph(outcome: Outcome, glyphs: &Glyphs) -> &'static str {
    match outcome {
        Outcome::Higher => glyphs.higher,
        Outcome::Lower => glyphs.lower,
        Outcome::Correct => glyphs.correct,
    }
}

pub(crate) fn tally_text(tally: Tally, limit: AttemptLimit, glyphs: &Glyphs) -> String {
    let sep = glyphs.separator;
    format!(
        "Played: {} {sep} Won: {} {sep} Lost: {} {sep} Limit: {limit}",
        tally.played(),
        tally.won,
        tally.lost,
    )
}
