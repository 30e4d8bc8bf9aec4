//! Attempt records and the classifications a guess can produce.

use std::cmp::Ordering;
use std::num::NonZeroU32;

use thiserror::Error;

use crate::Secret;

/// Which way the player should move after a guess.
///
/// Carries no display text; the TUI maps each variant to a label, color and glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The guess was below the secret.
    Higher,
    /// The guess was above the secret.
    Lower,
    Correct,
}

impl Outcome {
    #[must_use]
    pub fn classify(guess: i64, secret: Secret) -> Self {
        match guess.cmp(&i64::from(secret.get())) {
            Ordering::Less => Self::Higher,
            Ordering::Greater => Self::Lower,
            Ordering::Equal => Self::Correct,
        }
    }
}

/// One parsed guess, frozen once appended to a session's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptRecord {
    number: NonZeroU32,
    guess: i64,
    outcome: Outcome,
}

impl AttemptRecord {
    #[must_use]
    pub const fn new(number: NonZeroU32, guess: i64, outcome: Outcome) -> Self {
        Self {
            number,
            guess,
            outcome,
        }
    }

    /// 1-based position in the history.
    #[must_use]
    pub const fn number(&self) -> NonZeroU32 {
        self.number
    }

    #[must_use]
    pub const fn guess(&self) -> i64 {
        self.guess
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of a guess that was accepted and counted as an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Higher,
    Lower,
    Won { secret: Secret },
    /// Final attempt used without finding the secret. Replaces Higher/Lower.
    Lost { secret: Secret },
}

impl Verdict {
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }
}

/// A guess that was not counted. Session state is untouched in both cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("{input:?} is not a whole number")]
    InvalidInput { input: String },
    #[error("the game is over; start a new session to keep guessing")]
    SessionClosed,
}
