//! The guess-evaluation state machine.

use std::num::NonZeroU32;

use tracing::debug;

use guess_types::{
    AttemptLimit, AttemptRecord, GuessError, Outcome, Secret, SessionStatus, Verdict,
};

use crate::SecretSource;

/// One game, from the first guess to a terminal [`SessionStatus`].
///
/// ```text
///            Correct guess
/// InProgress ─────────────▶ Won
///     │
///     │ limit reached without Correct
///     ▼
///   Lost
/// ```
///
/// Won and Lost are terminal; further guesses fail with
/// [`GuessError::SessionClosed`]. `history().len()` always equals
/// `attempts_used()`.
#[derive(Debug, Clone)]
pub struct GuessSession {
    secret: Secret,
    limit: AttemptLimit,
    history: Vec<AttemptRecord>,
    status: SessionStatus,
}

impl GuessSession {
    /// Start a session with a secret drawn from `source`.
    pub fn new<S>(limit: AttemptLimit, source: &mut S) -> Self
    where
        S: SecretSource + ?Sized,
    {
        Self::with_secret(source.next_secret(), limit)
    }

    #[must_use]
    pub fn with_secret(secret: Secret, limit: AttemptLimit) -> Self {
        Self {
            secret,
            limit,
            history: Vec::new(),
            status: SessionStatus::InProgress,
        }
    }

    /// Parse `raw` and evaluate it against the secret.
    ///
    /// Unparseable input is rejected before the session is consulted, so it
    /// never consumes an attempt. A correct guess wins even when it is also
    /// the last allowed attempt.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Verdict, GuessError> {
        let guess = parse_guess(raw)?;

        if self.status.is_terminal() {
            return Err(GuessError::SessionClosed);
        }

        let outcome = Outcome::classify(guess, self.secret);
        let number = self.next_attempt_number();
        self.history.push(AttemptRecord::new(number, guess, outcome));

        let verdict = match outcome {
            Outcome::Correct => {
                self.status = SessionStatus::Won;
                Verdict::Won {
                    secret: self.secret,
                }
            }
            _ if self.limit.is_reached_by(number.get()) => {
                self.status = SessionStatus::Lost;
                Verdict::Lost {
                    secret: self.secret,
                }
            }
            Outcome::Higher => Verdict::Higher,
            Outcome::Lower => Verdict::Lower,
        };

        debug!(
            attempt = number.get(),
            guess,
            ?outcome,
            ?verdict,
            "Guess evaluated"
        );
        Ok(verdict)
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn attempts_used(&self) -> u32 {
        self.history.len() as u32
    }

    #[must_use]
    pub fn attempts_limit(&self) -> AttemptLimit {
        self.limit
    }

    /// Guesses left before the session is lost; `None` when unbounded.
    #[must_use]
    pub fn attempts_remaining(&self) -> Option<u32> {
        self.limit
            .max()
            .map(|max| max.get().saturating_sub(self.attempts_used()))
    }

    #[must_use]
    pub fn history(&self) -> &[AttemptRecord] {
        &self.history
    }

    #[must_use]
    pub fn last_attempt(&self) -> Option<&AttemptRecord> {
        self.history.last()
    }

    /// The secret, once the session has ended.
    #[must_use]
    pub fn revealed_secret(&self) -> Option<Secret> {
        self.status.is_terminal().then_some(self.secret)
    }

    fn next_attempt_number(&self) -> NonZeroU32 {
        NonZeroU32::MIN.saturating_add(self.attempts_used())
    }
}

/// Base-10 with an optional sign. Surrounding whitespace is not stripped.
fn parse_guess(raw: &str) -> Result<i64, GuessError> {
    raw.parse().map_err(|_| GuessError::InvalidInput {
        input: raw.to_string(),
    })
}
