//! Application state for Guess.
//!
//! This crate contains the App state machine without TUI dependencies. The
//! TUI reads it after every input event and redraws; nothing here touches
//! the terminal.

mod input;

use tracing::info;

pub use guess_config::GuessConfig;
pub use guess_core::{
    AttemptLimit, AttemptRecord, FixedSecret, GuessError, GuessSession, Outcome, Secret,
    SecretSequence, SecretSource, SessionStatus, ThreadRandom, Verdict,
};
pub use guess_types::ui::UiOptions;
pub use input::{DRAFT_CHAR_LIMIT, DraftInput};

/// What the player is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Typing guesses.
    Guessing,
    /// Session over; waiting for replay or quit.
    GameOver,
}

/// Response to the most recent submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Verdict(Verdict),
    InvalidInput,
    SessionClosed,
}

impl From<Result<Verdict, GuessError>> for Feedback {
    fn from(result: Result<Verdict, GuessError>) -> Self {
        match result {
            Ok(verdict) => Self::Verdict(verdict),
            Err(GuessError::InvalidInput { .. }) => Self::InvalidInput,
            Err(GuessError::SessionClosed) => Self::SessionClosed,
        }
    }
}

/// Games finished during this run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub won: u32,
    pub lost: u32,
}

impl Tally {
    #[must_use]
    pub fn played(self) -> u32 {
        self.won + self.lost
    }

    fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Won { .. } => self.won += 1,
            Verdict::Lost { .. } => self.lost += 1,
            Verdict::Higher | Verdict::Lower => {}
        }
    }
}

pub struct App {
    session: GuessSession,
    source: Box<dyn SecretSource + Send>,
    limit: AttemptLimit,
    draft: DraftInput,
    feedback: Option<Feedback>,
    tally: Tally,
    ui_options: UiOptions,
    should_quit: bool,
}

impl App {
    pub fn new<S>(limit: AttemptLimit, source: S, ui_options: UiOptions) -> Self
    where
        S: SecretSource + Send + 'static,
    {
        let mut source: Box<dyn SecretSource + Send> = Box::new(source);
        let session = GuessSession::new(limit, &mut source);
        info!(%limit, "Game started");
        Self {
            session,
            source,
            limit,
            draft: DraftInput::default(),
            feedback: None,
            tally: Tally::default(),
            ui_options,
            should_quit: false,
        }
    }

    /// Build from user config with a thread-random secret.
    #[must_use]
    pub fn from_config(config: Option<&GuessConfig>) -> Self {
        let (limit, ui_options) = match config {
            Some(config) => (config.attempts_limit(), config.ui_options()),
            None => (
                GuessConfig::default().attempts_limit(),
                UiOptions::default(),
            ),
        };
        Self::new(limit, ThreadRandom, ui_options)
    }

    // ------------------------------------------------------------------------
    // Game
    // ------------------------------------------------------------------------

    /// Submit the draft as a guess. The draft is cleared whatever the result.
    pub fn submit(&mut self) -> Feedback {
        let raw = self.draft.take_text();
        let result = self.session.submit_guess(&raw);
        let feedback = Feedback::from(result);

        if let Feedback::Verdict(verdict) = feedback
            && verdict.is_final()
        {
            self.tally.record(verdict);
            info!(
                ?verdict,
                attempts = self.session.attempts_used(),
                won = self.tally.won,
                lost = self.tally.lost,
                "Game finished"
            );
        }

        self.feedback = Some(feedback);
        feedback
    }

    /// Replace the session with a fresh one. Allowed at any point.
    pub fn new_game(&mut self) {
        self.session = GuessSession::new(self.limit, &mut self.source);
        self.draft.clear();
        self.feedback = None;
        info!(limit = %self.limit, played = self.tally.played(), "Game started");
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.session.status().is_terminal() {
            Phase::GameOver
        } else {
            Phase::Guessing
        }
    }

    #[must_use]
    pub fn session(&self) -> &GuessSession {
        &self.session
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    #[must_use]
    pub fn tally(&self) -> Tally {
        self.tally
    }

    #[must_use]
    pub fn attempts_limit(&self) -> AttemptLimit {
        self.limit
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    // ------------------------------------------------------------------------
    // Draft editing
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn draft(&self) -> &DraftInput {
        &self.draft
    }

    #[must_use]
    pub fn draft_text(&self) -> &str {
        self.draft.text()
    }

    pub fn enter_char(&mut self, c: char) {
        self.draft.enter_char(c);
    }

    pub fn enter_text(&mut self, text: &str) {
        self.draft.enter_text(text);
    }

    pub fn delete_char(&mut self) {
        self.draft.delete_char();
    }

    pub fn delete_char_forward(&mut self) {
        self.draft.delete_char_forward();
    }

    pub fn move_cursor_left(&mut self) {
        self.draft.move_cursor_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.draft.move_cursor_right();
    }

    pub fn move_cursor_home(&mut self) {
        self.draft.move_cursor_home();
    }

    pub fn move_cursor_end(&mut self) {
        self.draft.move_cursor_end();
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
