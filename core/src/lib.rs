//! Core state machine and domain logic for Guess.
//!
//! [`GuessSession`] is the whole game: it owns the secret and history and
//! moves between [`SessionStatus`] states only through
//! [`GuessSession::submit_guess`]. Randomness comes in through
//! [`SecretSource`] so a session can be built deterministically.

mod session;
mod source;

pub use guess_types::{
    AttemptLimit, AttemptRecord, GuessError, Outcome, Secret, SessionStatus, Verdict,
};
pub use session::GuessSession;
pub use source::{FixedSecret, SecretSequence, SecretSource, ThreadRandom};
