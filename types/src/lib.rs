//! Core domain types for Guess.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod attempt;
pub mod ui;

pub use attempt::{AttemptRecord, GuessError, Outcome, SessionStatus, Verdict};

use std::fmt;
use std::num::NonZeroU32;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// Secret
// ============================================================================

/// The number the player is trying to find. Always within [`Secret::RANGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secret(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("secret {0} is outside {min}..={max}", min = Secret::MIN, max = Secret::MAX)]
pub struct SecretOutOfRange(pub u32);

impl Secret {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;
    pub const RANGE: RangeInclusive<u32> = Self::MIN..=Self::MAX;

    pub const fn new(value: u32) -> Result<Self, SecretOutOfRange> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(SecretOutOfRange(value))
        }
    }

    /// Pins `value` into range. For sources that already draw from [`Secret::RANGE`].
    #[must_use]
    pub const fn clamped(value: u32) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Secret {
    type Error = SecretOutOfRange;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// ============================================================================
// AttemptLimit
// ============================================================================

/// How many guesses a session allows before the player loses.
///
/// Parses from `"unbounded"` (also `"none"` / `"off"`) or a positive integer:
///
/// ```toml
/// attempts_limit = 7
/// attempts_limit = "unbounded"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "RawAttemptLimit")]
pub enum AttemptLimit {
    #[default]
    Unbounded,
    Max(NonZeroU32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttemptLimitError {
    #[error("attempt limit must be positive")]
    Zero,
    #[error("invalid attempt limit {0:?}: expected a positive integer or \"unbounded\"")]
    Invalid(String),
}

impl AttemptLimit {
    #[must_use]
    pub const fn max(self) -> Option<NonZeroU32> {
        match self {
            Self::Unbounded => None,
            Self::Max(n) => Some(n),
        }
    }

    /// True once `used` attempts exhaust the limit.
    #[must_use]
    pub const fn is_reached_by(self, used: u32) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Max(n) => used >= n.get(),
        }
    }
}

impl TryFrom<u32> for AttemptLimit {
    type Error = AttemptLimitError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        NonZeroU32::new(value)
            .map(Self::Max)
            .ok_or(AttemptLimitError::Zero)
    }
}

impl FromStr for AttemptLimit {
    type Err = AttemptLimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "unbounded" | "none" | "off" => return Ok(Self::Unbounded),
            _ => {}
        }
        let n: u32 = trimmed
            .parse()
            .map_err(|_| AttemptLimitError::Invalid(trimmed.to_string()))?;
        Self::try_from(n)
    }
}

impl fmt::Display for AttemptLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("unbounded"),
            Self::Max(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAttemptLimit {
    Count(i64),
    Word(String),
}

impl TryFrom<RawAttemptLimit> for AttemptLimit {
    type Error = AttemptLimitError;

    fn try_from(raw: RawAttemptLimit) -> Result<Self, Self::Error> {
        match raw {
            RawAttemptLimit::Count(n) => match u32::try_from(n) {
                Ok(n) => Self::try_from(n),
                Err(_) if n <= 0 => Err(AttemptLimitError::Zero),
                Err(_) => Err(AttemptLimitError::Invalid(n.to_string())),
            },
            RawAttemptLimit::Word(word) => word.parse(),
        }
    }
}
