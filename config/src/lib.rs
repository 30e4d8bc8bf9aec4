//! Configuration for Guess.
//!
//! Read from `~/.guess/config.toml`:
//!
//! ```toml
//! [game]
//! attempts_limit = 7          # or "unbounded"
//!
//! [app]
//! ascii_only = false
//! high_contrast = false
//! ```
//!
//! `GUESS_ATTEMPTS_LIMIT` overrides `[game] attempts_limit`.

use std::{env, fs, io, path::Path, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

use guess_types::AttemptLimit;
use guess_types::ui::UiOptions;

pub const ATTEMPTS_LIMIT_ENV: &str = "GUESS_ATTEMPTS_LIMIT";

#[derive(Debug, Default, Deserialize)]
pub struct GuessConfig {
    pub app: Option<AppConfig>,
    pub game: Option<GameConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for arrows and the input prompt.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub attempts_limit: AttemptLimit,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl GuessConfig {
    /// Load the user config. `Ok(None)` when there is no home dir or no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
            })
            .unwrap_or_default()
    }

    /// Attempt limit after applying `GUESS_ATTEMPTS_LIMIT`.
    #[must_use]
    pub fn attempts_limit(&self) -> AttemptLimit {
        self.attempts_limit_with_override(env::var(ATTEMPTS_LIMIT_ENV).ok().as_deref())
    }

    /// An unparseable override is logged and ignored.
    #[must_use]
    pub fn attempts_limit_with_override(&self, raw: Option<&str>) -> AttemptLimit {
        let from_file = self
            .game
            .as_ref()
            .map(|game| game.attempts_limit)
            .unwrap_or_default();

        match raw.map(str::parse::<AttemptLimit>) {
            Some(Ok(limit)) => limit,
            Some(Err(err)) => {
                tracing::warn!("Ignoring {ATTEMPTS_LIMIT_ENV}: {err}");
                from_file
            }
            None => from_file,
        }
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".guess").join("config.toml"))
}
