//! Shared test utilities and fixtures

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use guess_engine::{App, AttemptLimit, FixedSecret, Secret, SecretSource, UiOptions};
use guess_tui::apply_event;

pub fn secret(value: u32) -> Secret {
    Secret::new(value).expect("test secret in range")
}

pub fn limit(n: u32) -> AttemptLimit {
    AttemptLimit::try_from(n).expect("positive limit")
}

pub fn app_with_secret(value: u32, limit: AttemptLimit) -> App {
    App::new(limit, FixedSecret(secret(value)), UiOptions::default())
}

pub fn app_with_source<S>(source: S, limit: AttemptLimit) -> App
where
    S: SecretSource + Send + 'static,
{
    App::new(limit, source, UiOptions::default())
}

pub fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl_c() -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
}

/// Type `text` and press Enter, the way a player would. Returns the quit flag.
pub fn type_line(app: &mut App, text: &str) -> bool {
    for c in text.chars() {
        apply_event(app, press(KeyCode::Char(c)));
    }
    apply_event(app, press(KeyCode::Enter))
}
