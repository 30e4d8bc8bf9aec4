//! Input handling for Guess TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use guess_engine::{App, Phase};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads crossterm events on a blocking thread and queues them for the frame loop.
///
/// Only the event source lives off-thread; [`handle_events`] applies events to
/// the `App` on the caller's thread, in arrival order.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input into `app`. Returns `true` when the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply a single terminal event. Returns `true` when the app should quit.
pub fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.request_quit();
                return true;
            }

            match app.phase() {
                Phase::Guessing => handle_guessing(app, key),
                Phase::GameOver => handle_game_over(app, key),
            }
        }
        Event::Paste(text) => {
            if app.phase() == Phase::Guessing {
                app.enter_text(&text);
            }
        }
        _ => {}
    }
    app.should_quit()
}

fn handle_guessing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let feedback = app.submit();
            debug!(?feedback, "Guess submitted");
        }
        KeyCode::Esc => app.request_quit(),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Delete => app.delete_char_forward(),
        KeyCode::Left => app.move_cursor_left(),
        KeyCode::Right => app.move_cursor_right(),
        KeyCode::Home => app.move_cursor_home(),
        KeyCode::End => app.move_cursor_end(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.enter_char(c);
        }
        _ => {}
    }
}

fn handle_game_over(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => app.new_game(),
        KeyCode::Char('n' | 'N' | 'q' | 'Q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use guess_engine::{AttemptLimit, Feedback, FixedSecret, Secret, UiOptions, Verdict};

    use super::*;

    fn app(limit: AttemptLimit) -> App {
        let secret = Secret::new(42).expect("in range");
        App::new(limit, FixedSecret(secret), UiOptions::default())
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            assert!(!apply_event(app, press(KeyCode::Char(c))));
        }
    }

    #[test]
    fn typing_then_enter_submits_guess() {
        let mut app = app(AttemptLimit::Unbounded);
        type_str(&mut app, "17");
        assert_eq!(app.draft_text(), "17");
        assert!(!apply_event(&mut app, press(KeyCode::Enter)));
        assert_eq!(app.feedback(), Some(Feedback::Verdict(Verdict::Higher)));
        assert_eq!(app.draft_text(), "");
    }

    #[test]
    fn editing_keys_change_draft() {
        let mut app = app(AttemptLimit::Unbounded);
        type_str(&mut app, "123");
        apply_event(&mut app, press(KeyCode::Left));
        apply_event(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.draft_text(), "13");
        apply_event(&mut app, press(KeyCode::Home));
        apply_event(&mut app, press(KeyCode::Delete));
        assert_eq!(app.draft_text(), "3");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app(AttemptLimit::Unbounded);
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(!apply_event(&mut app, release));
        assert_eq!(app.draft_text(), "");
    }

    #[test]
    fn esc_and_ctrl_c_quit() {
        let mut app1 = app(AttemptLimit::Unbounded);
        assert!(apply_event(&mut app1, press(KeyCode::Esc)));
        assert!(app1.should_quit());

        let mut app2 = app(AttemptLimit::Unbounded);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(apply_event(&mut app2, ctrl_c));
        assert_eq!(app2.draft_text(), "");
    }

    #[test]
    fn paste_inserts_into_draft() {
        let mut app = app(AttemptLimit::Unbounded);
        apply_event(&mut app, Event::Paste("4\n2".to_string()));
        assert_eq!(app.draft_text(), "42");
    }

    #[test]
    fn game_over_y_replays_and_n_quits() {
        let mut app = app(AttemptLimit::Unbounded);
        type_str(&mut app, "42");
        apply_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.phase(), Phase::GameOver);

        // Digits are not taken as guesses once the game is over.
        apply_event(&mut app, press(KeyCode::Char('5')));
        assert_eq!(app.draft_text(), "");

        assert!(!apply_event(&mut app, press(KeyCode::Char('y'))));
        assert_eq!(app.phase(), Phase::Guessing);
        assert_eq!(app.session().attempts_used(), 0);
        assert_eq!(app.tally().won, 1);

        type_str(&mut app, "42");
        apply_event(&mut app, press(KeyCode::Enter));
        assert!(apply_event(&mut app, press(KeyCode::Char('n'))));
    }

    #[test]
    fn losing_also_offers_replay() {
        let limit = AttemptLimit::try_from(1_u32).expect("positive");
        let mut app = app(limit);
        type_str(&mut app, "1");
        apply_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.phase(), Phase::GameOver);
        apply_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.phase(), Phase::Guessing);
        assert_eq!(app.tally().lost, 1);
    }
}
