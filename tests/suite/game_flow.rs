//! Whole games played through key events.

use crossterm::event::KeyCode;

use guess_engine::{Feedback, GuessError, Phase, SessionStatus, Verdict};
use guess_tui::apply_event;

use crate::common::{app_with_secret, ctrl_c, limit, press, secret, type_line};

#[test]
fn final_attempt_match_wins_over_exhaustion() {
    let mut app = app_with_secret(42, limit(3));
    let mut feedback = Vec::new();
    for raw in ["10", "90", "abc", "42"] {
        assert!(!type_line(&mut app, raw));
        feedback.push(app.feedback().expect("every submit yields feedback"));
    }

    assert_eq!(
        feedback,
        vec![
            Feedback::Verdict(Verdict::Higher),
            Feedback::Verdict(Verdict::Lower),
            Feedback::InvalidInput,
            Feedback::Verdict(Verdict::Won { secret: secret(42) }),
        ]
    );
    assert_eq!(app.session().status(), SessionStatus::Won);
    assert_eq!(app.session().attempts_used(), 3);
    assert_eq!(app.phase(), Phase::GameOver);
}

#[test]
fn stray_space_does_not_end_a_one_guess_game() {
    let mut app = app_with_secret(50, limit(1));
    type_line(&mut app, " 42");
    assert_eq!(app.feedback(), Some(Feedback::InvalidInput));
    assert_eq!(app.session().attempts_used(), 0);
    assert_eq!(app.phase(), Phase::Guessing);

    type_line(&mut app, "50");
    assert_eq!(
        app.feedback(),
        Some(Feedback::Verdict(Verdict::Won { secret: secret(50) }))
    );
}

#[test]
fn bisecting_finds_any_secret_within_seven_guesses() {
    for s in [1, 2, 37, 50, 64, 99, 100] {
        let mut app = app_with_secret(s, limit(7));
        let (mut lo, mut hi) = (1_i64, 100_i64);
        loop {
            let mid = i64::midpoint(lo, hi);
            type_line(&mut app, &mid.to_string());
            match app.feedback() {
                Some(Feedback::Verdict(Verdict::Higher)) => lo = mid + 1,
                Some(Feedback::Verdict(Verdict::Lower)) => hi = mid - 1,
                Some(Feedback::Verdict(Verdict::Won { secret: found })) => {
                    assert_eq!(found, secret(s));
                    break;
                }
                other => panic!("unexpected feedback {other:?} for secret {s}"),
            }
        }
        assert!(app.session().attempts_used() <= 7);
    }
}

#[test]
fn guesses_after_a_win_are_rejected_by_the_session() {
    let mut app = app_with_secret(5, limit(10));
    type_line(&mut app, "5");

    // The TUI routes keys to replay/quit once the game is over, so go to the
    // session directly to check it refuses further guesses.
    let mut session = app.session().clone();
    assert_eq!(session.submit_guess("5"), Err(GuessError::SessionClosed));
    assert_eq!(session.submit_guess("6"), Err(GuessError::SessionClosed));
    assert_eq!(session.attempts_used(), 1);
}

#[test]
fn submitting_through_the_app_after_game_over_reports_closed() {
    let mut app = app_with_secret(5, limit(1));
    type_line(&mut app, "9");
    assert_eq!(
        app.feedback(),
        Some(Feedback::Verdict(Verdict::Lost { secret: secret(5) }))
    );

    app.enter_text("5");
    assert_eq!(app.submit(), Feedback::SessionClosed);
    assert_eq!(app.session().status(), SessionStatus::Lost);
}

#[test]
fn quitting_mid_game_leaves_session_untouched() {
    let mut app = app_with_secret(70, limit(5));
    type_line(&mut app, "20");
    apply_event(&mut app, press(KeyCode::Char('3')));

    assert!(apply_event(&mut app, ctrl_c()));
    assert!(app.should_quit());
    assert_eq!(app.session().attempts_used(), 1);
    assert_eq!(app.session().status(), SessionStatus::InProgress);
    assert_eq!(app.draft_text(), "3");
}

#[test]
fn esc_quits_from_either_phase() {
    let mut guessing = app_with_secret(70, limit(5));
    assert!(apply_event(&mut guessing, press(KeyCode::Esc)));

    let mut over = app_with_secret(70, limit(5));
    type_line(&mut over, "70");
    assert!(apply_event(&mut over, press(KeyCode::Esc)));
}
