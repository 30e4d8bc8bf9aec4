//! Replaying games within one run.

use crossterm::event::KeyCode;

use guess_engine::{AttemptLimit, Feedback, Phase, SecretSequence, Tally, Verdict};
use guess_tui::apply_event;

use crate::common::{app_with_source, limit, press, secret, type_line};

#[test]
fn each_replay_draws_a_new_secret() {
    let source =
        SecretSequence::new(vec![secret(10), secret(20), secret(30)]).expect("non-empty");
    let mut app = app_with_source(source, AttemptLimit::Unbounded);

    for expected in [10, 20, 30, 10] {
        type_line(&mut app, &expected.to_string());
        assert_eq!(
            app.feedback(),
            Some(Feedback::Verdict(Verdict::Won {
                secret: secret(expected)
            }))
        );
        assert!(!apply_event(&mut app, press(KeyCode::Char('y'))));
        assert_eq!(app.phase(), Phase::Guessing);
    }

    assert_eq!(app.tally(), Tally { won: 4, lost: 0 });
}

#[test]
fn tally_counts_wins_and_losses_across_games() {
    let source = SecretSequence::new(vec![secret(50)]).expect("non-empty");
    let mut app = app_with_source(source, limit(2));

    // Lose.
    type_line(&mut app, "1");
    type_line(&mut app, "2");
    assert_eq!(
        app.feedback(),
        Some(Feedback::Verdict(Verdict::Lost { secret: secret(50) }))
    );
    apply_event(&mut app, press(KeyCode::Enter));

    // Win on the last attempt.
    type_line(&mut app, "99");
    type_line(&mut app, "50");
    assert_eq!(
        app.feedback(),
        Some(Feedback::Verdict(Verdict::Won { secret: secret(50) }))
    );

    assert_eq!(app.tally(), Tally { won: 1, lost: 1 });
    assert_eq!(app.tally().played(), 2);
}

#[test]
fn replay_keeps_the_configured_limit() {
    let source = SecretSequence::new(vec![secret(8)]).expect("non-empty");
    let mut app = app_with_source(source, limit(4));
    type_line(&mut app, "8");
    apply_event(&mut app, press(KeyCode::Char('y')));

    assert_eq!(app.session().attempts_limit(), limit(4));
    assert_eq!(app.session().attempts_remaining(), Some(4));
}
