//! State-machine invariants checked over deterministic guess sweeps.

use guess_engine::{
    AttemptLimit, GuessError, GuessSession, Outcome, Secret, SessionStatus, Verdict,
};

use crate::common::{limit, secret};

/// Small deterministic generator so sweeps don't depend on the RNG.
fn lcg(seed: &mut u64) -> u64 {
    *seed = seed
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407);
    *seed >> 33
}

fn check_invariants(session: &GuessSession, s: Secret) {
    let history = session.history();
    assert_eq!(history.len() as u32, session.attempts_used());

    for record in history {
        assert_eq!(record.outcome(), Outcome::classify(record.guess(), s));
    }

    let any_correct = history.iter().any(|r| r.outcome() == Outcome::Correct);
    let exhausted = session.attempts_limit().is_reached_by(session.attempts_used());
    let expected = if any_correct {
        SessionStatus::Won
    } else if exhausted {
        SessionStatus::Lost
    } else {
        SessionStatus::InProgress
    };
    assert_eq!(session.status(), expected);
}

#[test]
fn invariants_hold_for_mixed_input() {
    let mut seed = 0x5eed_u64;
    for s in Secret::RANGE.step_by(7) {
        let s = secret(s);
        for lim in [AttemptLimit::Unbounded, limit(1), limit(5), limit(12)] {
            let mut session = GuessSession::with_secret(s, lim);
            for _ in 0..20 {
                let roll = lcg(&mut seed);
                let raw = if roll % 5 == 0 {
                    "not a number".to_string()
                } else {
                    ((roll % 120) as i64 - 10).to_string()
                };

                let before = (session.attempts_used(), session.status());
                let result = session.submit_guess(&raw);

                match result {
                    Err(GuessError::InvalidInput { .. } | GuessError::SessionClosed) => {
                        assert_eq!((session.attempts_used(), session.status()), before);
                    }
                    Ok(Verdict::Lost { secret: revealed }) => {
                        assert_eq!(revealed, s);
                        assert_eq!(session.status(), SessionStatus::Lost);
                    }
                    Ok(Verdict::Won { secret: revealed }) => {
                        assert_eq!(revealed, s);
                        assert_eq!(session.status(), SessionStatus::Won);
                    }
                    Ok(Verdict::Higher | Verdict::Lower) => {
                        assert_eq!(session.status(), SessionStatus::InProgress);
                    }
                }
                check_invariants(&session, s);
            }
        }
    }
}

#[test]
fn exactly_n_misses_lose_on_the_nth() {
    for n in 1..=10 {
        let mut session = GuessSession::with_secret(secret(100), limit(n));
        for i in 1..n {
            assert_eq!(session.submit_guess(&i.to_string()), Ok(Verdict::Higher));
        }
        assert_eq!(
            session.submit_guess("0"),
            Ok(Verdict::Lost {
                secret: secret(100)
            })
        );
    }
}
