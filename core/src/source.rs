//! Where secrets come from.

use guess_types::Secret;

/// Supplies the secret for each new session.
///
/// Implementations must return values drawn uniformly from [`Secret::RANGE`]
/// unless they exist to pin a secret for tests.
pub trait SecretSource {
    fn next_secret(&mut self) -> Secret;
}

impl<S: SecretSource + ?Sized> SecretSource for Box<S> {
    fn next_secret(&mut self) -> Secret {
        (**self).next_secret()
    }
}

/// Uniform draw from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl SecretSource for ThreadRandom {
    fn next_secret(&mut self) -> Secret {
        Secret::clamped(rand::random_range(Secret::RANGE))
    }
}

/// Always yields the same secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSecret(pub Secret);

impl SecretSource for FixedSecret {
    fn next_secret(&mut self) -> Secret {
        self.0
    }
}

/// Replays a list of secrets in order, starting over after the last one.
#[derive(Debug, Clone)]
pub struct SecretSequence {
    secrets: Vec<Secret>,
    next: usize,
}

impl SecretSequence {
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn new(secrets: Vec<Secret>) -> Option<Self> {
        if secrets.is_empty() {
            return None;
        }
        Some(Self { secrets, next: 0 })
    }
}

impl SecretSource for SecretSequence {
    fn next_secret(&mut self) -> Secret {
        let secret = self.secrets[self.next];
        self.next = (self.next + 1) % self.secrets.len();
        secret
    }
}
