//! Verification challenges.
//!
//! A challenge is a 10 character token over `[a-zA-Z0-9]`. It is an
//! anti-guessing nonce, not a secret: the generator is a seeded `StdRng`
//! shared by the whole process and seeded once from the wall clock.

use parking_lot::Mutex;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of characters in a challenge.
pub const CHALLENGE_LENGTH: usize = 10;

/// One-shot verification token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge(String);

impl Challenge {
    pub(crate) fn from_token(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact byte equality. No trimming, no case folding.
    pub fn matches(&self, echoed: &[u8]) -> bool {
        echoed == self.0.as_bytes()
    }
}

/// Process-wide challenge source.
#[derive(Debug)]
pub struct ChallengeGenerator {
    rng: Mutex<StdRng>,
}

impl ChallengeGenerator {
    /// Seed from the current time.
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::from_seed(seed)
    }

    /// Fixed seed, for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn generate(&self) -> Challenge {
        let mut rng = self.rng.lock();
        let token: String = (0..CHALLENGE_LENGTH)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect();
        Challenge::from_token(token)
    }
}

impl Default for ChallengeGenerator {
    fn default() -> Self {
        Self::from_time()
    }
}
