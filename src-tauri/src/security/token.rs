//! Anti-forgery Tokens
//!
//! Stateless, time-windowed tokens. A token is a keyed BLAKE3 digest of
//! `(tick, action, user)`; the tick advances every half lifetime and a token
//! is accepted during its own tick and the following one.

use crate::domain::UserId;

const TOKEN_LEN: usize = 10;
const KEY_CONTEXT: &str = "tasks-notes 2024-06 anti-forgery token key";

/// Which window a verified token was issued in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenAge {
    Current,
    Previous,
}

pub struct TokenIssuer {
    key: [u8; 32],
    lifetime_secs: i64,
}

impl TokenIssuer {
    /// `secret` is the per-install secret; lifetimes under 2s are raised to 2s.
    pub fn new(secret: &str, lifetime_secs: u64) -> Self {
        Self {
            key: blake3::derive_key(KEY_CONTEXT, secret.as_bytes()),
            lifetime_secs: i64::try_from(lifetime_secs).unwrap_or(i64::MAX).max(2),
        }
    }

    fn tick(&self, now: i64) -> i64 {
        let half = self.lifetime_secs / 2;
        (now + half - 1).div_euclid(half)
    }

    fn digest(&self, tick: i64, action: &str, user: UserId) -> String {
        let message = format!("{}|{}|{}", tick, action, user);
        let hash = blake3::keyed_hash(&self.key, message.as_bytes());
        hash.to_hex().as_str()[..TOKEN_LEN].to_string()
    }

    pub fn issue(&self, action: &str, user: UserId, now: i64) -> String {
        self.digest(self.tick(now), action, user)
    }

    pub fn verify(&self, token: &str, action: &str, user: UserId, now: i64) -> Option<TokenAge> {
        if token.is_empty() {
            return None;
        }
        let tick = self.tick(now);
        if constant_time_eq(token, &self.digest(tick, action, user)) {
            return Some(TokenAge::Current);
        }
        if constant_time_eq(token, &self.digest(tick - 1, action, user)) {
            return Some(TokenAge::Previous);
        }
        None
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
