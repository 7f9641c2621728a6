//! Host Session
//!
//! Identity, privilege and anti-forgery checks the gateway relies on.

use crate::domain::UserId;
use super::token::TokenIssuer;

/// Action every widget token is scoped to
pub const TOKEN_ACTION: &str = "tasks_notes_ajax";

pub trait HostSession: Send + Sync {
    fn current_user(&self) -> UserId;

    fn has_administrator_privilege(&self, user: UserId) -> bool;

    fn issue_token(&self) -> String;

    fn verify_token(&self, token: &str) -> bool;
}

/// Single local user, as configured for this install
pub struct LocalSession {
    user: UserId,
    administrator: bool,
    tokens: TokenIssuer,
}

impl LocalSession {
    pub fn new(user: UserId, administrator: bool, tokens: TokenIssuer) -> Self {
        Self {
            user,
            administrator,
            tokens,
        }
    }
}

impl HostSession for LocalSession {
    fn current_user(&self) -> UserId {
        self.user
    }

    fn has_administrator_privilege(&self, user: UserId) -> bool {
        self.administrator && user == self.user
    }

    fn issue_token(&self) -> String {
        self.tokens
            .issue(TOKEN_ACTION, self.user, chrono::Utc::now().timestamp())
    }

    fn verify_token(&self, token: &str) -> bool {
        self.tokens
            .verify(token, TOKEN_ACTION, self.user, chrono::Utc::now().timestamp())
            .is_some()
    }
}
