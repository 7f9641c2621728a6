//! Host Security
//!
//! Local stand-ins for the host's session, authorization and request-forgery
//! protection.

mod session;
mod token;

pub use session::{HostSession, LocalSession};
pub use token::TokenIssuer;
