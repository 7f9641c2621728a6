//! Gateway Errors
//!
//! Only request-aborting failures are errors. Validation problems are
//! reported as a failed `SaveResponse` instead.

use crate::domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Anti-forgery token missing or not valid for this session
    #[error("Security check failed")]
    Authentication,
    /// Caller lacks administrator privilege
    #[error("Insufficient permissions")]
    Permission,
    #[error("Storage error: {0}")]
    Storage(#[from] DomainError),
}
