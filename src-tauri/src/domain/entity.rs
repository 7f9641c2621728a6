//! Domain Layer - Core Record Trait
//!
//! Every persisted value is a named record owned by one user and stored
//! under `"{kind}:{user_id}"`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::UserId;

/// Core trait for all per-user records
pub trait Record: Sized + Send + Sync + Clone {
    /// Key prefix, e.g. `notes`
    const KIND: &'static str;

    /// Serialized payload stored under the record's key
    type Value: Serialize + DeserializeOwned + Send + Sync;

    /// The user the record belongs to
    fn owner(&self) -> UserId;

    fn value(&self) -> &Self::Value;

    fn from_value(owner: UserId, value: Self::Value) -> Self;

    /// Storage key for `owner`'s record of this kind
    fn key_for(owner: UserId) -> String {
        format!("{}:{}", Self::KIND, owner)
    }
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
