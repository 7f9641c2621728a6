//! Repository Layer - Core Traits
//!
//! Defines the abstract key-value interface records are persisted through.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::DomainResult;

/// Generic per-key persistent store
///
/// Values are opaque JSON text. A write replaces whatever was stored under
/// the key.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the value stored under `key`
    async fn read_record(&self, key: &str) -> DomainResult<Option<String>>;

    /// Overwrite the value stored under `key`
    async fn write_record(&self, key: &str, value: &str) -> DomainResult<()>;
}
