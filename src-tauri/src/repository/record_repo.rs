//! Record Repository
//!
//! Typed access to per-user records on top of any `RecordStore`.

use crate::domain::{DomainResult, Record, UserId};
use super::traits::RecordStore;

pub struct RecordRepository<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> RecordRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Raw JSON text stored for `owner`'s record of kind `R`
    pub async fn load_raw<R: Record>(&self, owner: UserId) -> DomainResult<Option<String>> {
        self.store.read_record(&R::key_for(owner)).await
    }

    pub async fn load<R: Record>(&self, owner: UserId) -> DomainResult<Option<R>> {
        match self.load_raw::<R>(owner).await? {
            Some(raw) => {
                let value = serde_json::from_str::<R::Value>(&raw)?;
                Ok(Some(R::from_value(owner, value)))
            }
            None => Ok(None),
        }
    }

    /// Overwrite the owner's record with `record`
    pub async fn save<R: Record>(&self, record: &R) -> DomainResult<()> {
        let raw = serde_json::to_string(record.value())?;
        self.store.write_record(&R::key_for(record.owner()), &raw).await
    }
}
