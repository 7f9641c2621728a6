//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod sqlite_store;
mod record_repo;


pub use traits::RecordStore;
pub use db::{init_db, DbState};
pub use sqlite_store::SqliteRecordStore;
pub use record_repo::RecordRepository;
