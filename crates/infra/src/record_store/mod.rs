//! Record Store boundary.
//!
//! The document database holding inventory records is external; this module
//! defines the facility-scoped interface the monitor reads snapshots through,
//! plus an in-memory implementation for tests/dev.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryRecordStore;
pub use r#trait::{RecordStore, RecordStoreError};
