//! Infrastructure layer: Record Store boundary, clock, config, dashboard refresh.

pub mod clock;
pub mod config;
pub mod fixtures;
pub mod monitor;
pub mod record_store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, MonitorConfig};
pub use monitor::{DashboardSnapshot, HealthMonitor, MonitorError, SnapshotScope};
pub use record_store::{InMemoryRecordStore, RecordStore, RecordStoreError};
