//! # autosched-log
//!
//! Bounded-retention observability log for the autosched decision engine:
//! structured write-once records of every decision, an injected key-value
//! store interface, and a periodic retention sweep.
//!
//! ## Modules
//!
//! - [`record`] — record shapes and the [`record::build_record`] builder
//! - [`store`] — [`store::LogStore`] trait and the in-memory implementation
//! - [`sweep`] — retention sweep with fail-open timestamp recovery
//! - [`error`] — store error types

pub mod error;
pub mod record;
pub mod store;
pub mod sweep;

pub use error::{StoreError, StoreResult};
pub use record::{build_record, log_key, LogData, ObservabilityRecord, LOG_KEY_PREFIX};
pub use store::{save, LogStore, MemoryStore};
pub use sweep::{sweep, SweepReport, DEFAULT_DAYS_TO_KEEP};
