//! Reporting Store
//!
//! The engine's window onto the portal's persistence layer. Detection
//! is read-only; the single write this boundary exposes is the
//! append-only audit record.

pub mod memory;
pub mod snapshot;
pub mod sqlite;

pub use memory::MemoryStore;
pub use snapshot::ActivitySnapshot;
pub use sqlite::SqliteStore;

use chrono::{DateTime, Utc};

use crate::audit::AuditEvent;
use crate::error::StoreResult;
use crate::models::{Agent, Contribution, Mission};

/// Query capabilities the detectors need. Failures must propagate to
/// the caller unchanged — implementations never substitute an empty
/// result for a failed read.
pub trait DataStore {
    /// Contributions created at or after `t`, with the owning agent's
    /// service name joined in.
    fn contributions_since(&self, t: DateTime<Utc>) -> StoreResult<Vec<Contribution>>;

    /// Every contribution on record.
    fn contributions_all(&self) -> StoreResult<Vec<Contribution>>;

    fn missions_all(&self) -> StoreResult<Vec<Mission>>;

    fn agents_all(&self) -> StoreResult<Vec<Agent>>;

    /// Most recent audit events, newest first.
    fn audit_recent(&self, limit: usize) -> StoreResult<Vec<AuditEvent>>;

    /// Append one audit event. There is no update and no delete.
    fn record_audit(&self, event: &AuditEvent) -> StoreResult<()>;
}
