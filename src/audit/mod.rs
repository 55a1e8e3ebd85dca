//! Audit Trail
//!
//! Append-only boundary for portal audit events. Once written, an
//! event can never be updated or deleted: neither the store trait nor
//! the file recorder exposes any mutation beyond append.

pub mod event;
pub mod recorder;

pub use event::{AuditAction, AuditEvent};
pub use recorder::AuditRecorder;
