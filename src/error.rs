//! Error handling
//!
//! Data-access failures must reach the caller unchanged: an empty scan
//! result means "no signals found", which is not the same thing as
//! "could not compute".

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised by the persistence collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying store is unreachable or rejected the connection.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A query failed mid-flight.
    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),

    /// A stored row could not be decoded into an engine record.
    #[error("corrupt row in {table}: {detail}")]
    CorruptRow { table: &'static str, detail: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn corrupt(table: &'static str, detail: impl Into<String>) -> Self {
        StoreError::CorruptRow {
            table,
            detail: detail.into(),
        }
    }
}
