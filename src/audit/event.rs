//! Audit Event Types
//!
//! Immutable, timestamped records of who did what. These are the only
//! records the engine ever writes back through the store boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ACTION KINDS
// ============================================================================

/// Kinds of auditable actions around the analysis surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditAction {
    /// A weak-signal scan was computed for a command screen.
    WeakSignalScan,
    /// A preventive rule scan was computed.
    PreventiveScan,
    /// A chief opened a cross-check ticket.
    CrossCheckOpened,
    /// A chief took charge of a cross-check ticket.
    CrossCheckTaken,
    /// A cross-check ticket was closed.
    CrossCheckClosed,
    /// A cross-check ticket was escalated into a mission.
    CrossCheckEscalated,
    /// A chief validated a contribution.
    ContributionValidated,
    /// A chief rejected a contribution.
    ContributionRejected,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::WeakSignalScan => "weak_signal_scan",
            AuditAction::PreventiveScan => "preventive_scan",
            AuditAction::CrossCheckOpened => "crosscheck_opened",
            AuditAction::CrossCheckTaken => "crosscheck_taken",
            AuditAction::CrossCheckClosed => "crosscheck_closed",
            AuditAction::CrossCheckEscalated => "crosscheck_escalated",
            AuditAction::ContributionValidated => "contribution_validated",
            AuditAction::ContributionRejected => "contribution_rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "weak_signal_scan" => Some(AuditAction::WeakSignalScan),
            "preventive_scan" => Some(AuditAction::PreventiveScan),
            "crosscheck_opened" => Some(AuditAction::CrossCheckOpened),
            "crosscheck_taken" => Some(AuditAction::CrossCheckTaken),
            "crosscheck_closed" => Some(AuditAction::CrossCheckClosed),
            "crosscheck_escalated" => Some(AuditAction::CrossCheckEscalated),
            "contribution_validated" => Some(AuditAction::ContributionValidated),
            "contribution_rejected" => Some(AuditAction::ContributionRejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// AUDIT EVENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: Uuid,
    /// Acting user, when one is known; system-triggered scans carry none.
    pub user: Option<String>,
    pub action: AuditAction,
    /// Free-text description of the action's target.
    pub target: String,
    pub timestamp: DateTime<Utc>,
}

impl AuditEvent {
    pub fn new(
        user: Option<&str>,
        action: AuditAction,
        target: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: user.map(str::to_string),
            action,
            target: target.into(),
            timestamp,
        }
    }

    /// One line of JSONL.
    pub fn to_jsonl(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
