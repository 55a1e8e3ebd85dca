//! Mission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl MissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionStatus::Pending => "PENDING",
            MissionStatus::InProgress => "IN_PROGRESS",
            MissionStatus::Completed => "COMPLETED",
            MissionStatus::Failed => "FAILED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(MissionStatus::Pending),
            "IN_PROGRESS" => Some(MissionStatus::InProgress),
            "COMPLETED" => Some(MissionStatus::Completed),
            "FAILED" => Some(MissionStatus::Failed),
            _ => None,
        }
    }

    /// Still waiting on the field.
    pub fn is_open(&self) -> bool {
        matches!(self, MissionStatus::Pending | MissionStatus::InProgress)
    }
}

/// A mission assigned to an agent by a chief. The detectors only read
/// missions for acceleration/failure signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: i64,
    pub title: String,
    pub status: MissionStatus,
    /// 1 (low) ..= 4 (critical).
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub due_at: Option<DateTime<Utc>>,
    pub agent_id: i64,
}
