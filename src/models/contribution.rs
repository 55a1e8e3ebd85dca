//! Contribution model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a field report inside the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributionStatus {
    Draft,
    Submitted,
    Validated,
    Rejected,
}

impl ContributionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionStatus::Draft => "DRAFT",
            ContributionStatus::Submitted => "SUBMITTED",
            ContributionStatus::Validated => "VALIDATED",
            ContributionStatus::Rejected => "REJECTED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "DRAFT" => Some(ContributionStatus::Draft),
            "SUBMITTED" => Some(ContributionStatus::Submitted),
            "VALIDATED" => Some(ContributionStatus::Validated),
            "REJECTED" => Some(ContributionStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContributionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A field report submitted by an agent — the primary unit of raw
/// intelligence input. Title and content are immutable once created;
/// only the status moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub status: ContributionStatus,
    /// 1 (low) ..= 4 (critical), mid-range by default.
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    /// Set when a chief validated or rejected the report.
    pub validated_at: Option<DateTime<Utc>>,
    pub agent_id: i64,
    /// Owning agent's service name, denormalized by the store's join.
    pub service: Option<String>,
}

impl Contribution {
    /// The lowercased text body the tokenizer works on.
    pub fn analysis_text(&self) -> String {
        format!("{} {}", self.title, self.content).to_lowercase()
    }
}
