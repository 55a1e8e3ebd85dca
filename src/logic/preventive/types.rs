//! Preventive-Alert Types
//!
//! Data structures only, no detection logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logic::level::AlertLevel;

// ============================================================================
// CATEGORY & STATUS
// ============================================================================

/// Domain category of a preventive alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertCategory {
    Social,
    Armed,
    Economic,
    Institutional,
}

impl AlertCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertCategory::Social => "SOCIAL",
            AlertCategory::Armed => "ARMED",
            AlertCategory::Economic => "ECONOMIC",
            AlertCategory::Institutional => "INSTITUTIONAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Active,
    Watched,
    Closed,
}

impl Default for AlertStatus {
    fn default() -> Self {
        AlertStatus::Active
    }
}

// ============================================================================
// PREVENTIVE ALERT
// ============================================================================

/// One triggered rule. Ephemeral: recomputed on every scan, never
/// persisted, compared by structure only. The justification embeds the
/// concrete counts and thresholds that fired the rule so the record is
/// self-explaining on any downstream surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreventiveAlert {
    pub category: AlertCategory,
    /// Free-text zone label; "NATIONAL" when no service is involved,
    /// "UNKNOWN" when an agent's service record is unusable.
    pub zone: String,
    pub level: AlertLevel,
    pub justification: String,
    /// Short aggregated source strings. Agent identities are reduced to
    /// their matricule.
    pub evidence: Vec<String>,
    pub detected_at: DateTime<Utc>,
    pub status: AlertStatus,
}

impl PreventiveAlert {
    pub fn new(
        category: AlertCategory,
        zone: impl Into<String>,
        level: AlertLevel,
        justification: impl Into<String>,
        evidence: Vec<String>,
        detected_at: DateTime<Utc>,
    ) -> Self {
        Self {
            category,
            zone: zone.into(),
            level,
            justification: justification.into(),
            evidence,
            detected_at,
            status: AlertStatus::default(),
        }
    }
}
