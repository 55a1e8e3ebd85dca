//! Posture Types

use serde::{Deserialize, Serialize};

use crate::logic::level::AlertLevel;

/// Coarse national status shown at the top of the briefing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NationalPosture {
    Stable,
    UnderStress,
    Critical,
}

impl NationalPosture {
    pub fn as_str(&self) -> &'static str {
        match self {
            NationalPosture::Stable => "STABLE",
            NationalPosture::UnderStress => "UNDER_STRESS",
            NationalPosture::Critical => "CRITICAL",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            NationalPosture::Stable => "#10b981",
            NationalPosture::UnderStress => "#f97316",
            NationalPosture::Critical => "#ef4444",
        }
    }

    /// Standing summary sentence for the briefing header.
    pub fn summary(&self) -> &'static str {
        match self {
            NationalPosture::Stable => {
                "The national situation is stable. No critical indicator is reported; proactive monitoring continues."
            }
            NationalPosture::UnderStress => {
                "The national situation is under stress. Several indicators require reinforced observation; corrective actions are being considered."
            }
            NationalPosture::Critical => {
                "The national situation is CRITICAL. Elevated alert signals require immediate attention; protocols are being reassessed."
            }
        }
    }
}

/// Leveled alert for the command screens, with the concrete reasons
/// that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandAlert {
    pub level: AlertLevel,
    pub reasons: Vec<String>,
}

/// Counters the briefing screen renders as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingKpis {
    pub contributions_validated_24h: u32,
    pub contributions_validated_7d: u32,
    pub missions_pending: u32,
    pub missions_in_progress: u32,
    pub missions_completed_7d: u32,
    pub missions_failed_7d: u32,
}

/// Full posture assessment, computed in one pass over the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostureReport {
    pub posture: NationalPosture,
    pub summary: &'static str,
    pub alert: CommandAlert,
    pub kpis: BriefingKpis,
}
