//! Posture Assessment
//!
//! Pure pass over the activity snapshot. Thresholds here are the
//! standing operating values of the briefing screens.

use chrono::{DateTime, Duration, Utc};

use super::types::{BriefingKpis, CommandAlert, NationalPosture, PostureReport};
use crate::logic::level::AlertLevel;
use crate::models::{ContributionStatus, MissionStatus};
use crate::store::ActivitySnapshot;

// Posture floors.
const CRITICAL_FAILED_MISSIONS_7D: u32 = 2;
const CRITICAL_VALIDATED_24H: u32 = 15;
const STRESS_PENDING_SUBMITTED: u32 = 5;
const STRESS_REJECTED_7D: u32 = 5;

// Command-alert floors.
const RED_FAILED_MISSIONS_7D: u32 = 1;
const RED_REJECTED_48H: u32 = 3;
const ORANGE_PENDING_48H: u32 = 5;
const ORANGE_OVERDUE_MISSIONS: u32 = 2;

const NO_ALERT_REASON: &str = "No significant alerts. Normal operations.";

/// Assess national posture, command alert and KPIs in one pass.
pub fn assess(snapshot: &ActivitySnapshot, now: DateTime<Utc>) -> PostureReport {
    let last_24h = now - Duration::hours(24);
    let last_48h = now - Duration::hours(48);
    let last_3d = now - Duration::days(3);
    let last_7d = now - Duration::days(7);

    let contributions = &snapshot.contributions;
    let missions = &snapshot.missions;

    // --- Posture inputs ---
    let validated_24h = contributions
        .iter()
        .filter(|c| c.status == ContributionStatus::Validated && c.created_at >= last_24h)
        .count() as u32;
    let rejected_7d = contributions
        .iter()
        .filter(|c| c.status == ContributionStatus::Rejected && c.created_at >= last_7d)
        .count() as u32;
    let failed_created_7d = missions
        .iter()
        .filter(|m| m.status == MissionStatus::Failed && m.created_at >= last_7d)
        .count() as u32;
    let pending_submitted = contributions
        .iter()
        .filter(|c| c.status == ContributionStatus::Submitted && c.created_at < last_3d)
        .count() as u32;

    let posture = if failed_created_7d >= CRITICAL_FAILED_MISSIONS_7D
        || validated_24h >= CRITICAL_VALIDATED_24H
    {
        NationalPosture::Critical
    } else if pending_submitted >= STRESS_PENDING_SUBMITTED || rejected_7d >= STRESS_REJECTED_7D {
        NationalPosture::UnderStress
    } else {
        NationalPosture::Stable
    };

    // --- Command alert ---
    let mut level = AlertLevel::Green;
    let mut reasons = Vec::new();

    let red_failed = missions
        .iter()
        .filter(|m| {
            m.status == MissionStatus::Failed
                && m.completed_at.is_some_and(|t| t >= last_7d)
        })
        .count() as u32;
    let red_rejected = contributions
        .iter()
        .filter(|c| {
            c.status == ContributionStatus::Rejected
                && c.validated_at.is_some_and(|t| t >= last_48h)
        })
        .count() as u32;

    if red_failed >= RED_FAILED_MISSIONS_7D {
        level = AlertLevel::Red;
        reasons.push(format!("{} mission(s) failed in the last 7 days.", red_failed));
    }
    if red_rejected >= RED_REJECTED_48H {
        level = AlertLevel::Red;
        reasons.push(format!("{} contribution(s) rejected within 48h.", red_rejected));
    }

    if level != AlertLevel::Red {
        // Submitted more than 6h ago counts as waiting.
        let waiting_6h = now - Duration::hours(6);
        let orange_pending = contributions
            .iter()
            .filter(|c| {
                c.status == ContributionStatus::Submitted
                    && c.created_at >= last_48h
                    && c.created_at < waiting_6h
            })
            .count() as u32;
        let orange_overdue = missions
            .iter()
            .filter(|m| m.status.is_open() && m.due_at.is_some_and(|t| t < now))
            .count() as u32;

        if orange_pending >= ORANGE_PENDING_48H {
            level = AlertLevel::Orange;
            reasons.push(format!(
                "{} submitted contribution(s) waiting for more than 6h.",
                orange_pending
            ));
        }
        if orange_overdue >= ORANGE_OVERDUE_MISSIONS {
            level = AlertLevel::Orange;
            reasons.push(format!("{} overdue mission(s).", orange_overdue));
        }
    }

    if reasons.is_empty() {
        reasons.push(NO_ALERT_REASON.to_string());
    }

    // --- KPIs ---
    let kpis = BriefingKpis {
        contributions_validated_24h: validated_24h,
        contributions_validated_7d: contributions
            .iter()
            .filter(|c| c.status == ContributionStatus::Validated && c.created_at >= last_7d)
            .count() as u32,
        missions_pending: missions
            .iter()
            .filter(|m| m.status == MissionStatus::Pending)
            .count() as u32,
        missions_in_progress: missions
            .iter()
            .filter(|m| m.status == MissionStatus::InProgress)
            .count() as u32,
        missions_completed_7d: missions
            .iter()
            .filter(|m| {
                m.status == MissionStatus::Completed
                    && m.completed_at.is_some_and(|t| t >= last_7d)
            })
            .count() as u32,
        missions_failed_7d: missions
            .iter()
            .filter(|m| {
                m.status == MissionStatus::Failed && m.completed_at.is_some_and(|t| t >= last_7d)
            })
            .count() as u32,
    };

    PostureReport {
        posture,
        summary: posture.summary(),
        alert: CommandAlert { level, reasons },
        kpis,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contribution, Mission};

    fn contrib(id: i64, status: ContributionStatus, created_at: DateTime<Utc>) -> Contribution {
        Contribution {
            id,
            title: format!("Rapport {id}"),
            content: String::new(),
            status,
            priority: 2,
            created_at,
            validated_at: None,
            agent_id: 1,
            service: None,
        }
    }

    fn mission(id: i64, status: MissionStatus, created_at: DateTime<Utc>) -> Mission {
        Mission {
            id,
            title: format!("Mission {id}"),
            status,
            priority: 2,
            created_at,
            completed_at: None,
            due_at: None,
            agent_id: 1,
        }
    }

    #[test]
    fn quiet_snapshot_reads_stable_and_green() {
        let now = Utc::now();
        let report = assess(&ActivitySnapshot::default(), now);
        assert_eq!(report.posture, NationalPosture::Stable);
        assert_eq!(report.alert.level, AlertLevel::Green);
        assert_eq!(report.alert.reasons, vec![NO_ALERT_REASON.to_string()]);
    }

    #[test]
    fn two_fresh_failed_missions_turn_posture_critical() {
        let now = Utc::now();
        let snapshot = ActivitySnapshot {
            missions: vec![
                mission(1, MissionStatus::Failed, now - Duration::days(1)),
                mission(2, MissionStatus::Failed, now - Duration::days(2)),
            ],
            ..Default::default()
        };

        let report = assess(&snapshot, now);
        assert_eq!(report.posture, NationalPosture::Critical);
        assert!(report.summary.contains("CRITICAL"));
    }

    #[test]
    fn stale_submitted_backlog_turns_posture_under_stress() {
        let now = Utc::now();
        let contributions = (0..5)
            .map(|id| contrib(id, ContributionStatus::Submitted, now - Duration::days(4 + id)))
            .collect();
        let snapshot = ActivitySnapshot {
            contributions,
            ..Default::default()
        };

        let report = assess(&snapshot, now);
        assert_eq!(report.posture, NationalPosture::UnderStress);
    }

    #[test]
    fn recently_failed_mission_raises_a_red_alert() {
        let now = Utc::now();
        let mut failed = mission(1, MissionStatus::Failed, now - Duration::days(10));
        failed.completed_at = Some(now - Duration::days(3));
        let snapshot = ActivitySnapshot {
            missions: vec![failed],
            ..Default::default()
        };

        let report = assess(&snapshot, now);
        assert_eq!(report.alert.level, AlertLevel::Red);
        assert!(report.alert.reasons[0].contains("1 mission(s) failed"));
        assert_eq!(report.kpis.missions_failed_7d, 1);
    }

    #[test]
    fn overdue_missions_raise_an_orange_alert() {
        let now = Utc::now();
        let mut m1 = mission(1, MissionStatus::Pending, now - Duration::days(5));
        m1.due_at = Some(now - Duration::days(1));
        let mut m2 = mission(2, MissionStatus::InProgress, now - Duration::days(4));
        m2.due_at = Some(now - Duration::hours(3));
        let snapshot = ActivitySnapshot {
            missions: vec![m1, m2],
            ..Default::default()
        };

        let report = assess(&snapshot, now);
        assert_eq!(report.alert.level, AlertLevel::Orange);
        assert!(report.alert.reasons.iter().any(|r| r.contains("2 overdue mission(s)")));
    }

    #[test]
    fn red_wins_over_orange_conditions() {
        let now = Utc::now();
        let mut failed = mission(1, MissionStatus::Failed, now - Duration::days(2));
        failed.completed_at = Some(now - Duration::days(1));
        let mut overdue1 = mission(2, MissionStatus::Pending, now - Duration::days(5));
        overdue1.due_at = Some(now - Duration::days(1));
        let mut overdue2 = mission(3, MissionStatus::Pending, now - Duration::days(5));
        overdue2.due_at = Some(now - Duration::days(2));

        let snapshot = ActivitySnapshot {
            missions: vec![failed, overdue1, overdue2],
            ..Default::default()
        };

        let report = assess(&snapshot, now);
        assert_eq!(report.alert.level, AlertLevel::Red);
        // Orange conditions are not even evaluated once Red is set.
        assert!(report.alert.reasons.iter().all(|r| !r.contains("overdue")));
    }

    #[test]
    fn kpis_count_by_status_and_window() {
        let now = Utc::now();
        let mut contributions = vec![
            contrib(1, ContributionStatus::Validated, now - Duration::hours(3)),
            contrib(2, ContributionStatus::Validated, now - Duration::days(5)),
            contrib(3, ContributionStatus::Validated, now - Duration::days(10)),
        ];
        contributions.push(contrib(4, ContributionStatus::Draft, now - Duration::hours(1)));

        let mut completed = mission(1, MissionStatus::Completed, now - Duration::days(6));
        completed.completed_at = Some(now - Duration::days(2));
        let missions = vec![
            completed,
            mission(2, MissionStatus::Pending, now - Duration::days(1)),
            mission(3, MissionStatus::InProgress, now - Duration::days(1)),
        ];

        let report = assess(&ActivitySnapshot { contributions, missions, agents: Vec::new() }, now);
        assert_eq!(report.kpis.contributions_validated_24h, 1);
        assert_eq!(report.kpis.contributions_validated_7d, 2);
        assert_eq!(report.kpis.missions_pending, 1);
        assert_eq!(report.kpis.missions_in_progress, 1);
        assert_eq!(report.kpis.missions_completed_7d, 1);
        assert_eq!(report.kpis.missions_failed_7d, 0);
    }
}
