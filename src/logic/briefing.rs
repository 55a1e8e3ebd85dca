//! Command Briefings
//!
//! Assembles the chief command view and the presidency briefing from
//! one snapshot each. These are the in-process entry points the
//! rendering layer calls; every computed scan is recorded in the audit
//! trail, and any store failure propagates to the caller unchanged.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::audit::{AuditAction, AuditEvent};
use crate::constants;
use crate::error::StoreResult;
use crate::logic::posture::{self, PostureReport};
use crate::logic::preventive::{self, DetectionThresholds, PreventiveAlert};
use crate::logic::signals::{self, WeakSignal};
use crate::models::{Contribution, ContributionStatus};
use crate::store::{ActivitySnapshot, DataStore};

/// How many journal lines the command screens show.
const JOURNAL_LIMIT: usize = 20;

// ============================================================================
// CHIEF COMMAND VIEW
// ============================================================================

/// Everything the chief command screen renders.
#[derive(Debug, Clone, Serialize)]
pub struct ChiefCommandView {
    /// Submitted contributions awaiting a decision, newest first.
    pub validation_queue: Vec<Contribution>,
    pub weak_signals: Vec<WeakSignal>,
    pub command_journal: Vec<AuditEvent>,
}

pub fn chief_command_view(
    store: &dyn DataStore,
    user: &str,
    now: DateTime<Utc>,
) -> StoreResult<ChiefCommandView> {
    let window_hours = constants::get_window_hours();
    let limit = constants::get_signal_limit();

    let contributions = store.contributions_all()?;

    let mut validation_queue: Vec<Contribution> = contributions
        .iter()
        .filter(|c| c.status == ContributionStatus::Submitted)
        .cloned()
        .collect();
    validation_queue.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let weak_signals = signals::detect(&contributions, now, window_hours, limit);
    record_scan(store, user, now, window_hours, weak_signals.len())?;

    let command_journal = store.audit_recent(JOURNAL_LIMIT)?;

    Ok(ChiefCommandView {
        validation_queue,
        weak_signals,
        command_journal,
    })
}

// ============================================================================
// PRESIDENCY BRIEFING
// ============================================================================

/// Everything the presidency briefing renders.
#[derive(Debug, Clone, Serialize)]
pub struct PresidencyBriefing {
    pub posture: PostureReport,
    pub top_weak_signals: Vec<WeakSignal>,
    pub preventive_alerts: Vec<PreventiveAlert>,
}

pub fn presidency_briefing(
    store: &dyn DataStore,
    user: &str,
    now: DateTime<Utc>,
) -> StoreResult<PresidencyBriefing> {
    let window_hours = constants::get_window_hours();
    let limit = constants::get_signal_limit();

    let snapshot = ActivitySnapshot::load(store)?;

    let posture = posture::assess(&snapshot, now);
    let top_weak_signals = signals::detect(&snapshot.contributions, now, window_hours, limit);
    let preventive_alerts =
        preventive::detect(&snapshot, &DetectionThresholds::default(), now);

    record_scan(store, user, now, window_hours, top_weak_signals.len())?;
    log::info!(
        "presidency briefing: posture {}, {} weak signal(s), {} preventive alert(s)",
        posture.posture.as_str(),
        top_weak_signals.len(),
        preventive_alerts.len()
    );

    Ok(PresidencyBriefing {
        posture,
        top_weak_signals,
        preventive_alerts,
    })
}

fn record_scan(
    store: &dyn DataStore,
    user: &str,
    now: DateTime<Utc>,
    window_hours: i64,
    result_count: usize,
) -> StoreResult<()> {
    store.record_audit(&AuditEvent::new(
        Some(user),
        AuditAction::WeakSignalScan,
        format!("weak-signal scan ({}h) - {} result(s)", window_hours, result_count),
        now,
    ))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::logic::level::AlertLevel;
    use crate::models::{Agent, Mission};
    use crate::store::MemoryStore;
    use chrono::Duration;

    fn contrib(id: i64, title: &str, status: ContributionStatus, created_at: DateTime<Utc>) -> Contribution {
        Contribution {
            id,
            title: title.to_string(),
            content: "deux sources concordantes".to_string(),
            status,
            priority: 3,
            created_at,
            validated_at: None,
            agent_id: 1,
            service: Some("DGM Nord".to_string()),
        }
    }

    #[test]
    fn chief_view_collects_queue_signals_and_journal() {
        let now = Utc::now();
        let store = MemoryStore::new().with_contributions(vec![
            contrib(1, "Attaque à Goma", ContributionStatus::Submitted, now - Duration::hours(2)),
            contrib(2, "Attaque sur Goma", ContributionStatus::Submitted, now - Duration::hours(8)),
            contrib(3, "Vieille note", ContributionStatus::Validated, now - Duration::days(20)),
        ]);

        let view = chief_command_view(&store, "chef.goma", now).unwrap();

        assert_eq!(view.validation_queue.len(), 2);
        assert_eq!(view.validation_queue[0].id, 1); // newest first
        assert!(view.weak_signals.iter().any(|s| s.level >= AlertLevel::Orange));

        // The scan itself is the first journal line.
        assert_eq!(view.command_journal.len(), 1);
        assert_eq!(view.command_journal[0].action, AuditAction::WeakSignalScan);
        assert_eq!(view.command_journal[0].user.as_deref(), Some("chef.goma"));
        assert!(view.command_journal[0].target.starts_with("weak-signal scan"));
    }

    #[test]
    fn presidency_briefing_combines_all_engines() {
        let now = Utc::now();
        let failed = Mission {
            id: 1,
            title: "Mission frontière".to_string(),
            status: crate::models::MissionStatus::Failed,
            priority: 3,
            created_at: now - Duration::days(2),
            completed_at: Some(now - Duration::days(1)),
            due_at: None,
            agent_id: 1,
        };

        let store = MemoryStore::new()
            .with_contributions(vec![
                contrib(1, "Attaque à Goma", ContributionStatus::Submitted, now - Duration::hours(2)),
                contrib(2, "Attaque sur Goma", ContributionStatus::Submitted, now - Duration::hours(8)),
            ])
            .with_missions(vec![failed])
            .with_agents(vec![Agent {
                id: 1,
                name: "Kabeya".to_string(),
                matricule: "AG-0042".to_string(),
                service: "DGM Nord".to_string(),
                active: true,
            }]);

        let briefing = presidency_briefing(&store, "presidence", now).unwrap();

        assert_eq!(briefing.posture.alert.level, AlertLevel::Red);
        assert!(!briefing.top_weak_signals.is_empty());
        assert_eq!(store.audit_recent(5).unwrap().len(), 1);
    }

    struct FailingStore;

    impl DataStore for FailingStore {
        fn contributions_since(&self, _t: DateTime<Utc>) -> StoreResult<Vec<Contribution>> {
            Err(StoreError::Unavailable("db offline".to_string()))
        }
        fn contributions_all(&self) -> StoreResult<Vec<Contribution>> {
            Err(StoreError::Unavailable("db offline".to_string()))
        }
        fn missions_all(&self) -> StoreResult<Vec<Mission>> {
            Err(StoreError::Unavailable("db offline".to_string()))
        }
        fn agents_all(&self) -> StoreResult<Vec<Agent>> {
            Err(StoreError::Unavailable("db offline".to_string()))
        }
        fn audit_recent(&self, _limit: usize) -> StoreResult<Vec<AuditEvent>> {
            Err(StoreError::Unavailable("db offline".to_string()))
        }
        fn record_audit(&self, _event: &AuditEvent) -> StoreResult<()> {
            Err(StoreError::Unavailable("db offline".to_string()))
        }
    }

    #[test]
    fn store_failures_propagate_instead_of_reading_as_no_signals() {
        let now = Utc::now();
        let err = chief_command_view(&FailingStore, "chef.goma", now).unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));

        let err = presidency_briefing(&FailingStore, "presidence", now).unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
