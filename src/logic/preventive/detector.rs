//! Preventive-Alert Detector
//!
//! Five independent rules over one activity snapshot. Grouping is done
//! over ordered maps so a fixed snapshot always yields the same alerts
//! in the same order.

use chrono::{DateTime, Duration, Utc};
use std::collections::{BTreeMap, HashMap};

use super::thresholds::DetectionThresholds;
use super::types::{AlertCategory, PreventiveAlert};
use crate::constants::ZONE_NATIONAL;
use crate::error::StoreResult;
use crate::logic::level::AlertLevel;
use crate::models::ContributionStatus;
use crate::store::{ActivitySnapshot, DataStore};

// ============================================================================
// DETECTION
// ============================================================================

/// Evaluate every rule against the snapshot. All triggered rules are
/// returned; nothing is merged, ranked or truncated.
pub fn detect(
    snapshot: &ActivitySnapshot,
    thresholds: &DetectionThresholds,
    now: DateTime<Utc>,
) -> Vec<PreventiveAlert> {
    let mut alerts = Vec::new();

    detect_theme_accumulation(snapshot, thresholds, now, &mut alerts);
    detect_global_accumulation(snapshot, thresholds, now, &mut alerts);
    detect_acceleration(snapshot, thresholds, now, &mut alerts);
    detect_agent_silence(snapshot, thresholds, now, &mut alerts);
    detect_rejection_divergence(snapshot, thresholds, now, &mut alerts);

    alerts
}

/// Repetition of one theme inside one service over a short period.
fn detect_theme_accumulation(
    snapshot: &ActivitySnapshot,
    thresholds: &DetectionThresholds,
    now: DateTime<Utc>,
    alerts: &mut Vec<PreventiveAlert>,
) {
    let since = now - Duration::days(thresholds.theme_accumulation_days);
    let mut counts: BTreeMap<(String, String), u32> = BTreeMap::new();

    for contrib in &snapshot.contributions {
        if contrib.created_at < since {
            continue;
        }
        let zone = contrib
            .service
            .clone()
            .unwrap_or_else(|| ZONE_NATIONAL.to_string());
        *counts.entry((zone, contrib.title.clone())).or_insert(0) += 1;
    }

    for ((zone, title), count) in counts {
        if count >= thresholds.theme_accumulation_count {
            alerts.push(PreventiveAlert::new(
                AlertCategory::Social,
                zone.clone(),
                AlertLevel::Yellow,
                format!(
                    "Accumulation: {} contributions on theme '{}' within {} days in zone '{}'.",
                    count, title, thresholds.theme_accumulation_days, zone
                ),
                vec![format!("{} contributions on '{}'", count, title)],
                now,
            ));
        }
    }
}

/// Raw national volume across all themes over a fortnight.
fn detect_global_accumulation(
    snapshot: &ActivitySnapshot,
    thresholds: &DetectionThresholds,
    now: DateTime<Utc>,
    alerts: &mut Vec<PreventiveAlert>,
) {
    let since = now - Duration::days(thresholds.global_accumulation_days);
    let total = snapshot
        .contributions
        .iter()
        .filter(|c| c.created_at >= since)
        .count() as u32;

    if total >= thresholds.global_accumulation_count {
        alerts.push(PreventiveAlert::new(
            AlertCategory::Social,
            ZONE_NATIONAL,
            AlertLevel::Orange,
            format!(
                "Accumulation: {} contributions across all themes within {} days.",
                total, thresholds.global_accumulation_days
            ),
            vec![format!("{} contributions", total)],
            now,
        ));
    }
}

/// 24-hour tempo versus the 7-day daily average.
fn detect_acceleration(
    snapshot: &ActivitySnapshot,
    thresholds: &DetectionThresholds,
    now: DateTime<Utc>,
    alerts: &mut Vec<PreventiveAlert>,
) {
    let last_24h = now - Duration::hours(24);
    let last_7d = now - Duration::days(7);

    let count_24h = snapshot
        .contributions
        .iter()
        .filter(|c| c.created_at >= last_24h)
        .count() as f64;
    let count_7d = snapshot
        .contributions
        .iter()
        .filter(|c| c.created_at >= last_7d)
        .count() as f64;

    if count_7d > 0.0 && count_24h > (count_7d / 7.0) * thresholds.acceleration_factor {
        alerts.push(PreventiveAlert::new(
            AlertCategory::Institutional,
            ZONE_NATIONAL,
            AlertLevel::Yellow,
            format!(
                "Acceleration: the contribution tempo over the last 24h exceeds {}x the 7-day daily average.",
                thresholds.acceleration_factor
            ),
            vec![format!(
                "{} contributions in 24h, {} in 7 days",
                count_24h as u32, count_7d as u32
            )],
            now,
        ));
    }
}

/// A regular agent going quiet. Qualification is activity in the
/// trailing 30 days; an agent whose whole output predates that window
/// never qualifies.
fn detect_agent_silence(
    snapshot: &ActivitySnapshot,
    thresholds: &DetectionThresholds,
    now: DateTime<Utc>,
    alerts: &mut Vec<PreventiveAlert>,
) {
    let qualify_since = now - Duration::days(thresholds.silence_qualify_days);
    let silent_since = now - Duration::days(thresholds.silence_days);

    let mut recent_counts: HashMap<i64, u32> = HashMap::new();
    let mut heard_lately: HashMap<i64, bool> = HashMap::new();
    for contrib in &snapshot.contributions {
        if contrib.created_at >= qualify_since {
            *recent_counts.entry(contrib.agent_id).or_insert(0) += 1;
        }
        if contrib.created_at >= silent_since {
            heard_lately.insert(contrib.agent_id, true);
        }
    }

    for agent in &snapshot.agents {
        let qualified = recent_counts
            .get(&agent.id)
            .is_some_and(|&n| n >= thresholds.silence_qualify_count);
        let silent = !heard_lately.get(&agent.id).copied().unwrap_or(false);

        if qualified && silent {
            alerts.push(PreventiveAlert::new(
                AlertCategory::Institutional,
                agent.zone().to_string(),
                AlertLevel::Critical,
                format!(
                    "Abnormal silence: agent {} ({}), usually active, has filed nothing for {} days.",
                    agent.name, agent.matricule, thresholds.silence_days
                ),
                vec![format!("Agent {} silent", agent.matricule)],
                now,
            ));
        }
    }
}

/// Repeated rejections on one theme — contradictory reporting or a
/// clarity problem.
fn detect_rejection_divergence(
    snapshot: &ActivitySnapshot,
    thresholds: &DetectionThresholds,
    now: DateTime<Utc>,
    alerts: &mut Vec<PreventiveAlert>,
) {
    let since = now - Duration::days(thresholds.divergence_days);
    let mut rejected: BTreeMap<String, u32> = BTreeMap::new();

    for contrib in &snapshot.contributions {
        if contrib.status == ContributionStatus::Rejected && contrib.created_at >= since {
            *rejected.entry(contrib.title.clone()).or_insert(0) += 1;
        }
    }

    for (title, count) in rejected {
        if count >= thresholds.divergence_reject_count {
            alerts.push(PreventiveAlert::new(
                AlertCategory::Institutional,
                ZONE_NATIONAL,
                AlertLevel::Yellow,
                format!(
                    "Divergence: {} rejections on theme '{}' within {} days, suggesting contradictory or unclear reporting.",
                    count, title, thresholds.divergence_days
                ),
                vec![format!("{} rejections on '{}'", count, title)],
                now,
            ));
        }
    }
}

// ============================================================================
// STORE-FACING WRAPPER
// ============================================================================

/// Load the activity snapshot and run every rule. Store failures
/// propagate unchanged.
pub fn run_preventive_scan(
    store: &dyn DataStore,
    thresholds: &DetectionThresholds,
    now: DateTime<Utc>,
) -> StoreResult<Vec<PreventiveAlert>> {
    let snapshot = ActivitySnapshot::load(store)?;
    let alerts = detect(&snapshot, thresholds, now);
    log::info!(
        "preventive scan: {} rule(s) fired over {} contributions",
        alerts.len(),
        snapshot.contributions.len()
    );
    Ok(alerts)
}

// ============================================================================
// TESTS
// ============================================================================
