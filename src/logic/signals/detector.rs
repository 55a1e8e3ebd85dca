//! Weak-Signal Detector
//!
//! Detection pipeline only — types live in `types`, tokenization and
//! weights in `keywords`, the aggregation map in `aggregate`.
//!
//! Ingest (recent window) -> tokenize & aggregate -> score -> classify
//! (level + trend) -> rank & truncate.

use chrono::{DateTime, Duration, Utc};

use super::aggregate::KeywordAggregator;
use super::keywords::{sensitive_weight, tokenize};
use super::types::WeakSignal;
use crate::error::StoreResult;
use crate::logic::level::{AlertLevel, Trend};
use crate::models::Contribution;
use crate::store::DataStore;

/// Advisory attached to every emitted signal.
pub const ACTION_HINT: &str = "Review the linked contributions and request a cross-check.";

/// A single-occurrence token is noise, not a signal.
const MIN_KEYWORD_COUNT: u32 = 2;

// Score thresholds for the four-color classification.
const RED_SCORE: f64 = 18.0;
const ORANGE_SCORE: f64 = 12.0;
const YELLOW_SCORE: f64 = 7.0;

/// Relative change beyond which a keyword's volume counts as moving.
const TREND_RATIO: f64 = 0.3;

// ============================================================================
// PIPELINE
// ============================================================================

/// Detect weak signals over the contributions created within the last
/// `window_hours`, returning at most `limit` records sorted by score
/// descending. Pure: same inputs and same `now` give the same output,
/// in the same order.
///
/// Degenerate parameters (`window_hours <= 0`, `limit == 0`) yield an
/// empty list rather than an error.
pub fn detect(
    contributions: &[Contribution],
    now: DateTime<Utc>,
    window_hours: i64,
    limit: usize,
) -> Vec<WeakSignal> {
    if window_hours <= 0 || limit == 0 {
        return Vec::new();
    }

    let window_start = now - Duration::hours(window_hours);
    let last_24h_start = now - Duration::hours(24);
    let prev_24h_start = now - Duration::hours(48);

    let mut agg = KeywordAggregator::new();
    for contrib in contributions {
        if contrib.created_at < window_start {
            continue;
        }
        let text = contrib.analysis_text();
        for token in tokenize(&text) {
            agg.observe(&token, contrib, last_24h_start, prev_24h_start);
        }
    }

    if agg.is_empty() {
        return Vec::new();
    }

    let mut signals = Vec::new();
    for (keyword, stats) in agg.into_entries() {
        if stats.count < MIN_KEYWORD_COUNT {
            continue;
        }

        let avg_priority = stats.average_priority();
        let score = f64::from(stats.count) * 2.0
            + avg_priority * 3.0
            + sensitive_weight(&keyword) as f64;

        signals.push(WeakSignal {
            score,
            level: classify_level(score),
            title: format!("Signal: {}", keyword.to_uppercase()),
            evidence: format!(
                "{} occurrences, average priority {:.1}",
                stats.count, avg_priority
            ),
            keywords: vec![keyword],
            trend: classify_trend(stats.count_last_24h, stats.count_prev_24h),
            last_seen: stats.last_seen,
            action_hint: ACTION_HINT,
        });
    }

    // Stable sort: equal scores keep keyword-discovery order.
    signals.sort_by(|a, b| b.score.total_cmp(&a.score));
    signals.truncate(limit);
    signals
}

/// Map a raw score onto the four-color scale.
pub fn classify_level(score: f64) -> AlertLevel {
    if score >= RED_SCORE {
        AlertLevel::Red
    } else if score >= ORANGE_SCORE {
        AlertLevel::Orange
    } else if score >= YELLOW_SCORE {
        AlertLevel::Yellow
    } else {
        AlertLevel::Green
    }
}

/// Compare the last-24h band against the 24-48h band.
pub fn classify_trend(count_last_24h: u32, count_prev_24h: u32) -> Trend {
    if count_prev_24h > 0 {
        let change_ratio = (f64::from(count_last_24h) - f64::from(count_prev_24h))
            / f64::from(count_prev_24h);
        if change_ratio > TREND_RATIO {
            Trend::Up
        } else if change_ratio < -TREND_RATIO {
            Trend::Down
        } else {
            Trend::Stable
        }
    } else if count_last_24h > 1 {
        // No history but several fresh sightings: treat as rising.
        Trend::Up
    } else {
        Trend::Stable
    }
}

// ============================================================================
// STORE-FACING WRAPPER
// ============================================================================

/// Fetch the recent window from the store and run the detector.
/// Store failures propagate unchanged — an empty result always means
/// "no signals found", never "could not read".
pub fn run_weak_signal_scan(
    store: &dyn DataStore,
    now: DateTime<Utc>,
    window_hours: i64,
    limit: usize,
) -> StoreResult<Vec<WeakSignal>> {
    if window_hours <= 0 || limit == 0 {
        log::warn!(
            "weak-signal scan skipped: degenerate parameters (window={}h, limit={})",
            window_hours,
            limit
        );
        return Ok(Vec::new());
    }

    let window_start = now - Duration::hours(window_hours);
    let contributions = store.contributions_since(window_start)?;
    log::debug!(
        "weak-signal scan: {} contributions in the last {}h",
        contributions.len(),
        window_hours
    );

    let signals = detect(&contributions, now, window_hours, limit);
    log::info!(
        "weak-signal scan ({}h): {} signal(s), top level {}",
        window_hours,
        signals.len(),
        signals
            .first()
            .map(|s| s.level.as_str())
            .unwrap_or("NONE")
    );
    Ok(signals)
}
