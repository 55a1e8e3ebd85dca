//! Weak-Signal Types
//!
//! Data structures only, no detection logic.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

use crate::logic::level::{AlertLevel, Trend};

// ============================================================================
// WEAK SIGNAL
// ============================================================================

/// A keyword-level anomaly in the volume/priority/recency of recent
/// contributions. Flat and serializable so the dashboard and report
/// layers can render it directly; callers must not assume any identity
/// between records of two different runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeakSignal {
    pub score: f64,
    pub level: AlertLevel,
    pub title: String,
    /// Human-readable summary, e.g. "3 occurrences, average priority 2.3".
    pub evidence: String,
    pub keywords: Vec<String>,
    pub trend: Trend,
    pub last_seen: DateTime<Utc>,
    pub action_hint: &'static str,
}

// ============================================================================
// PER-KEYWORD AGGREGATE
// ============================================================================

/// Running statistics for one keyword while a scan is in flight.
#[derive(Debug, Clone)]
pub struct KeywordStats {
    /// Contributions already counted for this keyword. A token appearing
    /// twice in the same document must not double count.
    pub contrib_ids: HashSet<i64>,
    pub total_priority: i64,
    pub count: u32,
    pub last_seen: DateTime<Utc>,
    /// Contributing contributions created in the last 24 hours.
    pub count_last_24h: u32,
    /// Contributing contributions created in the 24-48h band.
    pub count_prev_24h: u32,
}

impl KeywordStats {
    pub fn new(first_seen: DateTime<Utc>) -> Self {
        Self {
            contrib_ids: HashSet::new(),
            total_priority: 0,
            count: 0,
            last_seen: first_seen,
            count_last_24h: 0,
            count_prev_24h: 0,
        }
    }

    pub fn average_priority(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_priority as f64 / self.count as f64
        }
    }
}
