//! Keyword Aggregation
//!
//! Builds the per-keyword statistics map for one scan. The map is
//! insertion-ordered: keywords keep the order in which they were first
//! discovered, which is the documented tie-break when two signals end
//! up with the same score.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::types::KeywordStats;
use crate::models::Contribution;

/// Insertion-ordered keyword -> stats map, built fresh per call.
/// No state survives a scan.
#[derive(Debug, Default)]
pub struct KeywordAggregator {
    index: HashMap<String, usize>,
    entries: Vec<(String, KeywordStats)>,
}

impl KeywordAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one contribution for one keyword. Re-observing the same
    /// contribution for the same keyword is a no-op.
    pub fn observe(
        &mut self,
        token: &str,
        contrib: &Contribution,
        last_24h_start: DateTime<Utc>,
        prev_24h_start: DateTime<Utc>,
    ) {
        let idx = match self.index.get(token).copied() {
            Some(idx) => idx,
            None => {
                let idx = self.entries.len();
                self.index.insert(token.to_string(), idx);
                self.entries
                    .push((token.to_string(), KeywordStats::new(contrib.created_at)));
                idx
            }
        };

        let stats = &mut self.entries[idx].1;
        if !stats.contrib_ids.insert(contrib.id) {
            return;
        }

        stats.total_priority += i64::from(contrib.priority);
        stats.count += 1;
        if contrib.created_at > stats.last_seen {
            stats.last_seen = contrib.created_at;
        }

        if contrib.created_at >= last_24h_start {
            stats.count_last_24h += 1;
        } else if contrib.created_at >= prev_24h_start {
            stats.count_prev_24h += 1;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in discovery order.
    pub fn into_entries(self) -> Vec<(String, KeywordStats)> {
        self.entries
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContributionStatus;
    use chrono::Duration;

    fn contrib(id: i64, priority: i32, created_at: DateTime<Utc>) -> Contribution {
        Contribution {
            id,
            title: String::new(),
            content: String::new(),
            status: ContributionStatus::Submitted,
            priority,
            created_at,
            validated_at: None,
            agent_id: 1,
            service: None,
        }
    }

    #[test]
    fn same_contribution_counts_once() {
        let now = Utc::now();
        let mut agg = KeywordAggregator::new();
        let c = contrib(7, 3, now - Duration::hours(1));

        agg.observe("goma", &c, now - Duration::hours(24), now - Duration::hours(48));
        agg.observe("goma", &c, now - Duration::hours(24), now - Duration::hours(48));

        let entries = agg.into_entries();
        assert_eq!(entries.len(), 1);
        let stats = &entries[0].1;
        assert_eq!(stats.count, 1);
        assert_eq!(stats.total_priority, 3);
        assert_eq!(stats.count_last_24h, 1);
        assert_eq!(stats.count_prev_24h, 0);
    }

    #[test]
    fn bands_split_on_contribution_age() {
        let now = Utc::now();
        let mut agg = KeywordAggregator::new();
        let recent = contrib(1, 2, now - Duration::hours(2));
        let older = contrib(2, 2, now - Duration::hours(30));
        let stale = contrib(3, 2, now - Duration::hours(60));

        for c in [&recent, &older, &stale] {
            agg.observe("milice", c, now - Duration::hours(24), now - Duration::hours(48));
        }

        let entries = agg.into_entries();
        let stats = &entries[0].1;
        assert_eq!(stats.count, 3);
        assert_eq!(stats.count_last_24h, 1);
        assert_eq!(stats.count_prev_24h, 1);
        assert_eq!(stats.last_seen, recent.created_at);
    }

    #[test]
    fn discovery_order_is_preserved() {
        let now = Utc::now();
        let mut agg = KeywordAggregator::new();
        let c = contrib(1, 2, now);
        for token in ["zèbre", "alpha", "milieu"] {
            agg.observe(token, &c, now, now);
        }

        let order: Vec<_> = agg.into_entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(order, vec!["zèbre", "alpha", "milieu"]);
    }
}
