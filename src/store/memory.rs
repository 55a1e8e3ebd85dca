//! In-Memory Store
//!
//! Backing store for tests and for embedding callers that already hold
//! the rows. Audit appends land in a lock-guarded, append-only vector.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::audit::AuditEvent;
use crate::error::StoreResult;
use crate::models::{Agent, Contribution, Mission};
use crate::store::DataStore;

#[derive(Default)]
pub struct MemoryStore {
    contributions: Vec<Contribution>,
    missions: Vec<Mission>,
    agents: Vec<Agent>,
    audit: RwLock<Vec<AuditEvent>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contributions(mut self, contributions: Vec<Contribution>) -> Self {
        self.contributions = contributions;
        self
    }

    pub fn with_missions(mut self, missions: Vec<Mission>) -> Self {
        self.missions = missions;
        self
    }

    pub fn with_agents(mut self, agents: Vec<Agent>) -> Self {
        self.agents = agents;
        self
    }
}

impl DataStore for MemoryStore {
    fn contributions_since(&self, t: DateTime<Utc>) -> StoreResult<Vec<Contribution>> {
        Ok(self
            .contributions
            .iter()
            .filter(|c| c.created_at >= t)
            .cloned()
            .collect())
    }

    fn contributions_all(&self) -> StoreResult<Vec<Contribution>> {
        Ok(self.contributions.clone())
    }

    fn missions_all(&self) -> StoreResult<Vec<Mission>> {
        Ok(self.missions.clone())
    }

    fn agents_all(&self) -> StoreResult<Vec<Agent>> {
        Ok(self.agents.clone())
    }

    fn audit_recent(&self, limit: usize) -> StoreResult<Vec<AuditEvent>> {
        let audit = self.audit.read();
        Ok(audit.iter().rev().take(limit).cloned().collect())
    }

    fn record_audit(&self, event: &AuditEvent) -> StoreResult<()> {
        self.audit.write().push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditAction;

    #[test]
    fn audit_is_append_only_and_newest_first() {
        let store = MemoryStore::new();
        let now = Utc::now();

        let first = AuditEvent::new(None, AuditAction::WeakSignalScan, "scan 1", now);
        let second = AuditEvent::new(None, AuditAction::PreventiveScan, "scan 2", now);
        store.record_audit(&first).unwrap();
        store.record_audit(&second).unwrap();

        let recent = store.audit_recent(10).unwrap();
        assert_eq!(recent, vec![second.clone(), first.clone()]);

        let capped = store.audit_recent(1).unwrap();
        assert_eq!(capped, vec![second]);
    }
}
