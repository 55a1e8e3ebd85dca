//! Activity Snapshot
//!
//! One bulk read shared by the rule-based detectors and the posture
//! engine, so a single screen render costs a single set of queries.

use crate::error::StoreResult;
use crate::models::{Agent, Contribution, Mission};
use crate::store::DataStore;

#[derive(Debug, Clone, Default)]
pub struct ActivitySnapshot {
    pub contributions: Vec<Contribution>,
    pub missions: Vec<Mission>,
    pub agents: Vec<Agent>,
}

impl ActivitySnapshot {
    pub fn load(store: &dyn DataStore) -> StoreResult<Self> {
        Ok(Self {
            contributions: store.contributions_all()?,
            missions: store.missions_all()?,
            agents: store.agents_all()?,
        })
    }
}
