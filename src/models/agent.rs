//! Agent model

use serde::{Deserialize, Serialize};

/// A field agent. The service doubles as a coarse zone label for the
/// detectors; the matricule is the only identity the alert surfaces
/// are allowed to expose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: i64,
    pub name: String,
    pub matricule: String,
    pub service: String,
    pub active: bool,
}

impl Agent {
    /// Zone label for alerts, falling back to the sentinel when the
    /// service record is unusable.
    pub fn zone(&self) -> &str {
        if self.service.trim().is_empty() {
            crate::constants::ZONE_UNKNOWN
        } else {
            &self.service
        }
    }
}
