//! Command Posture Engine
//!
//! Aggregate national status for the presidency briefing: a coarse
//! posture, a leveled command alert with its reasons, and the KPI
//! counters the briefing screen displays.

pub mod assess;
pub mod types;

pub use assess::assess;
pub use types::{BriefingKpis, CommandAlert, NationalPosture, PostureReport};
