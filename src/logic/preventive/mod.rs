//! Preventive-Alert Engine
//!
//! Rule-based detection over aggregate activity: accumulation,
//! acceleration, silence, divergence. Every rule is evaluated
//! independently; all triggered rules are returned, with no dedup,
//! ranking or truncation.

pub mod detector;
pub mod thresholds;
pub mod types;

pub use detector::{detect, run_preventive_scan};
pub use thresholds::DetectionThresholds;
pub use types::{AlertCategory, AlertStatus, PreventiveAlert};
