//! Preventive Rule Thresholds
//!
//! Defaults and tunables for the rule-based detector. The defaults are
//! the operating values the portal has run with; the struct exists so
//! they can be tuned without a code change.

use serde::{Deserialize, Serialize};

/// Same-theme contributions per service per week before the thematic
/// accumulation rule fires.
pub const THEME_ACCUMULATION_COUNT: u32 = 5;

/// Contributions across all themes per fortnight before the global
/// accumulation rule fires.
pub const GLOBAL_ACCUMULATION_COUNT: u32 = 10;

/// 24h tempo versus the 7-day daily average before the acceleration
/// rule fires.
pub const ACCELERATION_FACTOR: f64 = 3.0;

/// Contributions in the trailing 30 days that make an agent "regular"
/// for the silence rule.
pub const SILENCE_QUALIFY_COUNT: u32 = 5;

/// Rejections sharing a theme per week before the divergence rule fires.
pub const DIVERGENCE_REJECT_COUNT: u32 = 3;

// ============================================================================
// CONFIGURABLE THRESHOLDS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionThresholds {
    pub theme_accumulation_count: u32,
    pub theme_accumulation_days: i64,
    pub global_accumulation_count: u32,
    pub global_accumulation_days: i64,
    pub acceleration_factor: f64,
    pub silence_qualify_count: u32,
    pub silence_qualify_days: i64,
    pub silence_days: i64,
    pub divergence_reject_count: u32,
    pub divergence_days: i64,
}

impl Default for DetectionThresholds {
    fn default() -> Self {
        Self {
            theme_accumulation_count: THEME_ACCUMULATION_COUNT,
            theme_accumulation_days: 7,
            global_accumulation_count: GLOBAL_ACCUMULATION_COUNT,
            global_accumulation_days: 14,
            acceleration_factor: ACCELERATION_FACTOR,
            silence_qualify_count: SILENCE_QUALIFY_COUNT,
            silence_qualify_days: 30,
            silence_days: 7,
            divergence_reject_count: DIVERGENCE_REJECT_COUNT,
            divergence_days: 7,
        }
    }
}

impl DetectionThresholds {
    /// High sensitivity - lower floors, more alerts.
    pub fn high_sensitivity() -> Self {
        Self {
            theme_accumulation_count: 3,
            global_accumulation_count: 6,
            acceleration_factor: 2.0,
            divergence_reject_count: 2,
            ..Default::default()
        }
    }

    /// Low sensitivity - higher floors, fewer alerts.
    pub fn low_sensitivity() -> Self {
        Self {
            theme_accumulation_count: 8,
            global_accumulation_count: 20,
            acceleration_factor: 4.0,
            divergence_reject_count: 5,
            ..Default::default()
        }
    }
}
