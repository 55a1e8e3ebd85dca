//! Central Configuration Constants
//!
//! Single source of truth for analysis defaults.
//! To change a default lookback or limit, only edit this file.

/// Default weak-signal lookback window (hours)
pub const DEFAULT_WINDOW_HOURS: i64 = 72;

/// Default number of weak signals returned per scan
pub const DEFAULT_SIGNAL_LIMIT: usize = 5;

/// Due-date offset for cross-check tickets opened on RED/ORANGE signals (hours)
pub const CROSSCHECK_URGENT_DUE_HOURS: i64 = 24;

/// Due-date offset for cross-check tickets opened on YELLOW signals (hours)
pub const CROSSCHECK_DEFAULT_DUE_HOURS: i64 = 48;

/// Sentinel zone label when no service can be resolved
pub const ZONE_NATIONAL: &str = "NATIONAL";

/// Sentinel zone label when an agent has no usable service record
pub const ZONE_UNKNOWN: &str = "UNKNOWN";

/// Crate version
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name
pub const ENGINE_NAME: &str = "Vigil";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get the weak-signal window from environment or use default
pub fn get_window_hours() -> i64 {
    std::env::var("VIGIL_WINDOW_HOURS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_WINDOW_HOURS)
}

/// Get the weak-signal result limit from environment or use default
pub fn get_signal_limit() -> usize {
    std::env::var("VIGIL_SIGNAL_LIMIT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SIGNAL_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        assert!(DEFAULT_WINDOW_HOURS > 0);
        assert!(DEFAULT_SIGNAL_LIMIT >= 1);
        assert!(CROSSCHECK_URGENT_DUE_HOURS < CROSSCHECK_DEFAULT_DUE_HOURS);
    }
}
