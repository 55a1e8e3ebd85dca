//! Alert levels and trends
//!
//! One ordered vocabulary for every detector. Critical sits above Red:
//! it is reserved for human-safety signals (a regular agent going
//! silent), which outrank any volume-based escalation.

use serde::{Deserialize, Serialize};

// ============================================================================
// ALERT LEVEL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Green = 0,
    Yellow = 1,
    Orange = 2,
    Red = 3,
    Critical = 4,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Green => "GREEN",
            AlertLevel::Yellow => "YELLOW",
            AlertLevel::Orange => "ORANGE",
            AlertLevel::Red => "RED",
            AlertLevel::Critical => "CRITICAL",
        }
    }

    pub fn severity(&self) -> u8 {
        *self as u8
    }

    pub fn color(&self) -> &'static str {
        match self {
            AlertLevel::Green => "#10b981",
            AlertLevel::Yellow => "#f59e0b",
            AlertLevel::Orange => "#f97316",
            AlertLevel::Red => "#ef4444",
            AlertLevel::Critical => "#7f1d1d",
        }
    }

    /// Does a signal at this level justify opening a cross-check?
    pub fn warrants_crosscheck(&self) -> bool {
        *self > AlertLevel::Green
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// TREND
// ============================================================================

/// Direction of a keyword's volume between the last-24h band and the
/// 24-48h band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "UP",
            Trend::Down => "DOWN",
            Trend::Stable => "STABLE",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_totally_ordered() {
        assert!(AlertLevel::Green < AlertLevel::Yellow);
        assert!(AlertLevel::Yellow < AlertLevel::Orange);
        assert!(AlertLevel::Orange < AlertLevel::Red);
        assert!(AlertLevel::Red < AlertLevel::Critical);
    }

    #[test]
    fn green_never_warrants_crosscheck() {
        assert!(!AlertLevel::Green.warrants_crosscheck());
        assert!(AlertLevel::Yellow.warrants_crosscheck());
        assert!(AlertLevel::Critical.warrants_crosscheck());
    }
}
