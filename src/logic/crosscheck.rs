//! Cross-Check Tickets
//!
//! A chief confirms or refutes a weak signal by opening a cross-check
//! ticket, usually seeded straight from a scan result. Tickets carry a
//! due date derived from the signal level and classify their own
//! lateness for the command screen.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{CROSSCHECK_DEFAULT_DUE_HOURS, CROSSCHECK_URGENT_DUE_HOURS};
use crate::logic::level::AlertLevel;
use crate::logic::signals::WeakSignal;

/// Source tag for tickets seeded from a scan.
pub const SOURCE_WEAK_SIGNALS: &str = "weak_signals";

// ============================================================================
// STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    InProgress,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "OPEN",
            TicketStatus::InProgress => "IN_PROGRESS",
            TicketStatus::Closed => "CLOSED",
        }
    }
}

// ============================================================================
// TICKET
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossCheckTicket {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub status: TicketStatus,
    pub level: AlertLevel,
    pub title: String,
    pub evidence: String,
    pub keywords: Vec<String>,
    /// Window of the scan that produced the seed signal.
    pub window_hours: i64,
    pub source: String,
    pub taken_by: Option<String>,
    pub due_at: Option<DateTime<Utc>>,
}

impl CrossCheckTicket {
    /// Seed a ticket from a scan result. Green signals do not justify
    /// a cross-check and yield `None`.
    pub fn from_signal(
        signal: &WeakSignal,
        created_by: &str,
        window_hours: i64,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        if !signal.level.warrants_crosscheck() {
            return None;
        }

        let due_hours = if signal.level >= AlertLevel::Orange {
            CROSSCHECK_URGENT_DUE_HOURS
        } else {
            CROSSCHECK_DEFAULT_DUE_HOURS
        };

        Some(Self {
            id: Uuid::new_v4(),
            created_at: now,
            created_by: created_by.to_string(),
            status: TicketStatus::Open,
            level: signal.level,
            title: signal.title.clone(),
            evidence: signal.evidence.clone(),
            keywords: signal.keywords.clone(),
            window_hours,
            source: SOURCE_WEAK_SIGNALS.to_string(),
            taken_by: None,
            due_at: Some(now + Duration::hours(due_hours)),
        })
    }

    /// A chief takes charge of the ticket.
    pub fn take(&mut self, chief: &str) {
        self.status = TicketStatus::InProgress;
        self.taken_by = Some(chief.to_string());
    }

    pub fn close(&mut self) {
        self.status = TicketStatus::Closed;
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.due_at {
            Some(due) if self.status != TicketStatus::Closed => now > due,
            _ => false,
        }
    }

    /// Whole hours past the due date.
    pub fn overdue_hours(&self, now: DateTime<Utc>) -> i64 {
        if self.is_overdue(now) {
            match self.due_at {
                Some(due) => (now - due).num_hours(),
                None => 0,
            }
        } else {
            0
        }
    }

    /// Lateness severity for the command screen.
    pub fn overdue_level(&self, now: DateTime<Utc>) -> Option<AlertLevel> {
        if !self.is_overdue(now) {
            return None;
        }
        let hours = self.overdue_hours(now);
        if hours > 24 {
            Some(AlertLevel::Red)
        } else if hours > 12 {
            Some(AlertLevel::Orange)
        } else {
            Some(AlertLevel::Yellow)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::level::Trend;
    use crate::logic::signals::detector::ACTION_HINT;

    fn signal(level: AlertLevel) -> WeakSignal {
        WeakSignal {
            score: 15.0,
            level,
            title: "Signal: GOMA".to_string(),
            evidence: "3 occurrences, average priority 2.7".to_string(),
            keywords: vec!["goma".to_string()],
            trend: Trend::Up,
            last_seen: Utc::now(),
            action_hint: ACTION_HINT,
        }
    }

    #[test]
    fn green_signals_do_not_open_tickets() {
        let now = Utc::now();
        assert!(CrossCheckTicket::from_signal(&signal(AlertLevel::Green), "chef", 72, now).is_none());
    }

    #[test]
    fn due_date_follows_the_signal_level() {
        let now = Utc::now();
        let urgent = CrossCheckTicket::from_signal(&signal(AlertLevel::Red), "chef", 72, now).unwrap();
        assert_eq!(urgent.due_at, Some(now + Duration::hours(24)));

        let orange = CrossCheckTicket::from_signal(&signal(AlertLevel::Orange), "chef", 72, now).unwrap();
        assert_eq!(orange.due_at, Some(now + Duration::hours(24)));

        let routine = CrossCheckTicket::from_signal(&signal(AlertLevel::Yellow), "chef", 72, now).unwrap();
        assert_eq!(routine.due_at, Some(now + Duration::hours(48)));
        assert_eq!(routine.status, TicketStatus::Open);
        assert_eq!(routine.source, SOURCE_WEAK_SIGNALS);
    }

    #[test]
    fn overdue_level_escalates_with_lateness() {
        let now = Utc::now();
        let ticket = CrossCheckTicket::from_signal(&signal(AlertLevel::Yellow), "chef", 72, now).unwrap();
        let due = ticket.due_at.unwrap();

        assert_eq!(ticket.overdue_level(due - Duration::hours(1)), None);
        assert_eq!(ticket.overdue_level(due + Duration::hours(2)), Some(AlertLevel::Yellow));
        assert_eq!(ticket.overdue_level(due + Duration::hours(13)), Some(AlertLevel::Orange));
        assert_eq!(ticket.overdue_level(due + Duration::hours(25)), Some(AlertLevel::Red));
    }

    #[test]
    fn closed_tickets_are_never_overdue() {
        let now = Utc::now();
        let mut ticket = CrossCheckTicket::from_signal(&signal(AlertLevel::Red), "chef", 72, now).unwrap();
        ticket.take("chef.goma");
        assert_eq!(ticket.status, TicketStatus::InProgress);
        assert_eq!(ticket.taken_by.as_deref(), Some("chef.goma"));

        ticket.close();
        assert!(!ticket.is_overdue(now + Duration::days(10)));
        assert_eq!(ticket.overdue_level(now + Duration::days(10)), None);
    }
}
