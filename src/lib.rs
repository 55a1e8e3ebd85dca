//! Vigil Analysis Core
//!
//! Detection engines behind an intelligence reporting portal: field
//! agents file contributions, chiefs validate them and open
//! cross-checks, and the command screens lean on this crate to decide
//! where human attention goes first.
//!
//! Two detectors do the heavy lifting:
//!
//! - the **weak-signal engine** ([`logic::signals`]) tokenizes recent
//!   contributions, aggregates per-keyword volume/priority/recency and
//!   emits leveled, trend-classified signals;
//! - the **preventive-alert engine** ([`logic::preventive`]) runs
//!   threshold rules over aggregate activity: accumulation,
//!   acceleration, agent silence, rejection divergence.
//!
//! Both are synchronous, read-only batch passes: every run recomputes
//! from the store, results are ephemeral values with no identity
//! across runs, and concurrent runs at worst duplicate work.
//!
//! ```
//! use chrono::Utc;
//! use vigil_core::logic::signals;
//! use vigil_core::models::{Contribution, ContributionStatus};
//!
//! let now = Utc::now();
//! let reports = vec![
//!     Contribution {
//!         id: 1,
//!         title: "Attaque à Goma".to_string(),
//!         content: "convoi visé sur la RN2".to_string(),
//!         status: ContributionStatus::Submitted,
//!         priority: 3,
//!         created_at: now,
//!         validated_at: None,
//!         agent_id: 1,
//!         service: Some("DGM Nord".to_string()),
//!     },
//!     Contribution {
//!         id: 2,
//!         title: "Attaque sur Goma".to_string(),
//!         content: "tirs entendus au nord".to_string(),
//!         status: ContributionStatus::Submitted,
//!         priority: 3,
//!         created_at: now,
//!         validated_at: None,
//!         agent_id: 2,
//!         service: Some("DGM Nord".to_string()),
//!     },
//! ];
//!
//! let signals = signals::detect(&reports, now, 72, 5);
//! assert!(!signals.is_empty());
//! assert!(signals.windows(2).all(|p| p[0].score >= p[1].score));
//! ```

pub mod audit;
pub mod constants;
pub mod error;
pub mod logic;
pub mod models;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use logic::briefing::{chief_command_view, presidency_briefing, ChiefCommandView, PresidencyBriefing};
pub use logic::crosscheck::CrossCheckTicket;
pub use logic::level::{AlertLevel, Trend};
pub use logic::preventive::{DetectionThresholds, PreventiveAlert};
pub use logic::signals::WeakSignal;
