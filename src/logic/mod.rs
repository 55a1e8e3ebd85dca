//! Logic Module - Analysis Engines
//!
//! One directory per engine: weak-signal detection, preventive rules,
//! command posture, plus the briefing assembly the command screens
//! call.

pub mod briefing;
pub mod crosscheck;
pub mod level;
pub mod posture;
pub mod preventive;
pub mod reliability;
pub mod signals;
