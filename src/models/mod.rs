//! Data models
//!
//! Read-side records owned by the reporting store. The analysis engines
//! only ever read them; mutation happens in the surrounding portal.

pub mod agent;
pub mod contribution;
pub mod mission;

pub use agent::*;
pub use contribution::*;
pub use mission::*;
