//! Revenue objectives domain module.
//!
//! Businesses may configure daily, weekly and monthly revenue targets.
//! Unconfigured targets fall back to system defaults, never to zero.

mod targets;

pub use targets::{BusinessObjectives, ObjectiveTargets};
