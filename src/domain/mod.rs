//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `subscription` - Subscription aggregate and lifecycle
//! - `plan` - Plan catalog entries and validation
//! - `objectives` - Per-business revenue targets
//! - `revenue` - Daily revenue series from order reporting
//! - `workbench` - Derived operational dashboard model

pub mod foundation;
pub mod objectives;
pub mod plan;
pub mod revenue;
pub mod subscription;
pub mod workbench;
