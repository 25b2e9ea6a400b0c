//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//! Handlers receive their ports through constructor injection.

pub mod plan;
pub mod subscription;
pub mod workbench;

#[cfg(test)]
pub(crate) mod test_support;
