//! Subscription Workbench - Back-office subscription administration
//!
//! This crate implements the subscription lifecycle, the plan catalog and a
//! read-only workbench that combines revenue, objectives and subscription
//! listings into one snapshot, degrading each part independently when its
//! source is unavailable.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
