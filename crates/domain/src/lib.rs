//! # picoguard-domain
//!
//! Pure domain model for the picoguard BadUSB defense dashboard.
//!
//! ## Responsibilities
//! - Mirror the bridge's **connection status** (connected flag, selected port,
//!   serial ports the host can see)
//! - Mirror the bridge's **stats** counters (total, blocked, allowed)
//! - Define **event records** and the closed set of event kinds used for styling
//! - Define the **action outcomes** returned by the bridge's POST endpoints
//! - Timestamp helpers for locally synthesized records
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

mod de;

pub mod action;
pub mod event;
pub mod stats;
pub mod status;
pub mod time;
