//! # picoguard-app
//!
//! Application layer: the dashboard page controller and **port definitions**
//! (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `DashboardApi`: the bridge's `/api/*` endpoints
//!   - `Notifier`: blocking, user-facing alerts
//!   - `StateStore`: where the rendered dashboard state lives
//! - Provide the **page controller** (`DashboardController`) with one
//!   operation per user action or poll
//! - Own the view rules: port panel, rolling event log, stale-response
//!   sequencing
//! - Never block, never propagate errors out of an operation
//!
//! ## Dependency rule
//! Depends on `picoguard-domain` only (plus `tracing` for diagnostics).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod controller;
pub mod error;
pub mod event_log;
pub mod ports;
pub mod sequencer;
pub mod state;
