//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the page controller and the browser.
//! None of them require `Send`: the dashboard runs on a single-threaded
//! event loop and adapters hold `!Send` handles (fetch futures, signals).

pub mod dashboard_api;
pub mod notifier;
pub mod state_store;

pub use dashboard_api::DashboardApi;
pub use notifier::Notifier;
pub use state_store::StateStore;
