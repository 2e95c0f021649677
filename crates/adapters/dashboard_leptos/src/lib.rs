//! # picoguard-dashboard
//!
//! Leptos CSR dashboard for the picoguard BadUSB defense bridge.
//!
//! The page polls `GET /api/events` on a fixed interval, checks
//! `GET /api/status` once at mount, and relays operator actions as POSTs.
//! All rules live in `picoguard-app`; this crate wires them to `fetch`,
//! `window.alert`, a Leptos signal and a browser interval.

use leptos::prelude::*;
use picoguard_app::config::DashboardConfig;
use picoguard_app::controller::DashboardController;
use picoguard_app::state::DashboardState;

pub mod actions;
pub mod api;
pub mod components;
pub mod config;
pub mod logging;
pub mod notifier;
pub mod poller;
pub mod store;

use actions::Actions;
use api::HttpDashboardApi;
use components::{CommandForm, EventLogPanel, LogControls, PortInfo, StatCard, StatusPanel};
use notifier::BrowserAlert;
use poller::Poller;
use store::SignalStore;

/// Root application component.
///
/// Checks the status once, then refreshes the dashboard immediately and on
/// every poll interval until the component is unmounted.
#[component]
pub fn App(
    /// Client configuration, usually from [`config::load`].
    config: DashboardConfig,
) -> impl IntoView {
    let state = RwSignal::new(DashboardState::new(config.local_log_capacity));
    let poll_interval = config.poll_interval();
    let api = HttpDashboardApi::new(&config);
    let actions = Actions::new(DashboardController::new(
        api,
        BrowserAlert,
        SignalStore(state),
        config,
    ));
    provide_context(actions);

    actions.check_status();

    let poller = StoredValue::new_local(Poller::default());
    poller.update_value(|p| p.start(poll_interval, move || actions.update_dashboard()));
    on_cleanup(move || {
        poller.update_value(Poller::stop);
    });

    let state = state.read_only();
    let stat = move |read: fn(&DashboardState) -> String| {
        Signal::derive(move || state.with(|s| read(s)))
    };

    view! {
        <div class="container">
            <header>
                <h1>"BadUSB Defense Dashboard"</h1>
                <StatusPanel state=state/>
            </header>

            <section class="card">
                <h2>"Serial Connection"</h2>
                <PortInfo state=state/>
                <CommandForm/>
            </section>

            <section class="stats">
                <StatCard
                    id="totalEvents"
                    label="Total Events"
                    value=stat(|s| s.stats.total_events.to_string())
                />
                <StatCard
                    id="blockedDevices"
                    label="Blocked Devices"
                    value=stat(|s| s.stats.blocked_devices.to_string())
                />
                <StatCard
                    id="allowedDevices"
                    label="Allowed Devices"
                    value=stat(|s| s.stats.allowed_devices.to_string())
                />
                <StatCard
                    id="lastUpdate"
                    label="Last Update"
                    value=stat(|s| s.stats.last_update_label().to_string())
                />
            </section>

            <section class="card">
                <h2>"Event Log"</h2>
                <LogControls/>
                <EventLogPanel state=state/>
            </section>
        </div>
    }
}
