//! Connection indicator with the connect and disconnect buttons.

use leptos::prelude::*;
use picoguard_app::state::DashboardState;

use crate::actions::use_actions;

/// Status dot, status label, and the two mutually exclusive connection buttons.
#[component]
pub fn StatusPanel(
    /// Dashboard state to render.
    state: ReadSignal<DashboardState>,
) -> impl IntoView {
    let actions = use_actions();
    let connection = Memo::new(move |_| state.with(|s| s.connection));

    view! {
        <div class="status">
            <span
                id="statusDot"
                class=move || format!("status-dot {}", connection.get().style_token())
            ></span>
            <span id="statusText">{move || connection.get().label()}</span>
        </div>
        <div class="connection-actions">
            <button
                id="connectBtn"
                class="btn btn-primary"
                disabled=move || !connection.get().can_connect()
                on:click=move |_| actions.connect()
            >
                "Connect to Pico"
            </button>
            <button
                id="disconnectBtn"
                class="btn btn-secondary"
                disabled=move || !connection.get().can_disconnect()
                on:click=move |_| actions.disconnect()
            >
                "Disconnect"
            </button>
        </div>
    }
}
