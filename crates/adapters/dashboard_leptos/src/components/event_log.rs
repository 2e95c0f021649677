//! Event log panel.

use leptos::prelude::*;
use picoguard_app::state::DashboardState;
use picoguard_domain::event::EventRecord;

/// The rolling event log, newest entry first.
///
/// Messages are inserted as text nodes, so markup in a message shows
/// literally.
#[component]
pub fn EventLogPanel(
    /// Dashboard state to render.
    state: ReadSignal<DashboardState>,
) -> impl IntoView {
    let entries = Memo::new(move |_| state.with(|s| s.log.entries().cloned().collect::<Vec<_>>()));

    view! {
        <div id="eventsContainer" class="events-container">
            {move || {
                entries
                    .get()
                    .into_iter()
                    .map(|record| view! { <EventItem record=record/> })
                    .collect_view()
            }}
        </div>
    }
}

/// A single entry of the log.
#[component]
fn EventItem(
    /// The record to display.
    record: EventRecord,
) -> impl IntoView {
    view! {
        <div class=format!("event-item {}", record.kind.style_token())>
            <span class="event-time">{record.timestamp}</span>
            <span class="event-message">{record.message}</span>
        </div>
    }
}
