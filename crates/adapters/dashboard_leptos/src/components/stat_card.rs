//! Stat card component for displaying a labelled counter.

use leptos::prelude::*;

/// A card displaying a label and a reactive value.
#[component]
pub fn StatCard(
    /// DOM id of the value element.
    id: &'static str,
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// The value to display.
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span id=id class="stat-value">{move || value.get()}</span>
        </div>
    }
}
