//! Serial port panel.

use leptos::prelude::*;
use picoguard_app::state::{DashboardState, PortPanel};

/// Lists the serial ports the bridge host sees, then the port in use.
#[component]
pub fn PortInfo(
    /// Dashboard state to render.
    state: ReadSignal<DashboardState>,
) -> impl IntoView {
    let ports = Memo::new(move |_| state.with(|s| s.ports.clone()));

    view! {
        <div id="portInfo" class="port-info">
            {move || match ports.get() {
                PortPanel::Checking => view! {
                    <em>"Checking for serial ports\u{2026}"</em>
                }
                .into_any(),
                PortPanel::NoPorts => view! {
                    <strong>"No serial ports found."</strong>
                    " Make sure your Pico is connected."
                }
                .into_any(),
                PortPanel::Ports { lines, current } => view! {
                    <strong>"Available Ports:"</strong>
                    {lines
                        .into_iter()
                        .map(|line| view! { <br/> {line} })
                        .collect_view()}
                    {current
                        .map(|port| {
                            view! {
                                <br/>
                                <strong>"Current Port:"</strong>
                                " "
                                {port}
                            }
                        })}
                }
                .into_any(),
            }}
        </div>
    }
}
