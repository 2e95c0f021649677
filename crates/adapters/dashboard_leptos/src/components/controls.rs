//! Log controls and the command form.

use leptos::prelude::*;

use crate::actions::use_actions;

/// Test data and clear buttons.
#[component]
pub fn LogControls() -> impl IntoView {
    let actions = use_actions();

    view! {
        <div class="log-controls">
            <button id="testBtn" class="btn" on:click=move |_| actions.generate_test_data()>
                "Generate Test Data"
            </button>
            <button id="clearBtn" class="btn" on:click=move |_| actions.clear_logs()>
                "Clear Logs"
            </button>
        </div>
    }
}

/// Free-text command forwarded to the Pico.
#[component]
pub fn CommandForm() -> impl IntoView {
    let actions = use_actions();
    let (command, set_command) = signal(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        actions.send_command(command.get_untracked(), move || set_command.set(String::new()));
    };

    view! {
        <form class="command-form" on:submit=submit>
            <input
                id="commandInput"
                type="text"
                placeholder="Command for the Pico"
                prop:value=command
                on:input=move |ev| set_command.set(event_target_value(&ev))
            />
            <button id="sendBtn" class="btn" type="submit">
                "Send"
            </button>
        </form>
    }
}
