use leptos::prelude::*;
use picoguard_dashboard::App;

fn main() {
    console_error_panic_hook::set_once();

    let (config, issues) = picoguard_dashboard::config::load();
    picoguard_dashboard::logging::init(&config.log_filter);
    for issue in issues {
        tracing::warn!(%issue, "ignoring dashboard configuration override");
    }

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
