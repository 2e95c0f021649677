//! Browser tests for the rendered dashboard, run with `wasm-pack test --headless`.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use picoguard_app::config::DashboardConfig;
use picoguard_app::controller::DashboardController;
use picoguard_app::state::DashboardState;
use picoguard_dashboard::actions::Actions;
use picoguard_dashboard::api::HttpDashboardApi;
use picoguard_dashboard::components::{EventLogPanel, PortInfo, StatusPanel};
use picoguard_dashboard::notifier::BrowserAlert;
use picoguard_dashboard::poller::Poller;
use picoguard_dashboard::store::SignalStore;
use picoguard_domain::event::{EventKind, EventRecord};
use picoguard_domain::status::{ConnectionState, ConnectionStatus};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let parent = document
        .create_element("div")
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>();
    document.body().unwrap().append_child(&parent).unwrap();
    parent
}

#[wasm_bindgen_test]
fn should_render_message_markup_as_text() {
    let parent = mount_point();
    let mut state = DashboardState::new(50);
    state.log.push_local(EventRecord::new(
        EventKind::Blocked,
        "<b>BadUSB</b> & <script>x()</script>",
        "2024-05-01 13:37:00",
    ));

    let _handle = leptos::mount::mount_to(parent.clone(), move || {
        let state = RwSignal::new(state);
        view! { <EventLogPanel state=state.read_only()/> }
    });

    let message = parent
        .query_selector(".event-item.blocked .event-message")
        .unwrap()
        .unwrap();
    assert_eq!(
        message.text_content().unwrap(),
        "<b>BadUSB</b> & <script>x()</script>"
    );
    assert!(message.query_selector("b").unwrap().is_none());
    assert!(message.inner_html().contains("&lt;b&gt;BadUSB&lt;/b&gt; &amp;"));
    parent.remove();
}

#[wasm_bindgen_test]
fn should_render_newest_entry_first() {
    let parent = mount_point();
    let mut state = DashboardState::new(50);
    state.log.replace_from_server(vec![
        EventRecord::new(EventKind::Info, "first", "t1"),
        EventRecord::new(EventKind::Allowed, "second", "t2"),
    ]);

    let _handle = leptos::mount::mount_to(parent.clone(), move || {
        let state = RwSignal::new(state);
        view! { <EventLogPanel state=state.read_only()/> }
    });

    let items = parent.query_selector_all(".event-message").unwrap();
    assert_eq!(items.length(), 2);
    assert_eq!(items.item(0).unwrap().text_content().unwrap(), "second");
    assert_eq!(items.item(1).unwrap().text_content().unwrap(), "first");
    parent.remove();
}

#[wasm_bindgen_test]
fn should_render_no_ports_notice() {
    let parent = mount_point();
    let mut state = DashboardState::new(50);
    state.apply_status(&ConnectionStatus::default());

    let _handle = leptos::mount::mount_to(parent.clone(), move || {
        let state = RwSignal::new(state);
        view! { <PortInfo state=state.read_only()/> }
    });

    let panel = parent.query_selector(".port-info").unwrap().unwrap();
    assert_eq!(
        panel.text_content().unwrap(),
        "No serial ports found. Make sure your Pico is connected."
    );
    parent.remove();
}

fn mount_status_panel(parent: &web_sys::HtmlElement, connection: ConnectionState) -> impl Sized {
    let mut state = DashboardState::new(50);
    state.connection = connection;
    leptos::mount::mount_to(parent.clone(), move || {
        let state = RwSignal::new(state);
        let config = DashboardConfig::default();
        provide_context(Actions::new(DashboardController::new(
            HttpDashboardApi::new(&config),
            BrowserAlert,
            SignalStore(state),
            config,
        )));
        view! { <StatusPanel state=state.read_only()/> }
    })
}

fn element(parent: &web_sys::HtmlElement, selector: &str) -> web_sys::Element {
    parent.query_selector(selector).unwrap().unwrap()
}

#[wasm_bindgen_test]
fn should_offer_only_disconnect_while_connected() {
    let parent = mount_point();
    let _handle = mount_status_panel(&parent, ConnectionState::Connected);

    assert!(element(&parent, "#connectBtn").has_attribute("disabled"));
    assert!(!element(&parent, "#disconnectBtn").has_attribute("disabled"));
    assert_eq!(
        element(&parent, "#statusDot").class_name(),
        "status-dot connected"
    );
    assert_eq!(
        element(&parent, "#statusText").text_content().unwrap(),
        "Connected"
    );
    parent.remove();
}

#[wasm_bindgen_test]
fn should_offer_only_connect_while_disconnected() {
    let parent = mount_point();
    let _handle = mount_status_panel(&parent, ConnectionState::Disconnected);

    assert!(!element(&parent, "#connectBtn").has_attribute("disabled"));
    assert!(element(&parent, "#disconnectBtn").has_attribute("disabled"));
    assert_eq!(
        element(&parent, "#statusDot").class_name(),
        "status-dot disconnected"
    );
    assert_eq!(
        element(&parent, "#statusText").text_content().unwrap(),
        "Disconnected"
    );
    parent.remove();
}

#[wasm_bindgen_test]
fn should_tick_immediately_and_stop_on_request() {
    let ticks = Rc::new(Cell::new(0));
    let counter = ticks.clone();
    let mut poller = Poller::default();

    poller.start(Duration::from_secs(60), move || counter.set(counter.get() + 1));
    assert_eq!(ticks.get(), 1);
    assert!(poller.is_running());

    poller.stop();
    assert!(!poller.is_running());
}
