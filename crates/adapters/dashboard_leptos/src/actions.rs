//! Bridge between DOM events and the page controller.
//!
//! Every action spawns its own task on the browser's event loop, so a slow
//! or hung request never delays another action or the poller.

use std::future::Future;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use picoguard_app::controller::{DashboardController, FollowUp};

use crate::api::HttpDashboardApi;
use crate::notifier::BrowserAlert;
use crate::store::SignalStore;

/// The controller as wired in the browser.
pub type Controller = DashboardController<HttpDashboardApi, BrowserAlert, SignalStore>;

/// Copyable handle dispatching operator actions and polls to the controller.
#[derive(Clone, Copy)]
pub struct Actions {
    controller: StoredValue<Rc<Controller>, LocalStorage>,
}

impl Actions {
    /// Take ownership of the controller for the lifetime of the reactive owner.
    #[must_use]
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    fn spawn<F, Fut>(self, op: F)
    where
        F: FnOnce(Rc<Controller>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.controller.get_value()));
    }

    /// Refresh the status indicator and the port panel.
    pub fn check_status(self) {
        self.spawn(|ctrl| async move { ctrl.check_status().await });
    }

    /// Refresh counters and the event log.
    pub fn update_dashboard(self) {
        self.spawn(|ctrl| async move { ctrl.update_dashboard().await });
    }

    /// Open the serial link.
    pub fn connect(self) {
        self.spawn(|ctrl| async move { ctrl.connect().await });
    }

    /// Close the serial link.
    pub fn disconnect(self) {
        self.spawn(|ctrl| async move { ctrl.disconnect().await });
    }

    /// Generate test data, then refresh early once the bridge has it.
    pub fn generate_test_data(self) {
        self.spawn(|ctrl| async move {
            if let FollowUp::Refresh { after } = ctrl.generate_test_data().await {
                let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
                TimeoutFuture::new(millis).await;
                ctrl.update_dashboard().await;
            }
        });
    }

    /// Send `command`, calling `on_sent` once the bridge accepted it.
    pub fn send_command(self, command: String, on_sent: impl FnOnce() + 'static) {
        self.spawn(|ctrl| async move {
            if ctrl.send_command(&command).await {
                on_sent();
            }
        });
    }

    /// Clear the visible log. Synchronous, no request.
    pub fn clear_logs(self) {
        self.controller.with_value(|ctrl| ctrl.clear_logs());
    }
}

/// Access the actions from Leptos context.
///
/// Must be called within a component tree below [`App`](crate::App).
pub fn use_actions() -> Actions {
    use_context::<Actions>().expect("Actions not found in context")
}
