//! Blocking alerts through `window.alert`.

use picoguard_app::ports::Notifier;

/// [`Notifier`] showing the browser's modal alert dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(%message, "no window to alert in");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            tracing::warn!(?err, %message, "failed to show alert");
        }
    }
}
