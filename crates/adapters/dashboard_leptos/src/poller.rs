//! Repeating dashboard refresh timer.

use std::time::Duration;

use gloo_timers::callback::Interval;

/// Owner of the one refresh interval of the page.
///
/// Dropping the inner [`Interval`] clears it in the browser, so stopping is
/// just releasing the handle.
#[derive(Default)]
pub struct Poller {
    interval: Option<Interval>,
}

impl Poller {
    /// Run `tick` now, then every `period`. Restarts if already running.
    pub fn start(&mut self, period: Duration, mut tick: impl FnMut() + 'static) {
        self.stop();
        tick();
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        self.interval = Some(Interval::new(millis, tick));
        tracing::debug!(millis, "poller started");
    }

    /// Stop ticking. No-op when not running.
    pub fn stop(&mut self) {
        if self.interval.take().is_some() {
            tracing::debug!("poller stopped");
        }
    }

    /// Whether the interval is armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}
