//! Time and timestamp helpers.

use chrono::{DateTime, Local};

/// Local wall-clock timestamp used for records synthesized in the browser.
pub type Timestamp = DateTime<Local>;

/// Format used by the bridge for event timestamps (`2024-05-01 13:37:00`).
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Return the current local time.
#[must_use]
pub fn now() -> Timestamp {
    Local::now()
}

/// Render a timestamp the same way the bridge renders its own.
#[must_use]
pub fn display(ts: &Timestamp) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_return_current_local_time() {
        let before = Local::now();
        let ts = now();
        let after = Local::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_display_like_the_bridge() {
        let ts = Local.with_ymd_and_hms(2024, 5, 1, 13, 37, 5).unwrap();
        assert_eq!(display(&ts), "2024-05-01 13:37:05");
    }
}
