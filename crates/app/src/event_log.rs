//! Rolling event log shown in the `eventsContainer` panel.
//!
//! The log has two writers. Poll ticks replace it wholesale with the
//! bridge's list; operator actions prepend locally synthesized records that
//! survive only until the next applied tick.

use std::collections::VecDeque;

use picoguard_domain::event::EventRecord;

/// Placeholder shown when the bridge has no events.
pub const WAITING_MESSAGE: &str = "Waiting for events...";

/// Placeholder shown after the operator clears the log.
pub const CLEARED_MESSAGE: &str = "Logs cleared";

/// Event log, newest entry first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLog {
    entries: VecDeque<EventRecord>,
    local_capacity: usize,
}

impl EventLog {
    /// Create a log showing the waiting placeholder.
    ///
    /// `local_capacity` bounds the log whenever a local record is pushed.
    #[must_use]
    pub fn new(local_capacity: usize) -> Self {
        Self {
            entries: VecDeque::from([EventRecord::placeholder(WAITING_MESSAGE)]),
            local_capacity: local_capacity.max(1),
        }
    }

    /// Replace the whole log with the bridge's list.
    ///
    /// `events` is oldest first; the log stores it newest first. No cap is
    /// applied here, the bridge bounds its own list.
    pub fn replace_from_server(&mut self, events: Vec<EventRecord>) {
        if events.is_empty() {
            self.reset_to(WAITING_MESSAGE);
            return;
        }
        self.entries = events.into_iter().rev().collect();
    }

    /// Prepend a locally synthesized record, evicting the oldest entries
    /// beyond the local capacity.
    pub fn push_local(&mut self, record: EventRecord) {
        self.entries.push_front(record);
        self.entries.truncate(self.local_capacity);
    }

    /// Replace the log with the single "cleared" placeholder.
    pub fn clear(&mut self) {
        self.reset_to(CLEARED_MESSAGE);
    }

    fn reset_to(&mut self, message: &str) {
        self.entries.clear();
        self.entries.push_back(EventRecord::placeholder(message));
    }

    /// Entries in display order, newest first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &EventRecord> {
        self.entries.iter()
    }

    /// Number of displayed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: an empty log shows a placeholder instead.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    #[must_use]
    pub fn newest(&self) -> Option<&EventRecord> {
        self.entries.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picoguard_domain::event::EventKind;

    fn server_event(n: usize) -> EventRecord {
        EventRecord::new(
            EventKind::Info,
            format!("event {n}"),
            format!("2024-05-01 00:00:{n:02}"),
        )
    }

    fn messages(log: &EventLog) -> Vec<&str> {
        log.entries().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn should_start_with_waiting_placeholder() {
        let log = EventLog::new(50);
        assert_eq!(messages(&log), vec![WAITING_MESSAGE]);
        assert_eq!(log.newest().unwrap().timestamp, "--");
    }

    #[test]
    fn should_reverse_server_order() {
        let mut log = EventLog::new(50);
        log.replace_from_server((0..5).map(server_event).collect());
        assert_eq!(
            messages(&log),
            vec!["event 4", "event 3", "event 2", "event 1", "event 0"]
        );
    }

    #[test]
    fn should_show_waiting_placeholder_for_empty_server_list() {
        let mut log = EventLog::new(50);
        log.replace_from_server(vec![server_event(1)]);
        log.replace_from_server(Vec::new());
        assert_eq!(messages(&log), vec![WAITING_MESSAGE]);
    }

    #[test]
    fn should_not_cap_server_refresh() {
        let mut log = EventLog::new(50);
        log.replace_from_server((0..100).map(server_event).collect());
        assert_eq!(log.len(), 100);
    }

    #[test]
    fn should_prepend_local_records() {
        let mut log = EventLog::new(50);
        log.replace_from_server(vec![server_event(0)]);
        log.push_local(EventRecord::placeholder("local"));
        assert_eq!(messages(&log), vec!["local", "event 0"]);
    }

    #[test]
    fn should_evict_oldest_when_local_records_exceed_capacity() {
        let mut log = EventLog::new(50);
        log.clear();
        for n in 0..50 {
            log.push_local(EventRecord::placeholder(format!("local {n}")));
        }
        assert_eq!(log.len(), 50);
        assert_eq!(log.entries().last().unwrap().message, "local 0");

        log.push_local(EventRecord::placeholder("local 50"));
        assert_eq!(log.len(), 50);
        assert_eq!(log.newest().unwrap().message, "local 50");
        assert_eq!(log.entries().last().unwrap().message, "local 1");
    }

    #[test]
    fn should_trim_large_server_list_on_next_local_push() {
        let mut log = EventLog::new(50);
        log.replace_from_server((0..80).map(server_event).collect());
        log.push_local(EventRecord::placeholder("local"));
        assert_eq!(log.len(), 50);
        assert_eq!(log.newest().unwrap().message, "local");
    }

    #[test]
    fn should_clear_to_single_placeholder() {
        let mut log = EventLog::new(50);
        log.replace_from_server((0..10).map(server_event).collect());
        log.push_local(EventRecord::placeholder("local"));
        log.clear();
        assert_eq!(messages(&log), vec![CLEARED_MESSAGE]);
        assert!(!log.is_empty());
    }

    #[test]
    fn should_restore_server_list_after_clear() {
        let mut log = EventLog::new(50);
        log.clear();
        log.replace_from_server(vec![server_event(0), server_event(1)]);
        assert_eq!(messages(&log), vec!["event 1", "event 0"]);
    }
}
