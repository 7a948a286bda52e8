//! Recent daemon events for the events screen.

use std::collections::VecDeque;
use std::sync::RwLock;

use crate::lock;
use crate::models::DaemonEvent;

/// Events kept by default.
pub const EVENT_LOG_CAPACITY: usize = 50;

/// Bounded log of the most recent daemon events; the oldest event is
/// evicted first.
#[derive(Debug)]
pub struct EventLog {
    events: RwLock<VecDeque<DaemonEvent>>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn push(&self, event: DaemonEvent) {
        if self.capacity == 0 {
            return;
        }
        let mut events = lock::write(&self.events);
        if events.len() == self.capacity {
            events.pop_front();
        }
        events.push_back(event);
    }

    /// Logged events, newest first.
    pub fn recent(&self) -> Vec<DaemonEvent> {
        lock::read(&self.events).iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        lock::read(&self.events).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(EVENT_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_is_newest_first() {
        let log = EventLog::new(10);
        log.push(DaemonEvent::new("container", "create", "a"));
        log.push(DaemonEvent::new("container", "start", "a"));

        let actions: Vec<String> = log.recent().into_iter().map(|e| e.action).collect();
        assert_eq!(actions, vec!["start", "create"]);
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let log = EventLog::new(2);
        for action in ["one", "two", "three"] {
            log.push(DaemonEvent::new("network", action, "n"));
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.recent()[1].action, "two");
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let log = EventLog::new(0);
        log.push(DaemonEvent::new("image", "pull", "i"));
        assert!(log.is_empty());
    }
}
