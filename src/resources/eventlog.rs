//! Append-only log of scene events shown in the HUD.

use bevy_ecs::prelude::Resource;
use log::info;

/// Ordered, append-only list of human-readable scene events.
#[derive(Resource, Debug, Clone, Default)]
pub struct EventLog {
    entries: Vec<String>,
}

impl EventLog {
    /// Log seeded with the start-up entries.
    pub fn new() -> Self {
        let mut log = Self::default();
        log.push("System: Simulation started");
        log.push("System: Normal operation");
        log
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        info!("[scene] {}", entry);
        self.entries.push(entry);
    }

    /// The last `n` entries, oldest first.
    pub fn latest(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_system_entries() {
        let log = EventLog::new();
        assert_eq!(
            log.entries(),
            ["System: Simulation started", "System: Normal operation"]
        );
    }

    #[test]
    fn latest_returns_tail_in_order() {
        let mut log = EventLog::default();
        for i in 0..5 {
            log.push(format!("entry {i}"));
        }
        assert_eq!(log.latest(3), ["entry 2", "entry 3", "entry 4"]);
        assert_eq!(log.latest(10).len(), 5);
    }

    #[test]
    fn latest_on_empty_log() {
        let log = EventLog::default();
        assert!(log.latest(3).is_empty());
        assert!(log.is_empty());
    }
}
