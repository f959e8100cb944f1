//! Rolling status log, newest line first.

use crate::buffer::EvictingBuffer;
use crate::consts::cli_consts::MAX_LOG_ENTRIES;
use chrono::Local;
use rand::Rng;
use rand::seq::SliceRandom;

pub const LOG_MESSAGES: [&str; 9] = [
    "EVA-01 SYNCHRONIZATION RATE STABLE.",
    "A.T. FIELD ACTIVATED.",
    "TARGET ANGEL DETECTED, SECTOR C-7.",
    "INITIATING DEFENSIVE PROTOCOLS.",
    "MAIN POWER AT 80%.",
    "WARNING: CORE TEMPERATURE RISING.",
    "MISSION CONTROL: AWAITING COMMANDS.",
    "EVA-02 STANDBY MODE.",
    "ATTENTION: TARGET APPROACHING. PROBABILITY OF ANGEL ATTACK.",
];

/// Written by the radar when blips appear.
pub const ANGEL_ALERT: &str = "ANGEL APPROACHING!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Wall clock time, `HH:MM:SS`
    pub timestamp: String,
    pub message: String,
}

impl LogEntry {
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            message: message.into(),
        }
    }

    pub fn line(&self) -> String {
        format!("[{}] {}", self.timestamp, self.message)
    }
}

#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: EvictingBuffer<LogEntry>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            entries: EvictingBuffer::new(MAX_LOG_ENTRIES),
        }
    }

    pub fn prepend(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
    }

    /// Prepend a message chosen uniformly from [`LOG_MESSAGES`] and return it.
    pub fn rotate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'static str {
        let message = LOG_MESSAGES.choose(rng).copied().unwrap_or(LOG_MESSAGES[0]);
        self.prepend(LogEntry::now(message));
        message
    }

    /// Entries newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn newest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn never_exceeds_ten_and_newest_first() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut log = LogBuffer::new();
        for i in 0..25 {
            let message = log.rotate(&mut rng);
            assert!(log.len() <= 10);
            assert_eq!(log.len(), (i + 1).min(10));
            assert_eq!(log.newest().map(|e| e.message.as_str()), Some(message));
        }
    }

    #[test]
    fn oldest_entry_falls_off_the_back() {
        let mut log = LogBuffer::new();
        for i in 0..11 {
            log.prepend(LogEntry::now(format!("entry {}", i)));
        }
        let messages: Vec<_> = log.entries().map(|e| e.message.clone()).collect();
        assert_eq!(messages.first().map(String::as_str), Some("entry 10"));
        assert_eq!(messages.last().map(String::as_str), Some("entry 1"));
    }

    #[test]
    fn rotation_uses_known_messages() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut log = LogBuffer::new();
        for _ in 0..50 {
            let message = log.rotate(&mut rng);
            assert!(LOG_MESSAGES.contains(&message));
        }
    }

    #[test]
    fn line_is_bracketed_timestamp() {
        let entry = LogEntry {
            timestamp: "12:34:56".to_string(),
            message: "EVA-02 STANDBY MODE.".to_string(),
        };
        assert_eq!(entry.line(), "[12:34:56] EVA-02 STANDBY MODE.");
        assert!(LogBuffer::default().is_empty());
    }
}
