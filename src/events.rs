//! Event System
//!
//! Records of fired dashboard updates, consumed by the headless console

use crate::logging::{LogLevel, should_log_with_env};
use crate::scheduler::Subsystem;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// Readouts were resampled
    Refresh,
    /// A line was added to the status log
    Message,
    /// The warning overlay was raised
    Alert,
    /// The status board changed
    StateChange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub subsystem: Subsystem,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(subsystem: Subsystem, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            subsystem,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn refresh(msg: String) -> Self {
        Self::new(Subsystem::Data, msg, EventType::Refresh, LogLevel::Debug)
    }

    pub fn message(subsystem: Subsystem, msg: String) -> Self {
        Self::new(subsystem, msg, EventType::Message, LogLevel::Info)
    }

    pub fn alert(msg: String) -> Self {
        Self::new(Subsystem::Radar, msg, EventType::Alert, LogLevel::Warn)
    }

    pub fn state_change(msg: String) -> Self {
        Self::new(Subsystem::Status, msg, EventType::StateChange, LogLevel::Debug)
    }

    pub fn should_display(&self) -> bool {
        // Alerts always reach the console
        if self.event_type == EventType::Alert {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.subsystem, self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_assign_levels() {
        assert_eq!(Event::refresh("x".into()).log_level, LogLevel::Debug);
        assert_eq!(
            Event::message(Subsystem::Log, "x".into()).log_level,
            LogLevel::Info
        );
        assert_eq!(Event::alert("x".into()).log_level, LogLevel::Warn);
        assert_eq!(Event::state_change("x".into()).subsystem, Subsystem::Status);
    }

    #[test]
    fn alerts_are_always_displayed() {
        assert!(Event::alert("ANGEL APPROACHING".into()).should_display());
    }

    #[test]
    fn display_includes_subsystem_and_message() {
        let event = Event::message(Subsystem::Log, "A.T. FIELD ACTIVATED.".into());
        let line = event.to_string();
        assert!(line.starts_with("Message ["));
        assert!(line.ends_with("log: A.T. FIELD ACTIVATED."));
    }
}
