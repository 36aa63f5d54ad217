//! Event System
//!
//! Activity events shown in the dashboard's activity log

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// The background task fetching transactions from the API.
    Loader,
    /// The dashboard view itself (activation, retries, user input).
    View,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn loader_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Loader, msg, event_type, log_level)
    }

    pub fn view(msg: String, event_type: EventType) -> Self {
        Self::new(Source::View, msg, event_type, LogLevel::Info)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_info_events_are_displayed() {
        let success = Event::loader_with_level(
            "Loaded".to_string(),
            EventType::Success,
            LogLevel::Debug,
        );
        assert!(success.should_display());

        let error =
            Event::loader_with_level("Failed".to_string(), EventType::Error, LogLevel::Error);
        assert!(error.should_display());
    }

    #[test]
    fn test_display_format() {
        let event = Event::view("Dashboard activated".to_string(), EventType::Refresh);
        let rendered = event.to_string();
        assert!(rendered.starts_with("Refresh ["));
        assert!(rendered.ends_with("] Dashboard activated"));
        assert_eq!(event.source, Source::View);
    }
}
