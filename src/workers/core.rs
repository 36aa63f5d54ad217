//! Core worker utilities

use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send without waiting. Used from the UI thread, where a full queue just drops the event.
    pub fn try_send_event(&self, event: Event) {
        let _ = self.sender.try_send(event);
    }

    pub async fn send_loader_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::loader_with_level(message, event_type, log_level))
            .await;
    }
}
