//! One-shot transactions loading tied to the dashboard's active lifetime

use super::core::EventSender;
use crate::api::TransactionsApi;
use crate::error_classifier::ErrorClassifier;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::model::TransactionsResponse;
use log::{debug, info, log, warn};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// What a finished load hands back to the view.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(TransactionsResponse),
    Failed(String),
}

/// Fetches the dashboard data once.
pub struct DataLoader {
    api: Arc<dyn TransactionsApi>,
    event_sender: EventSender,
    classifier: ErrorClassifier,
}

impl DataLoader {
    pub fn new(api: Arc<dyn TransactionsApi>, event_sender: EventSender) -> Self {
        Self {
            api,
            event_sender,
            classifier: ErrorClassifier::new(),
        }
    }

    /// Runs the request. Returns `None` when `cancel` fires before the outcome is known;
    /// a response that arrives after cancellation is discarded.
    pub async fn load(&self, cancel: &CancellationToken) -> Option<LoadOutcome> {
        if cancel.is_cancelled() {
            return None;
        }

        self.event_sender
            .send_loader_event(
                format!("Fetching transactions from {}", self.api.environment().api_url()),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Transactions request cancelled before it resolved");
                return None;
            }
            result = self.api.get_transactions() => result,
        };

        if cancel.is_cancelled() {
            debug!("Discarding transactions response for a deactivated view");
            return None;
        }

        match result {
            Ok(response) => {
                let duplicates = response.duplicate_ids();
                if !duplicates.is_empty() {
                    warn!("Duplicate transaction ids in response: {:?}", duplicates);
                }
                info!("Loaded {} transactions", response.transactions.len());
                self.event_sender
                    .send_loader_event(
                        format!("Loaded {} transactions", response.transactions.len()),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                Some(LoadOutcome::Loaded(response))
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                log!(log::Level::from(log_level), "Failed to fetch transactions: {}", e);
                self.event_sender
                    .send_loader_event(
                        format!("Failed to fetch transactions: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
                Some(LoadOutcome::Failed(self.classifier.user_message(&e)))
            }
        }
    }

    /// Spawns the load. The receiver yields the outcome, or an error if the load was
    /// cancelled and produced nothing.
    pub fn spawn(
        self,
        cancel: CancellationToken,
    ) -> (oneshot::Receiver<LoadOutcome>, JoinHandle<()>) {
        let (sender, receiver) = oneshot::channel();
        let handle = tokio::spawn(async move {
            if let Some(outcome) = self.load(&cancel).await {
                if !cancel.is_cancelled() {
                    let _ = sender.send(outcome);
                }
            }
        });
        (receiver, handle)
    }
}
