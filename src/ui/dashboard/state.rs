//! Dashboard state management
//!
//! Contains the dashboard state struct, its load state and the activation lifecycle

use crate::api::TransactionsApi;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::dates::DateStyle;
use crate::environment::Environment;
use crate::events::{Event, EventType};
use crate::model::{Balance, Transaction, TransactionsResponse};
use crate::ui::app::UIConfig;
use crate::workers::{DataLoader, EventSender, LoadOutcome};

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// What the dashboard currently has to show.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// The request is in flight (or the view was never activated).
    Loading,
    /// The last request succeeded.
    Loaded(TransactionsResponse),
    /// The last request failed; holds a message for the user.
    Failed(String),
}

impl LoadState {
    pub fn transactions(&self) -> &[Transaction] {
        match self {
            LoadState::Loaded(response) => &response.transactions,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }

    pub fn balance(&self) -> Option<&Balance> {
        match self {
            LoadState::Loaded(response) => Some(&response.balance),
            LoadState::Loading | LoadState::Failed(_) => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Loading => "CARREGANDO",
            LoadState::Loaded(_) => "ATUALIZADO",
            LoadState::Failed(_) => "FALHOU",
        }
    }
}

/// The highlighted row: its key, and where it sits in the current list. Several rows can
/// share a key, so the position is what navigation moves.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Selection {
    key: String,
    index: usize,
}

/// A running activation: the load in flight and the token that ends it.
#[derive(Debug)]
struct Activation {
    cancel: CancellationToken,
    outcome: oneshot::Receiver<LoadOutcome>,
    handle: JoinHandle<()>,
}

#[derive(Debug)]
pub struct DashboardState {
    /// The environment the API client talks to.
    pub environment: Environment,
    /// The start time of the application.
    pub start_time: Instant,
    /// How transaction dates are written.
    pub date_style: DateStyle,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Animation tick counter
    pub tick: usize,

    load_state: LoadState,
    selected: Option<Selection>,
    api: Arc<dyn TransactionsApi>,
    event_sender: EventSender,
    activation: Option<Activation>,
}

impl DashboardState {
    /// Creates an inactive dashboard. Nothing is fetched until [`DashboardState::activate`].
    pub fn new(
        api: Arc<dyn TransactionsApi>,
        event_sender: EventSender,
        start_time: Instant,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            environment: api.environment().clone(),
            start_time,
            date_style: ui_config.date_style,
            with_background_color: ui_config.with_background_color,
            activity_logs: VecDeque::new(),
            pending_events: VecDeque::new(),
            tick: 0,
            load_state: LoadState::Loading,
            selected: None,
            api,
            event_sender,
            activation: None,
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_active(&self) -> bool {
        self.activation.is_some()
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.selected.as_ref().map(|s| s.key.as_str())
    }

    /// Position of the selected row in the current list.
    pub fn selected_index(&self) -> Option<usize> {
        let selection = self.selected.as_ref()?;
        (selection.index < self.load_state.transactions().len()).then_some(selection.index)
    }

    /// Starts the one-shot load for this activation. Does nothing if already active.
    pub fn activate(&mut self) {
        if self.activation.is_some() {
            return;
        }
        let cancel = CancellationToken::new();
        let loader = DataLoader::new(self.api.clone(), self.event_sender.clone());
        let (outcome, handle) = loader.spawn(cancel.clone());
        self.load_state = LoadState::Loading;
        self.activation = Some(Activation {
            cancel,
            outcome,
            handle,
        });
    }

    /// Ends the activation. A load still in flight is cancelled and its result never applied.
    pub fn deactivate(&mut self) {
        if let Some(activation) = self.activation.take() {
            activation.cancel.cancel();
            // Dropping the receiver closes the channel, so nothing can arrive later.
            drop(activation.outcome);
            drop(activation.handle);
        }
    }

    /// Loads again after a failure. Has no effect in any other state.
    pub fn retry(&mut self) -> bool {
        if !matches!(self.load_state, LoadState::Failed(_)) {
            return false;
        }
        self.deactivate();
        self.event_sender
            .try_send_event(Event::view("Retrying...".to_string(), EventType::Refresh));
        self.activate();
        true
    }

    /// Applies the outcome of the current activation if it has arrived.
    pub fn poll_outcome(&mut self) {
        let Some(activation) = self.activation.as_mut() else {
            return;
        };
        match activation.outcome.try_recv() {
            Ok(outcome) => self.apply_outcome(outcome),
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                if matches!(self.load_state, LoadState::Loading) {
                    self.load_state =
                        LoadState::Failed("The loader stopped without a result".to_string());
                }
            }
        }
    }

    /// Replaces the whole state with a load outcome.
    pub(crate) fn apply_outcome(&mut self, outcome: LoadOutcome) {
        self.load_state = match outcome {
            LoadOutcome::Loaded(response) => LoadState::Loaded(response),
            LoadOutcome::Failed(message) => LoadState::Failed(message),
        };
        self.reconcile_selection();
    }

    /// Keeps the selection on the same transaction id when it is still present, otherwise
    /// falls back to the first row. With repeated ids the row at the old position wins,
    /// then the first row carrying the id. A failed load leaves the selection for the next one.
    fn reconcile_selection(&mut self) {
        if !matches!(self.load_state, LoadState::Loaded(_)) {
            return;
        }
        let transactions = self.load_state.transactions();
        let kept = self.selected.as_ref().and_then(|selection| {
            let at_old_position = transactions
                .get(selection.index)
                .is_some_and(|t| t.id == selection.key);
            if at_old_position {
                Some(selection.index)
            } else {
                transactions.iter().position(|t| t.id == selection.key)
            }
        });
        let index = kept.or_else(|| (!transactions.is_empty()).then_some(0));
        self.selected = index.map(|index| Selection {
            key: transactions[index].id.clone(),
            index,
        });
    }

    /// Moves the selection by `delta` rows, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        let transactions = self.load_state.transactions();
        if transactions.is_empty() {
            return;
        }
        let current = self.selected_index().unwrap_or(0) as isize;
        let last = transactions.len() as isize - 1;
        let next = (current + delta).clamp(0, last) as usize;
        self.selected = Some(Selection {
            key: transactions[next].id.clone(),
            index: next,
        });
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}

impl Drop for DashboardState {
    fn drop(&mut self) {
        self.deactivate();
    }
}
