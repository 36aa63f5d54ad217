//! Dashboard state update logic
//!
//! Per-frame updates: queued activity events and the loader outcome

use super::state::DashboardState;

impl DashboardState {
    /// Update the dashboard state for the next frame.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }

        self.poll_outcome();
    }
}

#[cfg(test)]
mod tests {
    use crate::api::MockTransactionsApi;
    use crate::api::error::ApiError;
    use crate::api::TransactionsApi;
    use crate::dates::DateStyle;
    use crate::environment::Environment;
    use crate::events::{Event, EventType};
    use crate::model::TransactionType;
    use crate::test_support::{GatedApi, sample_response, transaction};
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::state::{DashboardState, LoadState};
    use crate::ui::dashboard::view_model::balance_cards;
    use crate::workers::{EventSender, LoadOutcome};
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use tokio::sync::mpsc;

    fn ui_config() -> UIConfig {
        UIConfig::new(false, DateStyle::DAY_MONTH_YEAR)
    }

    fn dashboard(api: Arc<dyn TransactionsApi>) -> (DashboardState, mpsc::Receiver<Event>) {
        let (sender, receiver) = mpsc::channel(100);
        let state = DashboardState::new(api, EventSender::new(sender), Instant::now(), ui_config());
        (state, receiver)
    }

    /// Runs `update` until the state leaves `Loading` or two seconds pass.
    async fn settle(state: &mut DashboardState) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while matches!(state.load_state(), LoadState::Loading) && Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(5)).await;
            state.update();
        }
    }

    fn failing_api() -> Arc<dyn TransactionsApi> {
        let mut mock = MockTransactionsApi::new();
        mock.expect_environment().return_const(Environment::Local);
        mock.expect_get_transactions().returning(|| {
            Err(ApiError::Http {
                status: 503,
                message: "unavailable".to_string(),
            })
        });
        Arc::new(mock)
    }

    #[tokio::test]
    // Before activation nothing is fetched and the view shows the empty state.
    async fn test_initial_state_is_empty() {
        let mut mock = MockTransactionsApi::new();
        mock.expect_environment().return_const(Environment::Local);
        mock.expect_get_transactions().never();
        let (mut state, _events) = dashboard(Arc::new(mock));

        state.update();
        assert_eq!(state.load_state(), &LoadState::Loading);
        assert!(state.load_state().transactions().is_empty());
        assert_eq!(balance_cards(state.load_state().balance()), balance_cards(None));
        assert!(!state.is_active());
    }

    #[tokio::test]
    // Activation fetches once and the envelope replaces the state.
    async fn test_activation_loads_once() {
        let mut mock = MockTransactionsApi::new();
        mock.expect_environment().return_const(Environment::Local);
        mock.expect_get_transactions()
            .times(1)
            .returning(|| Ok(sample_response()));
        let (mut state, _events) = dashboard(Arc::new(mock));

        state.activate();
        // A second activation while active is ignored.
        state.activate();
        settle(&mut state).await;

        assert_eq!(state.load_state(), &LoadState::Loaded(sample_response()));
        assert_eq!(state.selected_key(), Some("t-1"));
    }

    #[tokio::test]
    // A rejected fetch keeps the empty rendering but is visibly a failure.
    async fn test_failed_fetch_is_visible() {
        let (mut state, _events) = dashboard(failing_api());

        state.activate();
        settle(&mut state).await;

        assert_eq!(
            state.load_state(),
            &LoadState::Failed("API answered with status 503".to_string())
        );
        assert!(state.load_state().transactions().is_empty());
        assert_eq!(balance_cards(state.load_state().balance()), balance_cards(None));
    }

    #[tokio::test]
    // Deactivating before the response arrives means the response is never applied.
    async fn test_deactivate_before_resolution_discards_result() {
        let api = Arc::new(GatedApi::new());
        let (mut state, _events) = dashboard(api.clone());

        state.activate();
        while api.calls() == 0 {
            tokio::task::yield_now().await;
        }
        state.deactivate();
        api.open();

        // Give the loader every chance to deliver.
        tokio::time::sleep(Duration::from_millis(50)).await;
        state.update();
        state.update();

        assert!(!state.is_active());
        assert_eq!(state.load_state(), &LoadState::Loading);
        assert!(state.load_state().transactions().is_empty());
        assert_eq!(api.completed(), 0);
    }

    #[tokio::test]
    // Dropping the view cancels the load as well.
    async fn test_drop_cancels_load() {
        let api = Arc::new(GatedApi::new());
        let (mut state, _events) = dashboard(api.clone());

        state.activate();
        while api.calls() == 0 {
            tokio::task::yield_now().await;
        }
        drop(state);
        api.open();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(api.completed(), 0);
    }

    #[tokio::test]
    async fn test_retry_only_after_failure() {
        let mut mock = MockTransactionsApi::new();
        mock.expect_environment().return_const(Environment::Local);
        let mut calls = 0;
        mock.expect_get_transactions().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Err(ApiError::Http {
                    status: 500,
                    message: String::new(),
                })
            } else {
                Ok(sample_response())
            }
        });
        let (mut state, _events) = dashboard(Arc::new(mock));

        state.activate();
        settle(&mut state).await;
        assert!(matches!(state.load_state(), LoadState::Failed(_)));

        assert!(state.retry());
        assert_eq!(state.load_state(), &LoadState::Loading);
        settle(&mut state).await;
        assert_eq!(state.load_state(), &LoadState::Loaded(sample_response()));

        // Nothing to retry once loaded.
        assert!(!state.retry());
    }

    #[tokio::test]
    // Selection follows the transaction id, not the row position.
    async fn test_selection_is_keyed_by_id() {
        let (mut state, _events) = dashboard(failing_api());

        let mut first = sample_response();
        first.transactions.push(transaction("t-3", "Rent", 900.0, TransactionType::Outcome));
        state.apply_outcome(LoadOutcome::Loaded(first));
        state.move_selection(1);
        assert_eq!(state.selected_key(), Some("t-2"));
        assert_eq!(state.selected_index(), Some(1));

        // t-2 moves to the end of the list; the selection goes with it.
        let mut reordered = sample_response();
        reordered.transactions.reverse();
        reordered
            .transactions
            .insert(0, transaction("t-0", "Bonus", 10.0, TransactionType::Income));
        state.apply_outcome(LoadOutcome::Loaded(reordered));
        assert_eq!(state.selected_key(), Some("t-2"));
        assert_eq!(state.selected_index(), Some(1));

        state.move_selection(10);
        assert_eq!(state.selected_key(), Some("t-1"));
        state.move_selection(-10);
        assert_eq!(state.selected_key(), Some("t-0"));

        // A list without the selected id falls back to the first row.
        state.apply_outcome(LoadOutcome::Loaded(sample_response()));
        assert_eq!(state.selected_key(), Some("t-1"));
    }

    #[tokio::test]
    // Rows sharing an id are still reachable one by one.
    async fn test_selection_walks_past_repeated_ids() {
        let (mut state, _events) = dashboard(failing_api());

        let mut response = sample_response();
        response.transactions = vec![
            transaction("a", "First", 1.0, TransactionType::Income),
            transaction("b", "Second", 2.0, TransactionType::Income),
            transaction("a", "Third", 3.0, TransactionType::Outcome),
            transaction("c", "Fourth", 4.0, TransactionType::Outcome),
        ];
        state.apply_outcome(LoadOutcome::Loaded(response.clone()));
        assert_eq!(state.selected_index(), Some(0));

        state.move_selection(1);
        state.move_selection(1);
        assert_eq!(state.selected_key(), Some("a"));
        assert_eq!(state.selected_index(), Some(2));

        for _ in 0..10 {
            state.move_selection(1);
        }
        assert_eq!(state.selected_key(), Some("c"));
        assert_eq!(state.selected_index(), Some(3));

        state.move_selection(-1);
        assert_eq!(state.selected_index(), Some(2));

        // Reloading the same list keeps the second copy selected.
        state.apply_outcome(LoadOutcome::Loaded(response));
        assert_eq!(state.selected_index(), Some(2));
        assert_eq!(state.selected_key(), Some("a"));
    }

    #[tokio::test]
    async fn test_update_moves_events_to_activity_log() {
        let (mut state, _events) = dashboard(failing_api());

        state.add_event(Event::view("one".to_string(), EventType::Refresh));
        state.add_event(Event::view("two".to_string(), EventType::Success));
        state.update();

        assert!(state.pending_events.is_empty());
        let messages: Vec<&str> = state.activity_logs.iter().map(|e| e.msg.as_str()).collect();
        assert_eq!(messages, vec!["one", "two"]);
        assert_eq!(state.tick, 1);
    }
}
