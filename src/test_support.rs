//! Shared fixtures for unit tests.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::api::TransactionsApi;
use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::model::{Balance, Category, Transaction, TransactionType, TransactionsResponse};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

pub fn transaction(id: &str, title: &str, value: f64, kind: TransactionType) -> Transaction {
    Transaction {
        id: id.to_string(),
        title: title.to_string(),
        value,
        formatted_value: None,
        formatted_date: None,
        kind,
        category: Category {
            title: "Misc".to_string(),
        },
        created_at: "2020-04-20T12:00:00Z"
            .parse::<DateTime<Utc>>()
            .unwrap(),
    }
}

/// One income of R$ 100,00 followed by one outcome of R$ 50,00.
pub fn sample_response() -> TransactionsResponse {
    TransactionsResponse {
        transactions: vec![
            transaction("t-1", "Salary", 100.0, TransactionType::Income),
            transaction("t-2", "Groceries", 50.0, TransactionType::Outcome),
        ],
        balance: Balance::new(100.0, 50.0, 50.0),
    }
}

/// An API whose single request only resolves once the test opens the gate.
pub struct GatedApi {
    environment: Environment,
    pub gate: Arc<Notify>,
    pub calls: AtomicUsize,
    pub completed: AtomicUsize,
}

impl GatedApi {
    pub fn new() -> Self {
        Self {
            environment: Environment::Local,
            gate: Arc::new(Notify::new()),
            calls: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
        }
    }

    pub fn open(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TransactionsApi for GatedApi {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_transactions(&self) -> Result<TransactionsResponse, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        self.completed.fetch_add(1, Ordering::SeqCst);
        Ok(sample_response())
    }
}
