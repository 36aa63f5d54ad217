//! Shapes returned by the transactions API.

mod balance;
mod transaction;

pub use balance::Balance;
pub use transaction::{Category, Transaction, TransactionType};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Everything the dashboard shows, as returned by a single `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub balance: Balance,
}

impl TransactionsResponse {
    /// Ids that appear more than once, in order of their second appearance.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.transactions
            .iter()
            .map(|t| t.id.as_str())
            .filter(|id| !seen.insert(*id))
            .collect()
    }
}
