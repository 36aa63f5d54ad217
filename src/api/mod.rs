use crate::api::error::ApiError;
use crate::environment::Environment;
use crate::model::TransactionsResponse;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// The remote API the dashboard reads from. Injected into the view so tests can substitute it.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TransactionsApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch the transaction list together with the balance summary.
    async fn get_transactions(&self) -> Result<TransactionsResponse, ApiError>;
}

impl std::fmt::Debug for dyn TransactionsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TransactionsApi({:?})", self.environment())
    }
}
