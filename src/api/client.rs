//! Transactions API Client
//!
//! A thin JSON-over-HTTP client for the transactions API.

use crate::api::TransactionsApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use crate::model::TransactionsResponse;
use log::debug;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("finances-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        debug!("GET {} returned {} bytes", url, response_bytes.len());
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl TransactionsApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_transactions(&self) -> Result<TransactionsResponse, ApiError> {
        self.get_request(http::TRANSACTIONS_ENDPOINT).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TransactionType;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one HTTP response on a local port and returns the base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}", address)
    }

    fn client_for(api_url: String) -> ApiClient {
        ApiClient::new(Environment::Custom { api_url }).unwrap()
    }

    #[test]
    fn test_build_url_joins_slashes() {
        let client = client_for("http://localhost:3333/".to_string());
        assert_eq!(
            client.build_url("/transactions"),
            "http://localhost:3333/transactions"
        );
        let client = ApiClient::new(Environment::Local).unwrap();
        assert_eq!(
            client.build_url("transactions"),
            "http://localhost:3333/transactions"
        );
    }

    #[tokio::test]
    /// Should decode the transaction list and the balance from one response.
    async fn test_get_transactions_decodes_envelope() {
        let body = r#"{"transactions":[{"id":"1","title":"Salary","value":100,
            "type":"income","category":{"title":"Work"},"created_at":"2020-04-20T12:00:00Z"}],
            "balance":{"income":100,"outcome":0,"total":100}}"#;
        let url = serve_once("200 OK", body).await;

        let response = client_for(url).get_transactions().await.unwrap();
        assert_eq!(response.transactions.len(), 1);
        assert_eq!(response.transactions[0].kind, TransactionType::Income);
        assert_eq!(response.balance.total, Some(100.0));
    }

    #[tokio::test]
    /// Non-success statuses surface as HTTP errors carrying the body.
    async fn test_get_transactions_http_error() {
        let url = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;

        match client_for(url).get_transactions().await {
            Err(ApiError::Http { status, message }) => {
                assert_eq!(status, 500);
                assert!(message.contains("boom"));
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    /// A body of the wrong shape is a decode error.
    async fn test_get_transactions_decode_error() {
        let url = serve_once("200 OK", r#"{"items":[]}"#).await;

        let result = client_for(url).get_transactions().await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    /// Nothing listening: transport error.
    async fn test_get_transactions_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let result = client_for(format!("http://{}", address))
            .get_transactions()
            .await;
        assert!(matches!(result, Err(ApiError::Reqwest(_))));
    }
}
