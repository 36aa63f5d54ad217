use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a money movement. The sign shown to the user comes from here, never from
/// the transaction value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransactionType {
    Income,
    Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub title: String,
    /// Magnitude of the movement.
    pub value: f64,
    /// Preformatted by the API; the dashboard formats `value` itself.
    #[serde(default)]
    pub formatted_value: Option<String>,
    /// Preformatted by the API; the dashboard formats `created_at` itself.
    #[serde(default)]
    pub formatted_date: Option<String>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: Category,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// The value with any sign stripped.
    pub fn magnitude(&self) -> f64 {
        self.value.abs()
    }
}
