use serde::{Deserialize, Serialize};

/// Totals over every transaction. Fields the API leaves out stay `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(default)]
    pub income: Option<f64>,
    #[serde(default)]
    pub outcome: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
}

impl Balance {
    pub fn new(income: f64, outcome: f64, total: f64) -> Self {
        Self {
            income: Some(income),
            outcome: Some(outcome),
            total: Some(total),
        }
    }
}
