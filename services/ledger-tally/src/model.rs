//! Wire types for the paginated transactions API

use crate::error::{TallyError, TallyResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of the transactions collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Records across all pages, reported identically on every page
    #[serde(rename = "totalCount")]
    pub total_count: u64,

    /// Page number as echoed by the server, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Records on this page in server order
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Page {
    /// Interpret a decoded JSON document as a page
    pub fn from_value(value: Value) -> TallyResult<Self> {
        serde_json::from_value(value).map_err(|e| TallyError::InvalidResponsePayload {
            reason: e.to_string(),
        })
    }

    /// Number of records carried by this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// True when the page carries no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// A single ledger transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Grouping key, kept as the opaque string the server sent
    #[serde(rename = "Date")]
    pub date: String,

    /// Signed amount
    #[serde(rename = "Amount", default)]
    pub amount: Amount,

    #[serde(rename = "Ledger", default, skip_serializing_if = "Option::is_none")]
    pub ledger: Option<String>,

    #[serde(rename = "Company", default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl Transaction {
    /// Transaction with only the fields aggregation reads
    pub fn new(date: impl Into<String>, amount: impl Into<Amount>) -> Self {
        Self {
            date: date.into(),
            amount: amount.into(),
            ledger: None,
            company: None,
        }
    }
}

/// Amount as sent upstream: a JSON string, a JSON number, or absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Missing => f.write_str("null"),
        }
    }
}
