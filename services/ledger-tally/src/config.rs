//! Ledger tally configuration

use crate::error::{TallyError, TallyResult};
use serde::{Deserialize, Serialize};

/// Transactions collection served by the upstream API
pub const DEFAULT_BASE_URL: &str = "https://resttest.bench.co/transactions";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How amounts that are not numbers are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountPolicy {
    /// Coerce to zero (leading numeric prefix) and count the coercion
    #[default]
    Lenient,
    /// Fail the run on the first unreadable amount
    Strict,
}

/// Ledger tally configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Collection URL; pages live at `<base_url>/<n>.json`
    pub base_url: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,

    /// Amount coercion policy
    pub amount_policy: AmountPolicy,

    /// Reject non-final pages whose length differs from page 1
    pub validate_page_size: bool,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("ledger-tally/{}", env!("CARGO_PKG_VERSION")),
            amount_policy: AmountPolicy::default(),
            validate_page_size: false,
        }
    }
}

impl TallyConfig {
    /// Build a config pointed at another collection
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reject settings that cannot produce a run
    pub fn validate(&self) -> TallyResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(TallyError::Config {
                reason: "base_url must not be empty".to_string(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(TallyError::Config {
                reason: "request_timeout_secs must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// URL of a 1-indexed page
    #[must_use]
    pub fn page_url(&self, page: u64) -> String {
        format!("{}/{}.json", self.base_url.trim_end_matches('/'), page)
    }
}
