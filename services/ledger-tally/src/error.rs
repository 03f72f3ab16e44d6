//! Ledger Tally Error Types
//!
//! Every failure that aborts a run maps to one of these variants

use thiserror::Error;

/// Ledger tally errors
#[derive(Debug, Error)]
pub enum TallyError {
    /// Upstream answered with anything other than `200`
    #[error("Service Unavailable (page {page}, status {status})")]
    ServiceUnavailable { page: u64, status: String },

    /// Page body could not be decoded into a page
    #[error("Service responded with invalid JSON ({reason})")]
    InvalidResponsePayload { reason: String },

    /// Request never produced a response
    #[error("Transport failure for {url}: {reason}")]
    Transport { url: String, reason: String },

    /// Amount could not be read as a number (strict mode only)
    #[error("Invalid amount {raw:?} on {date}")]
    InvalidAmount { date: String, raw: String },

    /// Non-final page length differs from the first page
    #[error("Inconsistent page size on page {page}: expected {expected}, got {actual}")]
    InconsistentPageSize {
        page: u64,
        expected: usize,
        actual: usize,
    },

    /// Configuration rejected before the run started
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },
}

impl TallyError {
    /// True for the upstream status failure kind
    #[must_use]
    pub const fn is_service_unavailable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable { .. })
    }

    /// True for the undecodable payload kind
    #[must_use]
    pub const fn is_invalid_payload(&self) -> bool {
        matches!(self, Self::InvalidResponsePayload { .. })
    }
}

/// Result type for tally operations
pub type TallyResult<T> = Result<T, TallyError>;
