//! Page-number driven retrieval of the transactions collection
//!
//! The collection carries no page count. Page 1 fixes the page size and the
//! total record count, from which the remaining page numbers are derived.

use crate::config::TallyConfig;
use crate::decoder::{JsonDecoder, PageDecoder};
use crate::error::{TallyError, TallyResult};
use crate::model::{Page, Transaction};
use crate::transport::Transport;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Number of pages implied by the first page.
///
/// Uses floating-point division followed by ceiling. An empty first page is
/// treated as the only page.
#[must_use]
pub fn page_count(total_count: u64, page_size: usize) -> u64 {
    if page_size == 0 || total_count <= page_size as u64 {
        return 1;
    }
    (total_count as f64 / page_size as f64).ceil() as u64
}

/// What a full retrieval observed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FetchStats {
    /// Pages requested, including page 1
    pub pages_fetched: u64,
    /// Length of page 1
    pub page_size: usize,
    /// `totalCount` reported by page 1
    pub total_count: u64,
    /// Records after concatenation
    pub records: usize,
}

/// Sequential pager over `<base_url>/<n>.json`
#[derive(Debug)]
pub struct Pager<T, D = JsonDecoder> {
    config: TallyConfig,
    transport: T,
    decoder: D,
}

impl<T: Transport> Pager<T> {
    /// Pager decoding bodies with serde_json
    pub fn with_json(config: TallyConfig, transport: T) -> Self {
        Self::new(config, transport, JsonDecoder)
    }
}

impl<T: Transport, D: PageDecoder> Pager<T, D> {
    pub fn new(config: TallyConfig, transport: T, decoder: D) -> Self {
        Self {
            config,
            transport,
            decoder,
        }
    }

    /// Injected transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &TallyConfig {
        &self.config
    }

    /// Fetch every page and flatten the records in page order
    pub async fn fetch_all(&self) -> TallyResult<Vec<Transaction>> {
        self.fetch_all_with_stats()
            .await
            .map(|(transactions, _)| transactions)
    }

    /// Same as [`Pager::fetch_all`], also reporting what was observed
    pub async fn fetch_all_with_stats(&self) -> TallyResult<(Vec<Transaction>, FetchStats)> {
        let first = self.fetch_page(1).await?;
        let page_size = first.len();
        let total_count = first.total_count;
        let last_page = page_count(total_count, page_size);

        info!(total_count, page_size, pages = last_page, "Inferred page count");

        // last_page comes from the server, so nothing is reserved against it
        let mut transactions = first.transactions;
        for number in 2..=last_page {
            let page = self.fetch_page(number).await?;
            self.check_page_size(number, last_page, page_size, page.len())?;
            transactions.extend(page.transactions);
        }

        let stats = FetchStats {
            pages_fetched: last_page,
            page_size,
            total_count,
            records: transactions.len(),
        };
        if stats.records as u64 != total_count {
            warn!(
                total_count,
                records = stats.records,
                "Record count differs from reported totalCount"
            );
        }

        Ok((transactions, stats))
    }

    /// Fetch and decode a single 1-indexed page
    pub async fn fetch_page(&self, number: u64) -> TallyResult<Page> {
        let url = self.config.page_url(number);
        debug!(page = number, %url, "Fetching page");

        let response = self.transport.fetch(&url).await?;
        if !response.is_ok() {
            return Err(TallyError::ServiceUnavailable {
                page: number,
                status: response.status,
            });
        }

        self.parse_page(&response.body)
    }

    /// Decode a raw body into a page
    pub fn parse_page(&self, body: &str) -> TallyResult<Page> {
        let value = self
            .decoder
            .decode(body)
            .map_err(|e| TallyError::InvalidResponsePayload { reason: e.message })?;
        Page::from_value(value)
    }

    fn check_page_size(
        &self,
        number: u64,
        last_page: u64,
        expected: usize,
        actual: usize,
    ) -> TallyResult<()> {
        let consistent = if number < last_page {
            actual == expected
        } else {
            actual <= expected
        };
        if consistent {
            return Ok(());
        }

        if self.config.validate_page_size {
            return Err(TallyError::InconsistentPageSize {
                page: number,
                expected,
                actual,
            });
        }
        warn!(page = number, expected, actual, "Page size differs from page 1");
        Ok(())
    }
}
