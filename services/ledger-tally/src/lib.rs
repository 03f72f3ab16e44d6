//! Ledger Tally
//!
//! One-shot batch job over a paginated transactions API:
//! - Retrieves every page sequentially, inferring the page count from page 1
//! - Sums transaction amounts per date
//! - Renders the totals sorted by date

pub mod aggregators;
pub mod config;
pub mod decoder;
pub mod error;
pub mod model;
pub mod pager;
pub mod report;
pub mod transport;

use serde::Serialize;
use tracing::info;

pub use aggregators::{AggregateOutcome, DailyTotalsAggregator, TotalsMap, aggregate};
pub use config::{AmountPolicy, DEFAULT_BASE_URL, TallyConfig};
pub use decoder::{DecodeError, JsonDecoder, PageDecoder};
pub use error::{TallyError, TallyResult};
pub use model::{Amount, Page, Transaction};
pub use pager::{FetchStats, Pager, page_count};
pub use transport::{HttpResponse, HttpTransport, Transport};

/// Outcome of a complete run
#[derive(Debug, Clone, Serialize)]
pub struct TallyRun {
    pub totals: TotalsMap,
    pub stats: FetchStats,
    /// Amounts read by prefix or defaulted to zero
    pub coerced: usize,
}

/// Pager followed by aggregation
#[derive(Debug)]
pub struct LedgerTally<T, D = JsonDecoder> {
    pager: Pager<T, D>,
    aggregator: DailyTotalsAggregator,
}

impl LedgerTally<HttpTransport> {
    /// Tally against the live API over HTTP
    pub fn http(config: TallyConfig) -> TallyResult<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self::new(config, transport, JsonDecoder))
    }
}

impl<T: Transport, D: PageDecoder> LedgerTally<T, D> {
    pub fn new(config: TallyConfig, transport: T, decoder: D) -> Self {
        let aggregator = DailyTotalsAggregator::new(config.amount_policy);
        Self {
            pager: Pager::new(config, transport, decoder),
            aggregator,
        }
    }

    /// Fetch everything, then aggregate. Fails fast with no partial totals.
    pub async fn run(&self) -> TallyResult<TallyRun> {
        info!(base_url = %self.pager.config().base_url, "Starting ledger tally");

        let (records, stats) = self.pager.fetch_all_with_stats().await?;
        let AggregateOutcome { totals, coerced } = self.aggregator.aggregate(&records)?;

        info!(
            pages = stats.pages_fetched,
            records = stats.records,
            dates = totals.len(),
            coerced,
            "Ledger tally complete"
        );

        Ok(TallyRun {
            totals,
            stats,
            coerced,
        })
    }
}
