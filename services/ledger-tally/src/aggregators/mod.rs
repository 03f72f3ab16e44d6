//! Aggregator implementations

pub mod amount;
pub mod daily_totals;

pub use amount::{ScannedAmount, scan_amount};
pub use daily_totals::{AggregateOutcome, DailyTotalsAggregator, TotalsMap, aggregate};
