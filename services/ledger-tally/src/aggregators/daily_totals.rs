//! Daily totals aggregator
//!
//! Sums amounts per date key using plain `f64` accumulation. Totals carry the
//! usual binary floating-point error (0.1 + 0.2 != 0.3); only the report
//! rounds them.

use super::amount::scan_amount;
use crate::config::AmountPolicy;
use crate::error::{TallyError, TallyResult};
use crate::model::Transaction;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

/// Accumulated amount per date key
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TotalsMap {
    totals: FxHashMap<String, f64>,
}

impl TotalsMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the running total for `date`, starting from zero
    pub fn add(&mut self, date: &str, amount: f64) {
        // 0.0 + -0.0 is +0.0, so a lone negative-zero amount stores +0.0
        *self.totals.entry(date.to_string()).or_insert(0.0) += amount;
    }

    /// Total for a date, if any record carried it
    #[must_use]
    pub fn get(&self, date: &str) -> Option<f64> {
        self.totals.get(date).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Entries in ascending key order
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self
            .totals
            .iter()
            .map(|(date, total)| (date.as_str(), *total))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Ordered copy, for rendering and comparisons
    #[must_use]
    pub fn to_btree(&self) -> BTreeMap<String, f64> {
        self.totals
            .iter()
            .map(|(date, total)| (date.clone(), *total))
            .collect()
    }
}

/// Totals plus the number of amounts that had to be coerced
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateOutcome {
    pub totals: TotalsMap,
    pub coerced: usize,
}

/// Groups transactions by date and sums their amounts
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyTotalsAggregator {
    policy: AmountPolicy,
}

impl DailyTotalsAggregator {
    /// Create a new daily totals aggregator
    #[must_use]
    pub const fn new(policy: AmountPolicy) -> Self {
        Self { policy }
    }

    /// Sum every record in input order
    pub fn aggregate(&self, records: &[Transaction]) -> TallyResult<AggregateOutcome> {
        let mut outcome = AggregateOutcome::default();

        for record in records {
            let scanned = scan_amount(&record.amount);
            if !scanned.exact {
                if self.policy == AmountPolicy::Strict {
                    return Err(TallyError::InvalidAmount {
                        date: record.date.clone(),
                        raw: record.amount.to_string(),
                    });
                }
                outcome.coerced += 1;
                warn!(
                    date = %record.date,
                    raw = %record.amount,
                    value = scanned.value,
                    "Amount is not a well-formed number"
                );
            }
            outcome.totals.add(&record.date, scanned.value);
        }

        Ok(outcome)
    }
}

/// Lenient aggregation: unreadable amounts count as their numeric prefix or zero
#[must_use]
pub fn aggregate(records: &[Transaction]) -> TotalsMap {
    let mut totals = TotalsMap::new();
    for record in records {
        totals.add(&record.date, scan_amount(&record.amount).value);
    }
    totals
}
