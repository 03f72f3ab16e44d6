//! Rendering of daily totals
//!
//! Rounding happens here only; stored totals keep full precision.

use crate::aggregators::TotalsMap;
use serde_json::{Map, Value};
use std::io::{self, Write};

/// Round half away from zero to cents, never yielding negative zero
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// One `"<date>: <amount>"` line per date, ascending by date
#[must_use]
pub fn render_totals(totals: &TotalsMap) -> Vec<String> {
    totals
        .sorted()
        .into_iter()
        .map(|(date, total)| format!("{date}: {:.2}", round_cents(total)))
        .collect()
}

/// Write the text report, one line per date
pub fn write_totals<W: Write>(totals: &TotalsMap, out: &mut W) -> io::Result<()> {
    for line in render_totals(totals) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Report as a JSON object with keys in ascending order
#[must_use]
pub fn totals_json(totals: &TotalsMap) -> Value {
    let object: Map<String, Value> = totals
        .to_btree()
        .into_iter()
        .map(|(date, total)| (date, Value::from(round_cents(total))))
        .collect();
    Value::Object(object)
}
