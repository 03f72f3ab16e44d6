//! Amount coercion
//!
//! Text amounts are read by their leading numeric prefix, so `"12.5abc"` is
//! 12.5 and `"abc"` is 0.0. A single `_` between two digits is a separator
//! (`"1_000"` is 1000.0). Anything that needs the prefix rule (or has no
//! number at all) is reported as coerced.

use crate::model::Amount;

/// Result of reading an amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScannedAmount {
    /// Value used for accumulation
    pub value: f64,
    /// False when the value was not read from a well-formed number
    pub exact: bool,
}

impl ScannedAmount {
    const fn exact(value: f64) -> Self {
        Self { value, exact: true }
    }

    const fn coerced(value: f64) -> Self {
        Self {
            value,
            exact: false,
        }
    }
}

/// Read an amount as `f64`
#[must_use]
pub fn scan_amount(amount: &Amount) -> ScannedAmount {
    match amount {
        Amount::Number(n) => ScannedAmount::exact(*n),
        Amount::Text(s) => scan_text(s),
        Amount::Missing => ScannedAmount::coerced(0.0),
    }
}

fn scan_text(raw: &str) -> ScannedAmount {
    let s = raw.trim_start();
    let end = numeric_prefix_len(s);
    if end == 0 {
        return ScannedAmount::coerced(0.0);
    }

    // The prefix only ever holds sign, digits, separators, '.', and an exponent
    let value = s[..end].replace('_', "").parse::<f64>().unwrap_or(0.0);
    if s[end..].trim_end().is_empty() {
        ScannedAmount::exact(value)
    } else {
        ScannedAmount::coerced(value)
    }
}

/// Byte length of a digit run starting at `start`, where `_` counts only when
/// it sits between two digits.
fn digit_run(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while let Some(&b) = bytes.get(i) {
        let separator = b == b'_'
            && i > start
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !(b.is_ascii_digit() || separator) {
            break;
        }
        i += 1;
    }
    i - start
}

/// Byte length of `[+-]?digits*(.digits+)?([eE][+-]?digits+)?`, or 0 when no
/// digit was seen before the exponent.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| digit_run(bytes, start);

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = digits_from(i);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = digits_from(i + 1);
        if frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = digits_from(j);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    i
}
