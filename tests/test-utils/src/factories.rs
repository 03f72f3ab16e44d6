//! Factory patterns for generating paginated API responses

use crate::mocks::ScriptedTransport;
use ledger_tally::Transaction;
use serde_json::{Value, json};

/// Default page size of the upstream API
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Slices transactions into pages the way the API serves them
///
/// Every page reports the same `totalCount` and echoes its page number.
pub struct PageFactory {
    transactions: Vec<Transaction>,
    per_page: usize,
}

impl PageFactory {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Number of pages the factory will produce
    pub fn page_total(&self) -> usize {
        self.transactions.len().div_ceil(self.per_page).max(1)
    }

    /// Page bodies in page order; an empty collection still has page 1
    pub fn bodies(&self) -> Vec<Value> {
        let total = self.transactions.len();
        if total == 0 {
            return vec![page_body(total, 1, &[])];
        }

        self.transactions
            .chunks(self.per_page)
            .enumerate()
            .map(|(i, chunk)| page_body(total, i + 1, chunk))
            .collect()
    }

    /// A transport serving every page with status `200`
    pub fn build(&self) -> ScriptedTransport {
        self.bodies()
            .into_iter()
            .enumerate()
            .fold(ScriptedTransport::new(), |transport, (i, body)| {
                transport.with_page(i as u64 + 1, "200", body.to_string())
            })
    }
}

/// JSON body of one page
pub fn page_body(total_count: usize, page: usize, transactions: &[Transaction]) -> Value {
    json!({
        "totalCount": total_count,
        "page": page,
        "transactions": transactions,
    })
}

/// Transaction with only date and amount set
pub fn transaction(date: &str, amount: &str) -> Transaction {
    Transaction::new(date, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn last_page_holds_the_remainder() {
        let transactions = (1..=7)
            .map(|d| transaction(&format!("2021-06-0{d}"), "1.0"))
            .collect();
        let factory = PageFactory::new(transactions).per_page(2);

        let bodies = factory.bodies();
        assert_eq!(factory.page_total(), 4);
        assert_eq!(bodies.len(), 4);
        assert_eq!(bodies[3]["transactions"].as_array().map(Vec::len), Some(1));
        assert!(bodies.iter().all(|b| b["totalCount"] == 7));
        assert_eq!(bodies[2]["page"], 3);
    }

    #[test]
    fn bodies_use_upstream_field_names() {
        let body = page_body(1, 1, &[transaction("2021-06-01", "5.0")]);
        assert_eq!(body["transactions"][0]["Date"], "2021-06-01");
        assert_eq!(body["transactions"][0]["Amount"], "5.0");
    }
}
