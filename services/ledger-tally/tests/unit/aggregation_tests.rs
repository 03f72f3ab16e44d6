//! Tests for grouping and summing transactions by date

use ledger_tally::{AmountPolicy, DailyTotalsAggregator, Transaction, aggregate};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use test_utils::{
    assert_approx_eq, assert_totals_approx_eq, same_day_transactions, sample_ledger, transaction,
    week_of_transactions,
};

#[rstest]
fn adds_transactions_on_same_day(same_day_transactions: Vec<Transaction>) {
    let totals = aggregate(&same_day_transactions);

    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get("2021-06-01"), Some(30.0));
}

#[rstest]
fn separates_transactions_on_different_days(week_of_transactions: Vec<Transaction>) {
    let totals = aggregate(&week_of_transactions);

    assert_eq!(totals.len(), 7);
    for (day, record) in week_of_transactions.iter().enumerate() {
        let expected = (day as f64 + 1.0) * 5.0;
        assert_eq!(totals.get(&record.date), Some(expected), "{}", record.date);
    }
}

#[rstest]
fn sample_ledger_totals(sample_ledger: Vec<Transaction>) {
    let outcome = DailyTotalsAggregator::new(AmountPolicy::Strict)
        .aggregate(&sample_ledger)
        .unwrap();

    assert_eq!(outcome.coerced, 0);
    let sorted: Vec<_> = outcome.totals.sorted().into_iter().map(|(d, _)| d).collect();
    assert_eq!(
        sorted,
        vec!["2013-12-19", "2013-12-20", "2013-12-21", "2013-12-22"]
    );
    assert_eq!(outcome.totals.get("2013-12-20"), Some(-1874.75));
    assert_approx_eq(outcome.totals.get("2013-12-21").unwrap(), -17.98, 1e-9);
}

#[test]
fn duplicate_records_are_summed() {
    let record = transaction("2021-06-01", "2.50");
    let totals = aggregate(&[record.clone(), record.clone(), record]);
    assert_eq!(totals.get("2021-06-01"), Some(7.5));
}

#[test]
fn lenient_and_plain_aggregate_agree() {
    let records = vec![
        transaction("2021-06-01", "abc"),
        transaction("2021-06-01", "4.25"),
        transaction("2021-06-02", "1.5kg"),
    ];

    let outcome = DailyTotalsAggregator::default().aggregate(&records).unwrap();
    assert_eq!(outcome.totals, aggregate(&records));
    assert_eq!(outcome.coerced, 2);
}

fn records_strategy() -> impl Strategy<Value = Vec<Transaction>> {
    let date = prop::sample::select(vec!["2021-06-01", "2021-06-02", "2021-06-03", "2021-06-04"]);
    let cents = -1_000_000i64..1_000_000i64;
    prop::collection::vec((date, cents), 0..64).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(date, cents)| {
                let sign = if cents < 0 { "-" } else { "" };
                let cents = cents.abs();
                transaction(date, &format!("{sign}{}.{:02}", cents / 100, cents % 100))
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn aggregate_is_idempotent(records in records_strategy()) {
        let first = aggregate(&records);
        let second = aggregate(&records);

        prop_assert_eq!(first.len(), second.len());
        for (date, total) in first.sorted() {
            prop_assert_eq!(second.get(date).map(f64::to_bits), Some(total.to_bits()));
        }
    }

    #[test]
    fn aggregate_ignores_record_order(
        (records, shuffled) in records_strategy()
            .prop_flat_map(|r| (Just(r.clone()), Just(r).prop_shuffle()))
    ) {
        assert_totals_approx_eq(&aggregate(&records), &aggregate(&shuffled), 1e-6);
    }
}
