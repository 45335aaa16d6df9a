use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::{
    aggregation::{compute_monthly_series, compute_totals},
    dashboard::Dashboard,
    stamp::start_of_day_millis,
    store::TransactionStore,
    submission::TransactionForm,
    time::FixedClock,
    CoreError,
};
use fintrack_domain::Transaction;

fn at(y: i32, m: u32, d: u32, offset_ms: i64, amount: Decimal) -> Transaction {
    let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    Transaction::new(start_of_day_millis(date).unwrap() + offset_ms, "entry", amount)
}

fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

fn sample() -> Vec<Transaction> {
    vec![
        at(2025, 3, 1, 10, Decimal::new(250_075, 2)),
        at(2025, 3, 9, 20, Decimal::new(-19_999, 2)),
        at(2025, 3, 9, 20, Decimal::new(-1, 2)),
        at(2025, 1, 2, 0, Decimal::from(900)),
        at(2024, 12, 31, 5, Decimal::from(-40)),
        at(2025, 11, 30, 7, Decimal::from(-60)),
        at(2023, 3, 15, 0, Decimal::from(12)),
    ]
}

#[test]
fn balance_is_order_independent_exact_sum() {
    let forward = sample();
    let mut reversed = sample();
    reversed.reverse();
    let expected: Decimal = forward.iter().map(|txn| txn.amount).sum();

    let now = noon(2025, 3, 20);
    assert_eq!(compute_totals(&forward, now).balance, expected);
    assert_eq!(compute_totals(&reversed, now).balance, expected);
}

#[test]
fn monthly_figures_never_double_count() {
    let txns = sample();
    let now = noon(2025, 3, 20);
    let totals = compute_totals(&txns, now);

    let current: Vec<_> = txns
        .iter()
        .filter(|txn| txn.year_month() == Some((2025, 3)))
        .collect();
    let gross: Decimal = current.iter().map(|txn| txn.amount.abs()).sum();
    assert_eq!(totals.monthly_income + totals.monthly_expense, gross);
    assert_eq!(totals.monthly_income, Decimal::new(250_075, 2));
    assert_eq!(totals.monthly_expense, Decimal::from(200));
}

#[test]
fn current_month_bucket_matches_totals() {
    let txns = sample();
    for month in 1..=12 {
        let now = noon(2025, month, 15);
        let totals = compute_totals(&txns, now);
        let series = compute_monthly_series(&txns, now);

        assert_eq!(series.buckets().len(), 12);
        let bucket = series.bucket(month).unwrap();
        assert_eq!(bucket.income, totals.monthly_income, "month {month}");
        assert_eq!(bucket.expense, totals.monthly_expense, "month {month}");
    }
}

#[test]
fn one_at_a_time_insertion_matches_batch_sort() {
    let mut incremental = TransactionStore::new();
    for txn in sample() {
        incremental.insert(txn);
    }
    let batch = TransactionStore::from_transactions(sample());

    let stamps = |store: &TransactionStore| store.iter().map(|t| t.timestamp).collect::<Vec<_>>();
    assert_eq!(incremental.len(), batch.len());
    assert_eq!(stamps(&incremental), stamps(&batch));
    assert!(stamps(&batch).windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn dashboard_submissions_drive_snapshot() {
    let mut dashboard = Dashboard::new(FixedClock(noon(2025, 1, 20)));
    dashboard
        .submit(&TransactionForm::new("earning", "2025-01-10", "5000", "Salary"))
        .expect("salary accepted");
    dashboard
        .submit(&TransactionForm::new("spent", "2025-01-15", "1200", "Rent"))
        .expect("rent accepted");

    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.totals.balance, Decimal::from(3800));
    assert_eq!(snapshot.totals.monthly_income, Decimal::from(5000));
    assert_eq!(snapshot.totals.monthly_expense, Decimal::from(1200));

    let january = snapshot.series.bucket(1).unwrap();
    assert_eq!(january.income, Decimal::from(5000));
    assert_eq!(january.expense, Decimal::from(1200));
    assert!(snapshot.series.iter().skip(1).all(|bucket| bucket.is_empty()));

    let descriptions: Vec<_> = snapshot
        .transactions
        .iter()
        .map(|txn| txn.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["Rent", "Salary"]);
}

#[test]
fn rejected_submission_leaves_store_untouched() {
    let mut dashboard = Dashboard::new(FixedClock(noon(2025, 1, 20)));
    let err = dashboard
        .submit(&TransactionForm::new("spent", "2025-01-15", "-3", "Rent"))
        .expect_err("negative magnitude rejected");

    assert!(matches!(err, CoreError::InvalidAmount(_)));
    assert!(dashboard.transactions().is_empty());
    assert_eq!(dashboard.totals().balance, Decimal::ZERO);
}

#[test]
fn same_day_submissions_share_timestamp_but_not_id() {
    let mut dashboard = Dashboard::new(FixedClock(noon(2025, 5, 5)));
    let form = TransactionForm::new("spent", "2025-05-01", "4.50", "Coffee");
    let first = dashboard.submit(&form).unwrap();
    let second = dashboard.submit(&form).unwrap();

    assert_ne!(first, second);
    assert_eq!(dashboard.transactions().len(), 2);
    assert_eq!(
        dashboard.transactions()[0].timestamp,
        dashboard.transactions()[1].timestamp
    );
    assert_eq!(dashboard.totals().balance, Decimal::from(-9));
}

#[test]
fn oversized_amounts_never_crash_the_dashboard() {
    let mut dashboard = Dashboard::new(FixedClock(noon(2025, 1, 20)));
    let huge = TransactionForm::new(
        "earning",
        "2025-01-10",
        "79228162514264337593543950335",
        "Jackpot",
    );
    assert!(matches!(
        dashboard.submit(&huge),
        Err(CoreError::InvalidAmount(_))
    ));

    dashboard.add(at(2025, 1, 10, 0, Decimal::MAX));
    dashboard.add(at(2025, 1, 11, 0, Decimal::MAX));

    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.totals.balance, Decimal::MAX);
    assert_eq!(snapshot.totals.monthly_income, Decimal::MAX);
    assert_eq!(snapshot.series.total_income(), Decimal::MAX);
}
