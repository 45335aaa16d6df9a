//! Totals and monthly series derived from the transaction list.
//!
//! Every function here is pure: the result depends only on the slice and the
//! supplied `now`, so callers re-derive on every change instead of caching.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use tracing::warn;

use fintrack_domain::{EntryKind, MonthlySeries, Transaction, TransactionTotals};

/// Computes the all-time balance and the income/expense of `now`'s calendar month.
///
/// `monthly_expense` is reported as a non-negative magnitude. Entries whose
/// timestamp cannot be placed on a calendar still count toward the balance.
pub fn compute_totals(transactions: &[Transaction], now: DateTime<Utc>) -> TransactionTotals {
    let current = (now.year(), now.month());
    let mut totals = TransactionTotals::default();

    for txn in transactions {
        accumulate(&mut totals.balance, txn.amount, txn);

        match txn.year_month() {
            Some(period) if period == current => match txn.kind() {
                Some(EntryKind::Earning) => accumulate(&mut totals.monthly_income, txn.amount, txn),
                Some(EntryKind::Spent) => {
                    accumulate(&mut totals.monthly_expense, txn.amount.abs(), txn)
                }
                None => {}
            },
            Some(_) => {}
            None => warn!(id = %txn.id, timestamp = txn.timestamp, "timestamp out of calendar range"),
        }
    }

    totals
}

/// Buckets income and expense per month of `now`'s calendar year.
///
/// Always yields twelve buckets, January first. Entries from other years are
/// left out, so multi-year history is not visible in this view.
pub fn compute_monthly_series(transactions: &[Transaction], now: DateTime<Utc>) -> MonthlySeries {
    let mut series = MonthlySeries::empty(now.year());

    for txn in transactions {
        let Some((year, month)) = txn.year_month() else {
            continue;
        };
        if year != series.year {
            continue;
        }
        let Some(bucket) = series.bucket_mut(month) else {
            continue;
        };
        match txn.kind() {
            Some(EntryKind::Earning) => accumulate(&mut bucket.income, txn.amount, txn),
            Some(EntryKind::Spent) => accumulate(&mut bucket.expense, txn.amount.abs(), txn),
            None => {}
        }
    }

    series
}

/// Adds `amount` to `total`, clamping at the `Decimal` range instead of panicking.
fn accumulate(total: &mut Decimal, amount: Decimal, txn: &Transaction) {
    *total = match total.checked_add(amount) {
        Some(sum) => sum,
        None => {
            warn!(id = %txn.id, amount = %txn.amount, "sum out of range, clamping");
            total.saturating_add(amount)
        }
    };
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};

    use super::*;
    use crate::stamp::start_of_day_millis;

    fn on(y: i32, m: u32, d: u32, amount: i64) -> Transaction {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        Transaction::new(
            start_of_day_millis(date).unwrap() + 3_600_000,
            "entry",
            Decimal::from(amount),
        )
    }

    fn txn_stamp(y: i32, m: u32, d: u32) -> i64 {
        start_of_day_millis(NaiveDate::from_ymd_opt(y, m, d).unwrap()).unwrap()
    }

    fn now(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn january_example_produces_expected_totals() {
        let txns = vec![on(2025, 1, 10, 5000), on(2025, 1, 15, -1200)];
        let totals = compute_totals(&txns, now(2025, 1, 20));

        assert_eq!(totals.balance, Decimal::from(3800));
        assert_eq!(totals.monthly_income, Decimal::from(5000));
        assert_eq!(totals.monthly_expense, Decimal::from(1200));
    }

    #[test]
    fn january_example_fills_only_january_bucket() {
        let txns = vec![on(2025, 1, 10, 5000), on(2025, 1, 15, -1200)];
        let series = compute_monthly_series(&txns, now(2025, 1, 20));

        let january = series.bucket(1).unwrap();
        assert_eq!(january.income, Decimal::from(5000));
        assert_eq!(january.expense, Decimal::from(1200));
        assert!(series.iter().skip(1).all(|bucket| bucket.is_empty()));
    }

    #[test]
    fn empty_input_yields_zeros() {
        let totals = compute_totals(&[], now(2025, 7, 1));
        assert_eq!(totals, TransactionTotals::default());

        let series = compute_monthly_series(&[], now(2025, 7, 1));
        assert_eq!(series.buckets().len(), 12);
        assert!(series.iter().all(|bucket| bucket.is_empty()));
    }

    #[test]
    fn prior_year_counts_only_toward_balance() {
        let txns = vec![on(2024, 1, 10, 700), on(2025, 1, 3, -200)];
        let totals = compute_totals(&txns, now(2025, 1, 20));
        let series = compute_monthly_series(&txns, now(2025, 1, 20));

        assert_eq!(totals.balance, Decimal::from(500));
        assert_eq!(totals.monthly_income, Decimal::ZERO);
        assert_eq!(totals.monthly_expense, Decimal::from(200));
        assert_eq!(series.total_income(), Decimal::ZERO);
        assert_eq!(series.total_expense(), Decimal::from(200));
    }

    #[test]
    fn same_month_other_year_is_not_current_month() {
        let txns = vec![on(2024, 3, 5, 100)];
        let totals = compute_totals(&txns, now(2025, 3, 5));
        assert_eq!(totals.monthly_income, Decimal::ZERO);
        assert_eq!(totals.balance, Decimal::from(100));
    }

    #[test]
    fn other_months_of_current_year_land_in_their_buckets() {
        let txns = vec![
            on(2025, 2, 1, 10),
            on(2025, 2, 28, -4),
            on(2025, 12, 31, 9),
        ];
        let series = compute_monthly_series(&txns, now(2025, 6, 1));

        let february = series.bucket(2).unwrap();
        assert_eq!(february.income, Decimal::from(10));
        assert_eq!(february.expense, Decimal::from(4));
        assert_eq!(series.bucket(12).unwrap().income, Decimal::from(9));

        let totals = compute_totals(&txns, now(2025, 6, 1));
        assert_eq!(totals.monthly_income, Decimal::ZERO);
        assert_eq!(totals.monthly_expense, Decimal::ZERO);
    }

    #[test]
    fn out_of_range_timestamp_still_counts_toward_balance() {
        let mut odd = on(2025, 1, 1, -5);
        odd.timestamp = i64::MAX;
        let txns = vec![on(2025, 1, 2, 20), odd];

        let totals = compute_totals(&txns, now(2025, 1, 10));
        assert_eq!(totals.balance, Decimal::from(15));
        assert_eq!(totals.monthly_expense, Decimal::ZERO);
        assert_eq!(compute_monthly_series(&txns, now(2025, 1, 10)).total_expense(), Decimal::ZERO);
    }

    #[test]
    fn sums_beyond_decimal_range_clamp_instead_of_panicking() {
        let txns = vec![
            Transaction::new(txn_stamp(2025, 1, 10), "huge", Decimal::MAX),
            Transaction::new(txn_stamp(2025, 1, 11), "huge again", Decimal::MAX),
            Transaction::new(txn_stamp(2025, 1, 12), "huge loss", Decimal::MIN),
            Transaction::new(txn_stamp(2025, 1, 13), "huge loss again", Decimal::MIN),
        ];
        let totals = compute_totals(&txns, now(2025, 1, 20));
        assert_eq!(totals.monthly_income, Decimal::MAX);
        assert_eq!(totals.monthly_expense, Decimal::MAX);

        let series = compute_monthly_series(&txns, now(2025, 1, 20));
        let january = series.bucket(1).unwrap();
        assert_eq!(january.income, Decimal::MAX);
        assert_eq!(january.expense, Decimal::MAX);
        assert_eq!(series.total_income(), Decimal::MAX);
        assert_eq!(january.net(), Decimal::ZERO);
    }

    #[test]
    fn fractional_amounts_sum_exactly() {
        let mut a = on(2025, 4, 1, 0);
        a.amount = Decimal::new(10, 2);
        let mut b = on(2025, 4, 2, 0);
        b.amount = Decimal::new(20, 2);
        let totals = compute_totals(&[a, b], now(2025, 4, 30));
        assert_eq!(totals.balance, Decimal::new(30, 2));
    }
}
