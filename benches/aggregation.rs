use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fintrack::fintrack_core::{compute_monthly_series, compute_totals, TransactionStore};
use fintrack::fintrack_domain::Transaction;
use rust_decimal::Decimal;

const DAY_MS: i64 = 86_400_000;

fn sample_transactions(count: usize) -> Vec<Transaction> {
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 8, 0, 0)
        .unwrap()
        .timestamp_millis();
    (0..count)
        .map(|idx| {
            let cents = ((idx * 7_919) % 250_000) as i64 + 1;
            let amount = if idx % 3 == 0 {
                Decimal::new(cents, 2)
            } else {
                Decimal::new(-cents, 2)
            };
            let timestamp = start + (idx as i64 % 730) * DAY_MS + idx as i64;
            Transaction::new(timestamp, format!("Entry {idx}"), amount)
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    let mut group = c.benchmark_group("aggregation");

    for size in [100usize, 1_000, 10_000] {
        let transactions = sample_transactions(size);

        group.bench_with_input(BenchmarkId::new("totals", size), &transactions, |b, txns| {
            b.iter(|| compute_totals(black_box(txns), now))
        });
        group.bench_with_input(
            BenchmarkId::new("monthly_series", size),
            &transactions,
            |b, txns| b.iter(|| compute_monthly_series(black_box(txns), now)),
        );
        group.bench_with_input(BenchmarkId::new("insert", size), &transactions, |b, txns| {
            b.iter(|| {
                let mut store = TransactionStore::new();
                for txn in txns.iter().take(500) {
                    store.insert(txn.clone());
                }
                store.len()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
