//! Session-scoped dashboard state: the transaction store plus the derived views
//! a front end renders (summary cards, yearly chart, transaction list).

use tracing::{debug, warn};
use uuid::Uuid;

use fintrack_domain::{MonthlySeries, Transaction, TransactionTotals};

use crate::{
    aggregation::{compute_monthly_series, compute_totals},
    error::CoreResult,
    store::TransactionStore,
    submission::TransactionForm,
    time::Clock,
};

/// Everything a front end needs to render after a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub totals: TransactionTotals,
    pub series: MonthlySeries,
    pub transactions: Vec<Transaction>,
}

pub struct Dashboard<C: Clock> {
    store: TransactionStore,
    clock: C,
}

impl<C: Clock> Dashboard<C> {
    pub fn new(clock: C) -> Self {
        Self::with_store(TransactionStore::new(), clock)
    }

    pub fn with_store(store: TransactionStore, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    /// Validates a form submission against the clock and inserts the result.
    pub fn submit(&mut self, form: &TransactionForm) -> CoreResult<Uuid> {
        match form.validate(self.clock.now()) {
            Ok(txn) => {
                debug!(
                    id = %txn.id,
                    timestamp = txn.timestamp,
                    amount = %txn.amount,
                    "transaction accepted"
                );
                Ok(self.store.insert(txn))
            }
            Err(err) => {
                warn!(error = %err, "transaction rejected");
                Err(err)
            }
        }
    }

    pub fn add(&mut self, transaction: Transaction) -> Uuid {
        self.store.insert(transaction)
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.as_slice()
    }

    pub fn search(&self, query: &str) -> Vec<&Transaction> {
        self.store.search(query)
    }

    pub fn totals(&self) -> TransactionTotals {
        compute_totals(self.store.as_slice(), self.clock.now())
    }

    pub fn monthly_series(&self) -> MonthlySeries {
        compute_monthly_series(self.store.as_slice(), self.clock.now())
    }

    /// Re-derives every view from the current store.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let now = self.clock.now();
        let transactions = self.store.as_slice();
        DashboardSnapshot {
            totals: compute_totals(transactions, now),
            series: compute_monthly_series(transactions, now),
            transactions: transactions.to_vec(),
        }
    }
}
