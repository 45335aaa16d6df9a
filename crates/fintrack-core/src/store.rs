//! In-memory transaction collection kept newest first.

use std::cmp::Reverse;

use fintrack_domain::Transaction;
use tracing::trace;
use uuid::Uuid;

use crate::{error::CoreResult, CoreError};

#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an arbitrary batch, sorted newest first.
    pub fn from_transactions(transactions: impl IntoIterator<Item = Transaction>) -> Self {
        let mut store = Self::new();
        store.extend(transactions);
        store
    }

    /// Appends `transaction` and re-sorts by timestamp, newest first.
    ///
    /// The sort is stable, so entries sharing a timestamp stay in insertion order.
    pub fn insert(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        self.sort();
        trace!(%id, len = self.transactions.len(), "transaction inserted");
        id
    }

    /// Appends a batch and sorts once.
    pub fn extend(&mut self, transactions: impl IntoIterator<Item = Transaction>) {
        self.transactions.extend(transactions);
        self.sort();
    }

    fn sort(&mut self) {
        self.transactions.sort_by_key(|txn| Reverse(txn.timestamp));
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn get(&self, id: Uuid) -> CoreResult<&Transaction> {
        self.transactions
            .iter()
            .find(|txn| txn.id == id)
            .ok_or(CoreError::TransactionNotFound(id))
    }

    /// Case-insensitive substring match on descriptions, newest first.
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Transaction> {
        let needle = query.trim().to_lowercase();
        self.transactions
            .iter()
            .filter(|txn| needle.is_empty() || txn.description.to_lowercase().contains(&needle))
            .collect()
    }
}
