// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory transaction list, written through to a [`LedgerStore`] on
//! every mutation.

use crate::aggregate::recompute_totals;
use crate::db::{read_decimal, LedgerStore, KEY_TOTAL_EXPENSE, KEY_TOTAL_INCOME, KEY_TRANSACTIONS};
use crate::models::{Projections, ProjectionKind, Totals, Transaction, DEFAULT_CATEGORY};
use crate::projection;
use rust_decimal::Decimal;
use tracing::{debug, warn};

pub struct Repository<S: LedgerStore> {
    store: S,
    transactions: Vec<Transaction>,
    next_id: i64,
}

impl<S: LedgerStore> Repository<S> {
    /// An empty repository. Call [`Repository::initialize`] to hydrate it.
    pub fn new(store: S) -> Self {
        Self {
            store,
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    pub fn open(store: S) -> Self {
        let mut repo = Self::new(store);
        repo.initialize();
        repo
    }

    /// Loads the persisted list and refreshes the cached totals.
    ///
    /// Missing or unreadable state yields an empty ledger rather than an
    /// error.
    pub fn initialize(&mut self) {
        self.transactions = load_transactions(&self.store);
        let max_id = self.transactions.iter().map(|t| t.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id.saturating_add(1)).max(1);

        let totals = self.totals();
        if self.cached_totals() != totals {
            debug!(?totals, "refreshing cached totals");
            self.write(&[
                (KEY_TOTAL_INCOME, totals.income.to_string()),
                (KEY_TOTAL_EXPENSE, totals.expense.to_string()),
            ]);
        }
    }

    /// Appends a transaction. A blank category becomes `Uncategorized`.
    pub fn add(
        &mut self,
        description: &str,
        amount: Decimal,
        date: &str,
        category_raw: &str,
    ) -> Transaction {
        let category = match category_raw.trim() {
            "" => DEFAULT_CATEGORY.to_string(),
            c => c.to_string(),
        };
        let tx = Transaction {
            id: self.allocate_id(),
            description: description.to_string(),
            amount,
            date: date.to_string(),
            category,
        };
        self.transactions.push(tx.clone());
        self.persist();
        debug!(id = tx.id, amount = %tx.amount, "transaction added");
        tx
    }

    /// Removes the transaction with `id`; returns whether one was found.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        self.persist();
        debug!(id, removed, "transaction removed");
        removed
    }

    pub fn get(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Insertion order.
    pub fn list_all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions whose date starts with `prefix` (usually `YYYY-MM`).
    /// No prefix, or an empty one, returns everything.
    pub fn filter_by_month(&self, prefix: Option<&str>) -> Vec<&Transaction> {
        match prefix.filter(|p| !p.is_empty()) {
            Some(p) => self
                .transactions
                .iter()
                .filter(|t| t.date.starts_with(p))
                .collect(),
            None => self.transactions.iter().collect(),
        }
    }

    /// Drops every ledger key, projections included.
    pub fn reset_all(&mut self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "could not clear store");
        }
        self.transactions.clear();
        debug!("ledger reset");
    }

    /// Totals derived from the in-memory list.
    pub fn totals(&self) -> Totals {
        recompute_totals(&self.transactions)
    }

    /// Totals as last persisted; zero for anything missing.
    pub fn cached_totals(&self) -> Totals {
        Totals {
            income: read_decimal(&self.store, KEY_TOTAL_INCOME),
            expense: read_decimal(&self.store, KEY_TOTAL_EXPENSE),
        }
    }

    /// Rewrites the cached totals from the list.
    pub fn refresh_totals(&mut self) -> Totals {
        self.persist();
        self.totals()
    }

    pub fn projections(&self) -> Projections {
        projection::load_projections(&self.store)
    }

    pub fn set_projection(&mut self, kind: ProjectionKind, raw: &str) -> Option<Decimal> {
        projection::set_projection(&self.store, kind, raw)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// List and cached totals go out in a single write.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.transactions) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "could not serialize transactions");
                return;
            }
        };
        let totals = self.totals();
        self.write(&[
            (KEY_TRANSACTIONS, json),
            (KEY_TOTAL_INCOME, totals.income.to_string()),
            (KEY_TOTAL_EXPENSE, totals.expense.to_string()),
        ]);
    }

    fn write(&self, entries: &[(&str, String)]) {
        if let Err(err) = self.store.set_many(entries) {
            warn!(error = %err, "could not persist ledger; changes are kept in memory only");
        }
    }
}

fn load_transactions<S: LedgerStore>(store: &S) -> Vec<Transaction> {
    let raw = match store.get(KEY_TRANSACTIONS) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(error = %err, "could not read transactions, starting empty");
            return Vec::new();
        }
    };
    let rows = match serde_json::from_str::<Option<Vec<serde_json::Value>>>(&raw) {
        Ok(rows) => rows.unwrap_or_default(),
        Err(err) => {
            warn!(error = %err, "stored transactions are malformed, starting empty");
            return Vec::new();
        }
    };
    rows.into_iter()
        .enumerate()
        .filter_map(|(i, row)| match serde_json::from_value::<Transaction>(row) {
            Ok(tx) => Some(tx),
            Err(err) => {
                warn!(index = i, error = %err, "skipping malformed stored transaction");
                None
            }
        })
        .collect()
}
