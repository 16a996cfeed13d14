// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pennywise::db::{KEY_PROJECTED_INCOME, KEY_TOTAL_EXPENSE, KEY_TOTAL_INCOME, KEY_TRANSACTIONS};
use pennywise::utils::{get_currency_symbol, set_currency_symbol};
use pennywise::{LedgerStore, MemoryStore, Repository, SqliteStore};
use tempfile::tempdir;

#[test]
fn sqlite_get_set_and_overwrite() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(store.get("totalIncome").unwrap(), None);
    store.set("totalIncome", "10").unwrap();
    store.set("totalIncome", "20").unwrap();
    assert_eq!(store.get("totalIncome").unwrap().as_deref(), Some("20"));
}

#[test]
fn sqlite_set_many_writes_every_entry() {
    let store = SqliteStore::open_in_memory().unwrap();
    store
        .set_many(&[
            (KEY_TRANSACTIONS, "[]".to_string()),
            (KEY_TOTAL_INCOME, "0".to_string()),
        ])
        .unwrap();
    assert_eq!(store.get(KEY_TRANSACTIONS).unwrap().as_deref(), Some("[]"));
    assert_eq!(store.get(KEY_TOTAL_INCOME).unwrap().as_deref(), Some("0"));
}

fn reject_expense_writes(store: &SqliteStore) {
    store
        .connection()
        .execute_batch(
            "CREATE TRIGGER reject_expense_insert BEFORE INSERT ON ledger
               WHEN NEW.key = 'totalExpense' BEGIN SELECT RAISE(ABORT, 'rejected'); END;
             CREATE TRIGGER reject_expense_update BEFORE UPDATE ON ledger
               WHEN NEW.key = 'totalExpense' BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .unwrap();
}

#[test]
fn sqlite_set_many_is_all_or_nothing() {
    let store = SqliteStore::open_in_memory().unwrap();
    store
        .set_many(&[
            (KEY_TRANSACTIONS, "[]".to_string()),
            (KEY_TOTAL_INCOME, "0".to_string()),
            (KEY_TOTAL_EXPENSE, "0".to_string()),
        ])
        .unwrap();
    reject_expense_writes(&store);

    let res = store.set_many(&[
        (KEY_TRANSACTIONS, "[{}]".to_string()),
        (KEY_TOTAL_INCOME, "100".to_string()),
        (KEY_TOTAL_EXPENSE, "-5".to_string()),
    ]);
    assert!(res.is_err());
    assert_eq!(store.get(KEY_TRANSACTIONS).unwrap().as_deref(), Some("[]"));
    assert_eq!(store.get(KEY_TOTAL_INCOME).unwrap().as_deref(), Some("0"));
    assert_eq!(store.get(KEY_TOTAL_EXPENSE).unwrap().as_deref(), Some("0"));

    // The connection is usable again once the failed batch is rolled back.
    store.set(KEY_TOTAL_INCOME, "7").unwrap();
    assert_eq!(store.get(KEY_TOTAL_INCOME).unwrap().as_deref(), Some("7"));
}

#[test]
fn failed_write_leaves_list_and_totals_consistent() {
    let store = SqliteStore::open_in_memory().unwrap();
    reject_expense_writes(&store);

    let mut repo = Repository::open(&store);
    repo.add("Salary", "50000".parse().unwrap(), "2024-01-05", "Job");

    assert_eq!(repo.list_all().len(), 1);
    assert_eq!(store.get(KEY_TRANSACTIONS).unwrap(), None);
    assert_eq!(store.get(KEY_TOTAL_INCOME).unwrap(), None);
}

#[test]
fn clear_keeps_settings() {
    let store = SqliteStore::open_in_memory().unwrap();
    set_currency_symbol(store.connection(), "$").unwrap();
    store.set(KEY_PROJECTED_INCOME, "100").unwrap();
    store.clear().unwrap();

    assert_eq!(store.get(KEY_PROJECTED_INCOME).unwrap(), None);
    assert_eq!(get_currency_symbol(store.connection()).unwrap(), "$");
}

#[test]
fn currency_symbol_defaults_to_rupee() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(get_currency_symbol(store.connection()).unwrap(), "₹");
}

#[test]
fn sqlite_ledger_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("ledger.sqlite");
    {
        let mut repo = Repository::open(SqliteStore::open(&path).unwrap());
        repo.add("Salary", "50000".parse().unwrap(), "2024-01-05", "Job");
        repo.add("Rent", "-10000".parse().unwrap(), "2024-01-10", "Housing");
    }
    let repo = Repository::open(SqliteStore::open(&path).unwrap());
    assert_eq!(repo.list_all().len(), 2);
    assert_eq!(repo.list_all()[1].category, "Housing");
    assert_eq!(repo.cached_totals().expense, "-10000".parse::<rust_decimal::Decimal>().unwrap());
}

#[test]
fn memory_store_roundtrip_and_clear() {
    let store = MemoryStore::new();
    store.set("a", "1").unwrap();
    store
        .set_many(&[("b", "2".to_string()), ("a", "3".to_string())])
        .unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("a").unwrap().as_deref(), Some("3"));
    store.clear().unwrap();
    assert!(store.is_empty());
}
