// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::StoreResult;
use crate::utils::lenient_decimal;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.pennywise", "Pennywise", "pennywise"));

pub const DB_ENV: &str = "PENNYWISE_DB";

pub const KEY_TRANSACTIONS: &str = "transactions";
pub const KEY_TOTAL_INCOME: &str = "totalIncome";
pub const KEY_TOTAL_EXPENSE: &str = "totalExpense";
pub const KEY_PROJECTED_INCOME: &str = "projectedIncome";
pub const KEY_PROJECTED_EXPENSE: &str = "projectedExpense";

/// Durable string key/value storage for the ledger keys.
///
/// `clear` only drops keys owned by the ledger; configuration kept next to
/// it survives a reset.
pub trait LedgerStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    fn clear(&self) -> StoreResult<()>;

    /// Writes every entry or none of them.
    fn set_many(&self, entries: &[(&str, String)]) -> StoreResult<()> {
        for (k, v) in entries {
            self.set(k, v)?;
        }
        Ok(())
    }
}

impl<T: LedgerStore + ?Sized> LedgerStore for &T {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn clear(&self) -> StoreResult<()> {
        (**self).clear()
    }

    fn set_many(&self, entries: &[(&str, String)]) -> StoreResult<()> {
        (**self).set_many(entries)
    }
}

pub fn db_path(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = override_path {
        return Ok(p.to_path_buf());
    }
    if let Some(p) = std::env::var_os(DB_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(p));
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("pennywise.sqlite"))
}

pub fn open_or_init(override_path: Option<&Path>) -> Result<SqliteStore> {
    let path = db_path(override_path)?;
    SqliteStore::open(&path).with_context(|| format!("Open DB at {}", path.display()))
}

fn init_schema(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS ledger(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    "#,
    )?;
    Ok(())
}

/// SQLite-backed store. Ledger keys live in `ledger`, configuration in
/// `settings`.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    pub fn from_connection(conn: Connection) -> StoreResult<Self> {
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl LedgerStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let v: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM ledger WHERE key=?1",
                params![key],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO ledger(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM ledger", [])?;
        Ok(())
    }

    fn set_many(&self, entries: &[(&str, String)]) -> StoreResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO ledger(key, value) VALUES(?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=datetime('now')",
            )?;
            for (k, v) in entries {
                stmt.execute(params![k, v])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}

/// In-process store; nothing survives the value being dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: RefCell::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl LedgerStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.entries.borrow_mut().clear();
        Ok(())
    }

    fn set_many(&self, entries: &[(&str, String)]) -> StoreResult<()> {
        let mut map = self.entries.borrow_mut();
        for (k, v) in entries {
            map.insert(k.to_string(), v.clone());
        }
        Ok(())
    }
}

/// Reads a decimal scalar, falling back to zero when the key is missing,
/// unreadable or not a number.
pub fn read_decimal<S: LedgerStore + ?Sized>(store: &S, key: &str) -> Decimal {
    match store.get(key) {
        Ok(Some(raw)) => lenient_decimal(&raw).unwrap_or_else(|| {
            warn!(key, value = %raw, "stored value is not a number, using 0");
            Decimal::ZERO
        }),
        Ok(None) => Decimal::ZERO,
        Err(err) => {
            warn!(key, error = %err, "could not read from store, using 0");
            Decimal::ZERO
        }
    }
}
