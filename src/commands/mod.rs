// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::SqliteStore;
use crate::repository::Repository;

/// The repository every command handler works against.
pub type Ledger = Repository<SqliteStore>;

pub mod config;
pub mod doctor;
pub mod exporter;
pub mod projections;
pub mod reports;
pub mod reset;
pub mod transactions;
