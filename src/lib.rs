// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod projection;
pub mod repository;
pub mod utils;

pub use db::{LedgerStore, MemoryStore, SqliteStore};
pub use repository::Repository;
