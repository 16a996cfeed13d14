// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{read_decimal, LedgerStore, KEY_PROJECTED_EXPENSE, KEY_PROJECTED_INCOME};
use crate::models::{ProjectionKind, Projections};
use crate::utils::lenient_decimal;
use rust_decimal::Decimal;
use tracing::{debug, warn};

pub fn key_for(kind: ProjectionKind) -> &'static str {
    match kind {
        ProjectionKind::Income => KEY_PROJECTED_INCOME,
        ProjectionKind::Expense => KEY_PROJECTED_EXPENSE,
    }
}

/// Stores a projection target, replacing any previous value.
///
/// Empty or non-numeric input leaves the store untouched and returns `None`.
pub fn set_projection<S: LedgerStore + ?Sized>(
    store: &S,
    kind: ProjectionKind,
    raw: &str,
) -> Option<Decimal> {
    let Some(value) = lenient_decimal(raw) else {
        debug!(%kind, raw, "ignoring projection that is not a number");
        return None;
    };
    if let Err(err) = store.set(key_for(kind), &value.to_string()) {
        warn!(%kind, error = %err, "could not persist projection");
    }
    Some(value)
}

pub fn load_projections<S: LedgerStore + ?Sized>(store: &S) -> Projections {
    Projections {
        income: read_decimal(store, KEY_PROJECTED_INCOME),
        expense: read_decimal(store, KEY_PROJECTED_EXPENSE),
    }
}
