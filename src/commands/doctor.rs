// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Ledger;
use crate::utils::{parse_date, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;

pub fn check(ledger: &Ledger) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    // 1) Cached totals out of step with the list
    let cached = ledger.cached_totals();
    let actual = ledger.totals();
    if cached.income != actual.income {
        rows.push(vec![
            "stale_total_income".into(),
            format!("cached {} vs {}", cached.income, actual.income),
        ]);
    }
    if cached.expense != actual.expense {
        rows.push(vec![
            "stale_total_expense".into(),
            format!("cached {} vs {}", cached.expense, actual.expense),
        ]);
    }

    // 2) Per-transaction issues
    let mut seen = HashSet::new();
    for t in ledger.list_all() {
        if !seen.insert(t.id) {
            rows.push(vec!["duplicate_id".into(), t.id.to_string()]);
        }
        if parse_date(&t.date).is_err() {
            rows.push(vec!["invalid_date".into(), format!("#{} '{}'", t.id, t.date)]);
        }
        if t.amount == Decimal::ZERO {
            rows.push(vec!["zero_amount".into(), format!("#{}", t.id)]);
        }
    }
    rows
}

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    let rows = check(ledger);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
        return Ok(());
    }
    println!("{}", pretty_table(&["Issue", "Detail"], rows));
    if m.get_flag("fix") {
        let totals = ledger.refresh_totals();
        println!(
            "Cached totals rewritten: income {}, expense {}",
            totals.income, totals.expense
        );
    }
    Ok(())
}
