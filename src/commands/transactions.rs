// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Ledger;
use crate::models::Transaction;
use crate::utils::{
    get_currency_symbol, maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table,
    raw_amount,
};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let desc = sub.get_one::<String>("desc").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let date_raw = sub.get_one::<String>("date").unwrap().trim();
    let date = parse_date(date_raw)?;
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.as_str())
        .unwrap_or("");

    let tx = ledger.add(desc, amount, &date.to_string(), category);
    println!(
        "Recorded #{} {} on {} '{}' ({})",
        tx.id, tx.amount, tx.date, tx.description, tx.category
    );
    Ok(())
}

fn rm(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if ledger.remove(id) {
        println!("Removed transaction #{}", id);
    } else {
        println!("No transaction #{}", id);
    }
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let symbol = get_currency_symbol(ledger.store().connection())?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.description.clone(),
                    signed_amount(r.amount, &symbol),
                    r.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Description", "Amount", "Category"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub description: String,
    pub amount: Decimal,
    pub date: String,
    pub category: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id,
            description: t.description.clone(),
            amount: t.amount,
            date: t.date.clone(),
            category: t.category.clone(),
        }
    }
}

pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = match sub.get_one::<String>("month").map(|s| s.trim()) {
        Some(m) if !m.is_empty() => Some(parse_month(m)?),
        _ => None,
    };
    Ok(ledger
        .filter_by_month(month.as_deref())
        .into_iter()
        .map(TransactionRow::from)
        .collect())
}

/// `+₹50000` / `-₹120.5`: sign first, then the magnitude as entered.
pub fn signed_amount(amount: Decimal, symbol: &str) -> String {
    let sign = if amount > Decimal::ZERO { '+' } else { '-' };
    format!("{}{}{}", sign, symbol, raw_amount(amount.abs()))
}
