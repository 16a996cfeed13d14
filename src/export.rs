// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use crate::utils::raw_amount;
use anyhow::{Context, Result};
use serde_json::json;
use std::io::Write;

pub const CSV_HEADER: [&str; 4] = ["Description", "Amount", "Date", "Category"];

/// One header row, then one row per transaction in the order given.
///
/// Amounts are written unformatted. Fields that contain a comma, quote or
/// newline are quoted; everything else is written as-is.
pub fn write_csv<'a, I, W>(transactions: I, writer: W) -> Result<()>
where
    I: IntoIterator<Item = &'a Transaction>,
    W: Write,
{
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for t in transactions {
        wtr.write_record([
            t.description.as_str(),
            raw_amount(t.amount).as_str(),
            t.date.as_str(),
            t.category.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_csv<'a, I>(transactions: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut buf = Vec::new();
    write_csv(transactions, &mut buf)?;
    String::from_utf8(buf).context("CSV output is not UTF-8")
}

pub fn export_json<'a, I>(transactions: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let items: Vec<_> = transactions
        .into_iter()
        .map(|t| {
            json!({
                "id": t.id,
                "description": t.description,
                "amount": raw_amount(t.amount),
                "date": t.date,
                "category": t.category,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&items)?)
}
