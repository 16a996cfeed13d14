// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Ledger;
use crate::aggregate::{self, SummaryText, VarianceText};
use crate::models::{CategoryTotal, Overview};
use crate::utils::{fixed2, fmt_money, get_currency_symbol, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(ledger, sub)?,
        Some(("by-category", sub)) => by_category(ledger, sub)?,
        Some(("overview", sub)) => overview(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

/// Reads the cached totals, the same figures the header of the app shows.
pub fn summary_data(ledger: &Ledger) -> Result<SummaryText> {
    let totals = ledger.cached_totals();
    let s = aggregate::summary(totals.income, totals.expense);
    let symbol = get_currency_symbol(ledger.store().connection())?;
    Ok(aggregate::summary_text(&s, &symbol))
}

fn summary(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let data = summary_data(ledger)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        println!(
            "{}",
            pretty_table(
                &["Income", "Expense", "Balance"],
                vec![vec![data.income, data.expense, data.balance]],
            )
        );
    }
    Ok(())
}

pub fn category_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<CategoryTotal>> {
    let month = match sub.get_one::<String>("month").map(|s| s.trim()) {
        Some(m) if !m.is_empty() => Some(parse_month(m)?),
        _ => None,
    };
    Ok(aggregate::category_breakdown(
        ledger.filter_by_month(month.as_deref()),
    ))
}

fn by_category(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let data = category_rows(ledger, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let symbol = get_currency_symbol(ledger.store().connection())?;
        let rows = data
            .iter()
            .map(|c| vec![c.category.clone(), fmt_money(c.spent, &symbol)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}

#[derive(Serialize)]
struct OverviewOut<'a> {
    #[serde(flatten)]
    overview: &'a Overview,
    display: VarianceText,
}

fn overview(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let ov = aggregate::overview(ledger.list_all(), ledger.projections());
    let symbol = get_currency_symbol(ledger.store().connection())?;
    let text = aggregate::variance_text(&ov.variance, &symbol);
    let out = OverviewOut {
        overview: &ov,
        display: text.clone(),
    };
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &out)? {
        return Ok(());
    }
    let projected_balance = ov.projected.income - ov.projected.expense;
    let rows = vec![
        vec![
            "Income".to_string(),
            fmt_money(ov.income, &symbol),
            fmt_money(ov.projected.income, &symbol),
            text.income_diff,
        ],
        vec![
            "Expenses".to_string(),
            fmt_money(ov.expenses, &symbol),
            fmt_money(ov.projected.expense, &symbol),
            text.expense_diff,
        ],
        vec![
            "Balance".to_string(),
            fmt_money(ov.balance, &symbol),
            fmt_money(projected_balance, &symbol),
            text.balance_diff,
        ],
    ];
    println!(
        "{}",
        pretty_table(&["", "Actual", "Projected", "Difference"], rows)
    );
    if !ov.categories.is_empty() {
        let cats = ov
            .categories
            .iter()
            .map(|c| vec![c.category.clone(), fixed2(c.spent)])
            .collect();
        println!("{}", pretty_table(&["Category", "Actual Expenses"], cats));
    }
    Ok(())
}
