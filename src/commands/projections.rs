// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Ledger;
use crate::models::ProjectionKind;
use crate::utils::{fmt_money, get_currency_symbol, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(ledger, sub)?,
        Some(("show", sub)) => show(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let kind: ProjectionKind = sub.get_one::<String>("kind").unwrap().parse()?;
    let raw = sub.get_one::<String>("value").unwrap();
    match ledger.set_projection(kind, raw) {
        Some(v) => println!("Projected {} saved: {}", kind, v),
        None => println!("Ignored projected {} '{}': not a number", kind, raw),
    }
    Ok(())
}

fn show(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let p = ledger.projections();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &p)? {
        let symbol = get_currency_symbol(ledger.store().connection())?;
        println!(
            "{}",
            pretty_table(
                &["Projected income", "Projected expense"],
                vec![vec![fmt_money(p.income, &symbol), fmt_money(p.expense, &symbol)]],
            )
        );
    }
    Ok(())
}
