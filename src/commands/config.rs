// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Ledger;
use crate::utils::{get_currency_symbol, pretty_table, set_currency_symbol};
use anyhow::{bail, Result};

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    let conn = ledger.store().connection();
    match m.subcommand() {
        Some(("set-symbol", sub)) => {
            let symbol = sub.get_one::<String>("symbol").unwrap().trim();
            if symbol.is_empty() {
                bail!("Currency symbol cannot be empty");
            }
            set_currency_symbol(conn, symbol)?;
            println!("Currency symbol set to {}", symbol);
        }
        Some(("show", _)) | None => {
            let symbol = get_currency_symbol(conn)?;
            println!(
                "{}",
                pretty_table(&["Setting", "Value"], vec![vec!["currency_symbol".into(), symbol]])
            );
        }
        _ => {}
    }
    Ok(())
}
