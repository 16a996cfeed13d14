// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Ledger;
use crate::export::{export_json, write_csv};
use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(ledger, sub),
        _ => Ok(()),
    }
}

fn export_transactions(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    if fmt != "csv" && fmt != "json" {
        return Err(anyhow!("Unknown format: {} (use csv|json)", fmt));
    }
    let out = sub.get_one::<String>("out");

    let mut sink: Box<dyn Write> = match out {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Create {}", path))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    match fmt.as_str() {
        "csv" => write_csv(ledger.list_all(), &mut sink)?,
        _ => writeln!(sink, "{}", export_json(ledger.list_all())?)?,
    }
    sink.flush()?;

    if let Some(path) = out {
        println!(
            "Exported {} transactions to {}",
            ledger.list_all().len(),
            path
        );
    }
    Ok(())
}
