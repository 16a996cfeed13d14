// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Ledger;
use anyhow::{bail, Result};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    if !m.get_flag("yes") {
        bail!("Refusing to delete all transactions without --yes");
    }
    let n = ledger.list_all().len();
    ledger.reset_all();
    println!("Deleted {} transactions and cleared projections", n);
    Ok(())
}
