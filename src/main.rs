// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use pennywise::{cli, commands, db, Repository};

const LOG_ENV: &str = "PENNYWISE_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let db_override = matches.get_one::<String>("db").map(PathBuf::from);
    let store = db::open_or_init(db_override.as_deref())?;
    let mut ledger = Repository::open(store);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!(
                "Database initialized at {}",
                db::db_path(db_override.as_deref())?.display()
            );
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut ledger, sub)?,
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("projection", sub)) => commands::projections::handle(&mut ledger, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ledger, sub)?,
        Some(("reset", sub)) => commands::reset::handle(&mut ledger, sub)?,
        Some(("doctor", sub)) => commands::doctor::handle(&mut ledger, sub)?,
        Some(("config", sub)) => commands::config::handle(&ledger, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
