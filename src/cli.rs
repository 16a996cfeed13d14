// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    ]
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Only transactions whose date starts with this month")
}

pub fn build_cli() -> Command {
    Command::new("pennywise")
        .version(clap::crate_version!())
        .about("Local income/expense ledger with summaries and projections")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .help("SQLite file to use (default: $PENNYWISE_DB or the platform data dir)"),
        )
        .subcommand(Command::new("init").about("Create the database if missing"))
        .subcommand(
            Command::new("tx")
                .about("Record, list and delete transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record income (positive) or an expense (negative)")
                        .arg(Arg::new("desc").long("desc").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .value_name("YYYY-MM-DD"),
                        )
                        .arg(Arg::new("category").long("category")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions in the order they were added")
                        .arg(month_arg())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("rm").about("Delete a transaction by id").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Derived figures")
                .subcommand(
                    Command::new("summary")
                        .about("Income, expense and balance")
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("by-category")
                        .about("Expense per category")
                        .arg(month_arg())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("overview")
                        .about("Actuals against projections")
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("projection")
                .about("Projected income and expense targets")
                .subcommand(
                    Command::new("set")
                        .arg(
                            Arg::new("kind")
                                .required(true)
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("value").required(true).allow_hyphen_values(true)),
                )
                .subcommand(Command::new("show").args(json_args())),
        )
        .subcommand(
            Command::new("export").about("Write the ledger to a file").subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv|json"),
                    )
                    .arg(
                        Arg::new("out")
                            .long("out")
                            .value_name("PATH")
                            .help("Output file (default: stdout)"),
                    ),
            ),
        )
        .subcommand(
            Command::new("reset")
                .about("Delete all transactions and projections")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm the reset"),
                ),
        )
        .subcommand(
            Command::new("doctor")
                .about("Check the stored ledger for inconsistencies")
                .arg(
                    Arg::new("fix")
                        .long("fix")
                        .action(ArgAction::SetTrue)
                        .help("Rewrite cached totals from the transaction list"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Display settings")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set-symbol")
                        .about("Currency symbol used when printing money")
                        .arg(Arg::new("symbol").required(true)),
                ),
        )
}
