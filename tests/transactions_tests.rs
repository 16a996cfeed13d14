// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pennywise::commands::{doctor, reports, transactions, Ledger};
use pennywise::db::{KEY_TOTAL_INCOME, KEY_TRANSACTIONS};
use pennywise::{cli, LedgerStore, Repository, SqliteStore};
use rust_decimal::Decimal;

fn setup() -> Ledger {
    let mut ledger = Repository::open(SqliteStore::open_in_memory().unwrap());
    for (desc, amount, date, cat) in [
        ("Salary", "50000", "2024-01-05", "Job"),
        ("Rent", "-10000", "2024-01-10", "Housing"),
        ("Groceries", "-1200", "2024-02-02", ""),
    ] {
        ledger.add(desc, amount.parse().unwrap(), date, cat);
    }
    ledger
}

fn sub_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    let (_, group) = matches.subcommand().expect("no command");
    let (_, action) = group.subcommand().expect("no action");
    action.clone()
}

#[test]
fn list_month_filter_respected() {
    let ledger = setup();
    let m = sub_matches(&["pennywise", "tx", "list", "--month", "2024-01"]);
    let rows = transactions::query_rows(&ledger, &m).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].description, "Salary");
    assert_eq!(rows[1].description, "Rent");
}

#[test]
fn list_without_month_returns_all_in_order() {
    let ledger = setup();
    let m = sub_matches(&["pennywise", "tx", "list"]);
    let rows = transactions::query_rows(&ledger, &m).unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.description.as_str()).collect();
    assert_eq!(names, ["Salary", "Rent", "Groceries"]);
    assert_eq!(rows[2].category, "Uncategorized");
}

#[test]
fn list_rejects_malformed_month() {
    let ledger = setup();
    let m = sub_matches(&["pennywise", "tx", "list", "--month", "January"]);
    assert!(transactions::query_rows(&ledger, &m).is_err());
}

#[test]
fn add_validates_amount_and_date() {
    let mut ledger = setup();
    let matches = cli::build_cli().get_matches_from([
        "pennywise", "tx", "add", "--desc", "Bad", "--amount", "ten", "--date", "2024-01-01",
    ]);
    let (_, tx_m) = matches.subcommand().unwrap();
    assert!(transactions::handle(&mut ledger, tx_m).is_err());

    let matches = cli::build_cli().get_matches_from([
        "pennywise", "tx", "add", "--desc", "Bad", "--amount", "-10", "--date", "2024-13-01",
    ]);
    let (_, tx_m) = matches.subcommand().unwrap();
    assert!(transactions::handle(&mut ledger, tx_m).is_err());
    assert_eq!(ledger.list_all().len(), 3);
}

#[test]
fn add_accepts_negative_amounts() {
    let mut ledger = setup();
    let matches = cli::build_cli().get_matches_from([
        "pennywise", "tx", "add", "--desc", "Tea", "--amount", "-40", "--date", "2024-03-01",
        "--category", "Food",
    ]);
    let (_, tx_m) = matches.subcommand().unwrap();
    transactions::handle(&mut ledger, tx_m).unwrap();
    let last = ledger.list_all().last().unwrap();
    assert_eq!(last.amount, Decimal::from(-40));
    assert_eq!(last.date, "2024-03-01");
}

#[test]
fn signed_amount_matches_list_display() {
    assert_eq!(transactions::signed_amount(Decimal::from(50000), "₹"), "+₹50000");
    assert_eq!(
        transactions::signed_amount("-120.50".parse().unwrap(), "₹"),
        "-₹120.5"
    );
}

#[test]
fn summary_report_uses_cached_totals() {
    let ledger = setup();
    let text = reports::summary_data(&ledger).unwrap();
    assert_eq!(text.income, "+₹50000.00");
    assert_eq!(text.expense, "-₹11200.00");
    assert_eq!(text.balance, "₹38800.00");
}

#[test]
fn category_report_can_be_limited_to_a_month() {
    let ledger = setup();
    let m = sub_matches(&["pennywise", "report", "by-category", "--month", "2024-02"]);
    let rows = reports::category_rows(&ledger, &m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, "Uncategorized");
    assert_eq!(rows[0].spent, Decimal::from(1200));
}

#[test]
fn doctor_flags_stale_cache_and_fix_repairs_it() {
    let mut ledger = setup();
    ledger.store().set(KEY_TOTAL_INCOME, "1").unwrap();
    let issues = doctor::check(&ledger);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0][0], "stale_total_income");

    let matches = cli::build_cli().get_matches_from(["pennywise", "doctor", "--fix"]);
    let (_, doctor_m) = matches.subcommand().unwrap();
    doctor::handle(&mut ledger, doctor_m).unwrap();
    assert!(doctor::check(&ledger).is_empty());
}

#[test]
fn doctor_flags_bad_dates_from_imported_state() {
    let store = SqliteStore::open_in_memory().unwrap();
    store
        .set(
            KEY_TRANSACTIONS,
            r#"[{"id":1,"text":"Odd","amount":"-5","date":"soon","category":"Misc"}]"#,
        )
        .unwrap();
    let ledger = Repository::open(store);
    let issues = doctor::check(&ledger);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0][0], "invalid_date");
}
