// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived figures. Everything here is a pure function of its inputs.

use crate::models::{CategoryTotal, Overview, Projections, Summary, Totals, Transaction, Variance};
use crate::utils::{fixed2, fmt_money};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

/// `a + b`, pinned to the representable range instead of panicking.
fn add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| {
        warn!(%a, %b, "sum out of range, clamping");
        a.saturating_add(b)
    })
}

fn sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b).unwrap_or_else(|| {
        warn!(%a, %b, "difference out of range, clamping");
        a.saturating_sub(b)
    })
}

pub fn recompute_totals<'a, I>(transactions: I) -> Totals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals = Totals::default();
    for t in transactions {
        if t.is_income() {
            totals.income = add(totals.income, t.amount);
        } else if t.is_expense() {
            totals.expense = add(totals.expense, t.amount);
        }
    }
    totals
}

/// `expense` is already signed, so the balance is a plain sum.
pub fn summary(total_income: Decimal, total_expense: Decimal) -> Summary {
    Summary {
        income: total_income,
        expense: total_expense,
        balance: add(total_income, total_expense),
    }
}

/// Summary figures ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryText {
    pub income: String,
    pub expense: String,
    pub balance: String,
}

/// Income gets an explicit `+`, expense an explicit `-` in front of its
/// magnitude, and the balance keeps whatever sign the sum produced.
pub fn summary_text(s: &Summary, symbol: &str) -> SummaryText {
    SummaryText {
        income: format!("+{}", fmt_money(s.income, symbol)),
        expense: format!("-{}", fmt_money(s.expense.abs(), symbol)),
        balance: fmt_money(s.balance, symbol),
    }
}

/// Absolute expense per category, in first-seen order.
pub fn category_breakdown<'a, I>(transactions: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut out: Vec<CategoryTotal> = Vec::new();
    for t in transactions.into_iter().filter(|t| t.is_expense()) {
        match out.iter_mut().find(|c| c.category == t.category) {
            Some(c) => c.spent = add(c.spent, t.amount.abs()),
            None => out.push(CategoryTotal {
                category: t.category.clone(),
                spent: t.amount.abs(),
            }),
        }
    }
    out
}

/// Income compares signed values, expense compares magnitudes against the
/// (positive) projected expense. The asymmetry is intentional.
pub fn projection_variance(
    actual_income: Decimal,
    actual_expense: Decimal,
    projected_income: Decimal,
    projected_expense: Decimal,
) -> Variance {
    Variance {
        income_diff: sub(actual_income, projected_income),
        expense_diff: sub(actual_expense.abs(), projected_expense),
        balance_diff: sub(
            add(actual_income, actual_expense),
            sub(projected_income, projected_expense),
        ),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarianceText {
    pub income_diff: String,
    pub expense_diff: String,
    pub balance_diff: String,
}

/// Variance labels as the overview panel prints them: fixed `+`/`-` prefixes
/// on the income and expense lines regardless of the value's own sign.
pub fn variance_text(v: &Variance, symbol: &str) -> VarianceText {
    VarianceText {
        income_diff: format!("+{}{}", symbol, fixed2(v.income_diff)),
        expense_diff: format!("-{}{}", symbol, fixed2(v.expense_diff)),
        balance_diff: fmt_money(v.balance_diff, symbol),
    }
}

pub fn overview(transactions: &[Transaction], projected: Projections) -> Overview {
    let totals = recompute_totals(transactions);
    let variance = projection_variance(
        totals.income,
        totals.expense,
        projected.income,
        projected.expense,
    );
    Overview {
        income: totals.income,
        expenses: totals.expense.abs(),
        balance: add(totals.income, totals.expense),
        projected,
        variance,
        categories: category_breakdown(transactions),
    }
}
