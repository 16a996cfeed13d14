// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A single income (positive amount) or expense (negative amount) entry.
///
/// The persisted JSON keeps the browser-era field names and number
/// encoding, so `description` is stored under `text` and `amount` as a
/// JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "text", alias = "description")]
    pub description: String,
    #[serde(serialize_with = "amount_json::serialize")]
    pub amount: Decimal,
    pub date: String, // YYYY-MM-DD
    pub category: String,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

mod amount_json {
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use serde::Serializer;
    use std::str::FromStr;

    /// A JSON number whenever a double reproduces the value exactly; a
    /// decimal string otherwise. Reading accepts either.
    pub fn serialize<S: Serializer>(d: &Decimal, s: S) -> Result<S::Ok, S::Error> {
        if d.fract().is_zero() {
            if let Some(i) = d.to_i64() {
                return s.serialize_i64(i);
            }
        }
        if let Some(f) = d.to_f64().filter(|f| f.is_finite()) {
            if Decimal::from_str(&f.to_string()).ok() == Some(*d) {
                return s.serialize_f64(f);
            }
        }
        s.serialize_str(&d.to_string())
    }
}

/// Sum of positive amounts and sum of negative amounts (kept signed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variance {
    pub income_diff: Decimal,
    pub expense_diff: Decimal,
    pub balance_diff: Decimal,
}

/// User-declared targets. Expense is stored as a positive magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projections {
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub spent: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    Income,
    Expense,
}

impl ProjectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectionKind::Income => "income",
            ProjectionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(ProjectionKind::Income),
            "expense" | "expenses" => Ok(ProjectionKind::Expense),
            other => Err(anyhow::anyhow!(
                "Unknown projection kind '{}' (use income|expense)",
                other
            )),
        }
    }
}

/// Everything the overview panel shows: actuals, targets, variance and the
/// per-category expense breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
    pub projected: Projections,
    pub variance: Variance,
    pub categories: Vec<CategoryTotal>,
}
