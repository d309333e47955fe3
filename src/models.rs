// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Sort position for bills without a due day; after every real day.
pub const NO_DUE_SORT_DAY: i64 = 99;
/// Unpaid bills due on or before this day fall in the early pay period.
pub const CADENCE_SPLIT_DAY: i64 = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "due_field")]
    pub due: Option<i64>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub paid: bool,
}

impl Bill {
    /// A freshly added row: blank name, no due day, zero amount, unpaid.
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            due: None,
            amount: 0.0,
            paid: false,
        }
    }

    pub fn new(name: impl Into<String>, due: Option<i64>, amount: f64, paid: bool) -> Self {
        Self {
            name: name.into(),
            due: normalize_due(due),
            amount,
            paid,
        }
    }

    pub fn sort_day(&self) -> i64 {
        self.due.unwrap_or(NO_DUE_SORT_DAY)
    }

    pub fn cadence_day(&self) -> i64 {
        self.due.unwrap_or(0)
    }

    pub fn finite_amount(&self) -> f64 {
        if self.amount.is_finite() {
            self.amount
        } else {
            0.0
        }
    }
}

/// Day zero carries no meaning anywhere, so it is stored as unset.
pub fn normalize_due(due: Option<i64>) -> Option<i64> {
    due.filter(|d| *d != 0)
}

/// A bill as held in storage, with the row id used for edits and removal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredBill {
    pub id: i64,
    #[serde(flatten)]
    pub bill: Bill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoverageStatus {
    Ok,
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PurchaseStatus {
    Blocked,
    Risky,
    Safe,
}

impl CoverageStatus {
    pub fn badge(self) -> &'static str {
        match self {
            CoverageStatus::Ok => "Success",
            CoverageStatus::Short => "Danger",
        }
    }
}

impl PurchaseStatus {
    pub fn badge(self) -> &'static str {
        match self {
            PurchaseStatus::Safe => "Success",
            PurchaseStatus::Risky => "Warning",
            PurchaseStatus::Blocked => "Danger",
        }
    }
}

impl fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CoverageStatus::Ok => "OK",
            CoverageStatus::Short => "SHORT",
        })
    }
}

impl fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PurchaseStatus::Blocked => "BLOCKED",
            PurchaseStatus::Risky => "RISKY",
            PurchaseStatus::Safe => "SAFE",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Status {
    pub total_unpaid: f64,
    pub left_after_bills: f64,
    pub left_after_purchase: f64,
    pub coverage: CoverageStatus,
    pub purchase: PurchaseStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cadence {
    pub early: f64,
    pub late: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub day: u32,
    /// Day of week, Sunday = 0.
    pub weekday: u32,
    pub bills: Vec<Bill>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGrouping {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    /// Empty cells before day 1 in a Sunday-first week row.
    pub leading_blanks: u32,
    pub days: Vec<DayBucket>,
}

impl MonthGrouping {
    pub fn bucket(&self, day: u32) -> Option<&DayBucket> {
        day.checked_sub(1).and_then(|i| self.days.get(i as usize))
    }
}

// The persisted shape writes an unset day as "" rather than null.
mod due_field {
    use super::*;
    use serde_json::Value;

    pub fn serialize<S: Serializer>(due: &Option<i64>, s: S) -> Result<S::Ok, S::Error> {
        match due {
            Some(d) => s.serialize_i64(*d),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        let v = Value::deserialize(d)?;
        Ok(crate::transfer::coerce_due(&v))
    }
}
