// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived figures for a bill list.
//!
//! Everything here is a pure projection of a borrowed snapshot: no function
//! keeps a reference past the call or mutates the list it is given.

use crate::models::{
    Bill, CADENCE_SPLIT_DAY, Cadence, CoverageStatus, DayBucket, MonthGrouping, PurchaseStatus,
    Status,
};
use anyhow::{Result, anyhow};
use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;
use tracing::debug;

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

pub fn total_unpaid(bills: &[Bill]) -> f64 {
    let total: f64 = bills
        .iter()
        .filter(|b| !b.paid)
        .map(Bill::finite_amount)
        .sum();
    finite_or_zero(total)
}

pub fn compute_status(bills: &[Bill], balance: f64, purchase: f64) -> Status {
    let total_unpaid = total_unpaid(bills);
    let left_after_bills = finite_or_zero(balance) - total_unpaid;
    let left_after_purchase = left_after_bills - finite_or_zero(purchase);

    let coverage = if left_after_bills >= 0.0 {
        CoverageStatus::Ok
    } else {
        CoverageStatus::Short
    };
    let purchase = if left_after_bills < 0.0 {
        PurchaseStatus::Blocked
    } else if left_after_purchase < 0.0 {
        PurchaseStatus::Risky
    } else {
        PurchaseStatus::Safe
    };
    debug!(
        bills = bills.len(),
        total_unpaid, left_after_bills, left_after_purchase, "status recomputed"
    );
    Status {
        total_unpaid,
        left_after_bills,
        left_after_purchase,
        coverage,
        purchase,
    }
}

/// Unpaid totals split at day 15. A bill with no due day counts as day 0
/// and lands in the early bucket.
pub fn compute_cadence(bills: &[Bill]) -> Cadence {
    let mut early = 0.0;
    let mut late = 0.0;
    for b in bills.iter().filter(|b| !b.paid) {
        if b.cadence_day() <= CADENCE_SPLIT_DAY {
            early += b.finite_amount();
        } else {
            late += b.finite_amount();
        }
    }
    Cadence { early, late }
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("Invalid month {}-{:02}", year, month))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| anyhow!("Month {}-{:02} is out of range", year, month))?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Unpaid first, then larger amounts first.
fn calendar_order(a: &Bill, b: &Bill) -> Ordering {
    a.paid.cmp(&b.paid).then_with(|| {
        b.finite_amount()
            .partial_cmp(&a.finite_amount())
            .unwrap_or(Ordering::Equal)
    })
}

/// Bills due on each day of `month`. Due days outside the month are left
/// out rather than moved to the last day.
pub fn compute_calendar_grouping(bills: &[Bill], year: i32, month: u32) -> Result<MonthGrouping> {
    let days_in_month = days_in_month(year, month)?;
    let leading_blanks = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("Invalid month {}-{:02}", year, month))?
        .weekday()
        .num_days_from_sunday();

    let mut days: Vec<DayBucket> = (1..=days_in_month)
        .map(|day| DayBucket {
            day,
            weekday: (leading_blanks + day - 1) % 7,
            bills: Vec::new(),
        })
        .collect();

    for b in bills {
        match b.due {
            Some(d) if d >= 1 && d <= i64::from(days_in_month) => {
                days[(d - 1) as usize].bills.push(b.clone());
            }
            _ => {}
        }
    }
    for bucket in &mut days {
        bucket.bills.sort_by(calendar_order);
    }

    Ok(MonthGrouping {
        year,
        month,
        days_in_month,
        leading_blanks,
        days,
    })
}

/// Stable ascending order by due day; unset days go last.
pub fn sort_for_display<T, F>(items: &mut [T], bill_of: F)
where
    F: Fn(&T) -> &Bill,
{
    items.sort_by_key(|item| bill_of(item).sort_day());
}
