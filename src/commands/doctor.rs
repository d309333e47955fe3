// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::models::StoredBill;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

/// Bills that are summed but never show up on a calendar day, or that only
/// show up in some months.
pub fn find_issues(bills: &[StoredBill]) -> Vec<(i64, &'static str, String)> {
    let mut out = Vec::new();
    for s in bills {
        let b = &s.bill;
        match b.due {
            None => out.push((s.id, "no_due_day", "counted in the By 1st bucket".to_string())),
            Some(d) if !(1..=31).contains(&d) => {
                out.push((s.id, "due_out_of_range", format!("day {} never appears", d)))
            }
            Some(d) if d > 28 => out.push((
                s.id,
                "due_missing_some_months",
                format!("day {} is skipped in shorter months", d),
            )),
            _ => {}
        }
        if b.finite_amount() <= 0.0 {
            out.push((s.id, "non_positive_amount", format!("{:.2}", b.finite_amount())));
        }
    }
    out
}

pub fn handle(conn: &Connection) -> Result<()> {
    let bills = db::load_bills(conn)?;
    let issues = find_issues(&bills);
    if issues.is_empty() {
        println!("doctor: no issues found");
        return Ok(());
    }
    let rows = issues
        .into_iter()
        .map(|(id, issue, detail)| vec![id.to_string(), issue.to_string(), detail])
        .collect();
    println!("{}", pretty_table(&["Bill", "Issue", "Detail"], rows));
    Ok(())
}
