// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::{compute_cadence, compute_status};
use crate::db;
use crate::models::{Cadence, Status};
use crate::money::{format_currency, format_money, parse_money};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickCheck {
    pub balance: f64,
    pub purchase: f64,
    #[serde(flatten)]
    pub status: Status,
    pub cadence: Cadence,
}

/// Figures behind the quick-check panel, from raw balance and purchase text.
pub fn quick_check(conn: &Connection, balance_raw: &str, purchase_raw: &str) -> Result<QuickCheck> {
    let bills = db::load_bill_values(conn)?;
    let balance = parse_money(balance_raw);
    let purchase = parse_money(purchase_raw);
    Ok(QuickCheck {
        balance,
        purchase,
        status: compute_status(&bills, balance, purchase),
        cadence: compute_cadence(&bills),
    })
}

pub fn cadence_line(c: &Cadence, symbol: &str) -> String {
    format!(
        "Bills grouped by pay period: By 1st: {}  By 15th: {}",
        format_currency(c.early, symbol),
        format_currency(c.late, symbol)
    )
}

pub fn handle_check(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let balance_raw = sub.get_one::<String>("balance").map(String::as_str).unwrap_or("");
    let purchase_raw = sub.get_one::<String>("purchase").map(String::as_str).unwrap_or("");
    let qc = quick_check(conn, balance_raw, purchase_raw)?;

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &qc)? {
        return Ok(());
    }
    let symbol = db::get_currency_symbol(conn)?;
    let s = &qc.status;
    let rows = vec![
        vec!["Total unpaid".into(), format_money(s.total_unpaid), String::new()],
        vec![
            "Left after bills".into(),
            format_money(s.left_after_bills),
            format!("{} ({})", s.coverage, s.coverage.badge()),
        ],
        vec![
            "Left after purchase".into(),
            format_money(s.left_after_purchase),
            format!("{} ({})", s.purchase, s.purchase.badge()),
        ],
    ];
    println!("{}", pretty_table(&["", "Amount", "Status"], rows));
    println!("{}", cadence_line(&qc.cadence, &symbol));
    Ok(())
}

pub fn handle_cadence(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let bills = db::load_bill_values(conn)?;
    let cadence = compute_cadence(&bills);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cadence)? {
        return Ok(());
    }
    let symbol = db::get_currency_symbol(conn)?;
    println!("{}", cadence_line(&cadence, &symbol));
    Ok(())
}
