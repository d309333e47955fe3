// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::sort_for_display;
use crate::db;
use crate::transfer::bills_to_json;
use anyhow::{Result, bail};
use rusqlite::Connection;
use tracing::info;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let fmt = m.get_one::<String>("format").unwrap().trim().to_lowercase();
    let out = m.get_one::<String>("out").unwrap().trim();

    let mut bills = db::load_bill_values(conn)?;
    sort_for_display(&mut bills, |b| b);

    match fmt.as_str() {
        "json" => {
            std::fs::write(out, bills_to_json(&bills)?)?;
        }
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["name", "due", "amount", "paid"])?;
            for b in &bills {
                wtr.write_record([
                    b.name.clone(),
                    b.due.map(|d| d.to_string()).unwrap_or_default(),
                    format!("{:.2}", b.finite_amount()),
                    b.paid.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        other => bail!("Unknown format: {} (use json|csv)", other),
    }
    info!(out, format = %fmt, count = bills.len(), "exported bills");
    println!("Exported {} bill(s) to {}", bills.len(), out);
    Ok(())
}
