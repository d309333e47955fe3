// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::compute_calendar_grouping;
use crate::db;
use crate::models::{DayBucket, MonthGrouping};
use crate::money::format_currency;
use crate::utils::{current_month, maybe_print_json, parse_month, shorten};
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rusqlite::Connection;

const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
const ITEM_WIDTH: usize = 24;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let (year, month) = match sub.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => current_month(),
    };
    let bills = db::load_bill_values(conn)?;
    let grouping = compute_calendar_grouping(&bills, year, month)?;

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &grouping)? {
        return Ok(());
    }
    let symbol = db::get_currency_symbol(conn)?;
    println!("{}", month_title(&grouping)?);
    println!("{}", render_grid(&grouping, &symbol));
    Ok(())
}

pub fn month_title(g: &MonthGrouping) -> Result<String> {
    let first = NaiveDate::from_ymd_opt(g.year, g.month, 1)
        .ok_or_else(|| anyhow!("Invalid month {}-{:02}", g.year, g.month))?;
    Ok(first.format("%B %Y").to_string())
}

fn cell_text(bucket: &DayBucket, symbol: &str) -> String {
    let mut lines = vec![if bucket.weekday == 0 {
        format!("*{}", bucket.day)
    } else {
        bucket.day.to_string()
    }];
    for b in &bucket.bills {
        let name = if b.name.is_empty() { "Bill" } else { b.name.as_str() };
        let mark = if b.paid { "✓" } else { "•" };
        let item = format!("{} — {}", name, format_currency(b.finite_amount(), symbol));
        lines.push(format!("{} {}", mark, shorten(&item, ITEM_WIDTH)));
    }
    lines.join("\n")
}

/// Sunday-first seven column grid, blank cells before day 1 and after the
/// last day.
pub fn render_grid(g: &MonthGrouping, symbol: &str) -> Table {
    let mut cells: Vec<String> = vec![String::new(); g.leading_blanks as usize];
    cells.extend(g.days.iter().map(|d| cell_text(d, symbol)));
    while cells.len() % 7 != 0 {
        cells.push(String::new());
    }

    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(WEEKDAYS.iter().map(|h| Cell::new(*h)));
    for week in cells.chunks(7) {
        t.add_row(week.iter().map(Cell::new));
    }
    t
}
