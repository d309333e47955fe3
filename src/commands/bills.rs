// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::sort_for_display;
use crate::db::{self, BillPatch};
use crate::models::Bill;
use crate::money::{format_money, parse_money};
use crate::utils::{maybe_print_json, parse_bool, parse_due_input, parse_id, pretty_table};
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => {
            let id = parse_id(sub.get_one::<String>("id").unwrap())?;
            if !db::remove_bill(conn, id)? {
                bail!("Bill {} not found", id);
            }
            println!("Removed bill {}", id);
        }
        Some(("reset-paid", _)) => {
            let n = db::reset_paid(conn)?;
            println!("Marked {} bill(s) unpaid", n);
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").map(|s| s.trim()).unwrap_or("");
    let due = sub.get_one::<String>("due").and_then(|s| parse_due_input(s));
    let amount = sub.get_one::<String>("amount").map(|s| parse_money(s)).unwrap_or(0.0);
    let bill = Bill::new(name, due, amount, sub.get_flag("paid"));
    let id = db::insert_bill(conn, &bill)?;
    println!("Added bill {} '{}'", id, bill.name);
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = parse_id(sub.get_one::<String>("id").unwrap())?;
    let patch = BillPatch {
        name: sub.get_one::<String>("name").cloned(),
        due: sub.get_one::<String>("due").map(|s| parse_due_input(s)),
        amount: sub.get_one::<String>("amount").map(|s| parse_money(s)),
        paid: sub.get_one::<String>("paid").map(|s| parse_bool(s)).transpose()?,
    };
    if patch.is_empty() {
        bail!("Nothing to change: pass --name, --due, --amount or --paid");
    }
    match db::update_bill(conn, id, &patch)? {
        Some(b) => println!(
            "Updated bill {}: {} due {} amount {}{}",
            id,
            b.name,
            b.due.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
            format_money(b.amount),
            if b.paid { " (paid)" } else { "" }
        ),
        None => bail!("Bill {} not found", id),
    }
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let mut bills = db::load_bills(conn)?;
    sort_for_display(&mut bills, |s| &s.bill);

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &bills)? {
        return Ok(());
    }
    let data = bills
        .into_iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.bill.name,
                s.bill.due.map(|d| d.to_string()).unwrap_or_default(),
                format_money(s.bill.amount),
                if s.bill.paid { "yes".into() } else { "no".into() },
            ]
        })
        .collect();
    println!("{}", pretty_table(&["ID", "Name", "Due", "Amount", "Paid"], data));
    Ok(())
}
