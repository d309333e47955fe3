// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{get_currency_symbol, set_currency_symbol};
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("symbol", sub)) => match sub.get_one::<String>("value").map(|s| s.trim()) {
            Some("") => bail!("Currency symbol cannot be empty"),
            Some(v) => {
                set_currency_symbol(conn, v)?;
                println!("Currency symbol set to {}", v);
            }
            None => println!("{}", get_currency_symbol(conn)?),
        },
        _ => {}
    }
    Ok(())
}
