// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::transfer::bills_from_json;
use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::info;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").unwrap().trim();
    let n = import_file(conn, path)?;
    println!("Imported {} bill(s) from {}", n, path);
    Ok(())
}

/// Replace the stored list with the bills in `path`. A payload that is not
/// a JSON array leaves the stored list untouched.
pub fn import_file(conn: &mut Connection, path: &str) -> Result<usize> {
    let text = std::fs::read_to_string(path).with_context(|| format!("Open {}", path))?;
    let bills = bills_from_json(&text).with_context(|| format!("Read bills from {}", path))?;
    db::replace_all(conn, &bills)?;
    info!(path, count = bills.len(), "imported bills");
    Ok(bills.len())
}
