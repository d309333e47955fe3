// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Bill, StoredBill, normalize_due};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "BudgetTerminal", "budget-terminal"));

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("budget-terminal.sqlite"))
}

/// Resolve the database location: an explicit path wins over the data dir.
pub fn resolve_path(explicit: Option<&str>) -> Result<PathBuf> {
    match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(p) => Ok(PathBuf::from(p)),
        None => db_path(),
    }
}

pub fn open_or_init(path: &Path) -> Result<Connection> {
    let conn =
        Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    debug!(path = %path.display(), "database ready");
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    -- due is NULL when the bill has no due day
    CREATE TABLE IF NOT EXISTS bills(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL DEFAULT '',
        due INTEGER,
        amount REAL NOT NULL DEFAULT 0,
        paid INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    "#,
    )
    .context("Create schema")?;
    Ok(())
}

fn row_to_stored(r: &rusqlite::Row<'_>) -> rusqlite::Result<StoredBill> {
    let amount: Option<f64> = r.get(3)?;
    Ok(StoredBill {
        id: r.get(0)?,
        bill: Bill {
            name: r.get(1)?,
            due: normalize_due(r.get(2)?),
            amount: amount.unwrap_or(0.0),
            paid: r.get::<_, i64>(4)? != 0,
        },
    })
}

/// Bills in insertion order.
pub fn load_bills(conn: &Connection) -> Result<Vec<StoredBill>> {
    let mut stmt = conn.prepare("SELECT id, name, due, amount, paid FROM bills ORDER BY id")?;
    let rows = stmt.query_map([], row_to_stored)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row.context("Read bill row")?);
    }
    Ok(out)
}

pub fn load_bill_values(conn: &Connection) -> Result<Vec<Bill>> {
    Ok(load_bills(conn)?.into_iter().map(|s| s.bill).collect())
}

pub fn find_bill(conn: &Connection, id: i64) -> Result<Option<StoredBill>> {
    let found = conn
        .query_row(
            "SELECT id, name, due, amount, paid FROM bills WHERE id=?1",
            params![id],
            row_to_stored,
        )
        .optional()?;
    Ok(found)
}

fn finite(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

pub fn insert_bill(conn: &Connection, bill: &Bill) -> Result<i64> {
    conn.execute(
        "INSERT INTO bills(name, due, amount, paid) VALUES (?1,?2,?3,?4)",
        params![
            bill.name,
            normalize_due(bill.due),
            finite(bill.amount),
            bill.paid
        ],
    )
    .with_context(|| format!("Insert bill '{}'", bill.name))?;
    let id = conn.last_insert_rowid();
    debug!(id, "bill inserted");
    Ok(id)
}

/// Partial edit of one bill. `due: Some(None)` clears the due day.
#[derive(Debug, Default, Clone)]
pub struct BillPatch {
    pub name: Option<String>,
    pub due: Option<Option<i64>>,
    pub amount: Option<f64>,
    pub paid: Option<bool>,
}

impl BillPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.due.is_none() && self.amount.is_none() && self.paid.is_none()
    }

    pub fn apply(&self, bill: &mut Bill) {
        if let Some(name) = &self.name {
            bill.name = name.trim().to_string();
        }
        if let Some(due) = self.due {
            bill.due = normalize_due(due);
        }
        if let Some(amount) = self.amount {
            bill.amount = finite(amount);
        }
        if let Some(paid) = self.paid {
            bill.paid = paid;
        }
    }
}

/// Returns the updated bill, or `None` when no bill has that id.
pub fn update_bill(conn: &Connection, id: i64, patch: &BillPatch) -> Result<Option<Bill>> {
    let Some(mut stored) = find_bill(conn, id)? else {
        return Ok(None);
    };
    patch.apply(&mut stored.bill);
    let b = &stored.bill;
    conn.execute(
        "UPDATE bills SET name=?1, due=?2, amount=?3, paid=?4 WHERE id=?5",
        params![b.name, b.due, b.amount, b.paid, id],
    )
    .with_context(|| format!("Update bill {}", id))?;
    debug!(id, "bill updated");
    Ok(Some(stored.bill))
}

pub fn remove_bill(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn.execute("DELETE FROM bills WHERE id=?1", params![id])?;
    Ok(n > 0)
}

/// Mark every bill unpaid for a new cycle. Returns the number changed.
pub fn reset_paid(conn: &Connection) -> Result<usize> {
    let n = conn.execute("UPDATE bills SET paid=0 WHERE paid != 0", [])?;
    Ok(n)
}

/// Swap the whole list for `bills` in one transaction.
pub fn replace_all(conn: &mut Connection, bills: &[Bill]) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM bills", [])?;
    for b in bills {
        insert_bill(&tx, b)?;
    }
    tx.commit().context("Commit bill import")?;
    info!(count = bills.len(), "bill list replaced");
    Ok(())
}

pub fn default_bills() -> Vec<Bill> {
    vec![
        Bill::new("Rent", Some(1), 1200.0, false),
        Bill::new("Phone", Some(5), 65.0, false),
        Bill::new("Internet", Some(12), 70.0, false),
        Bill::new("Car Insurance", Some(18), 110.0, false),
        Bill::new("Electric", Some(22), 95.0, false),
        Bill::new("Streaming", Some(28), 15.99, false),
    ]
}

/// First-run sample list. Returns true when rows were added.
pub fn seed_defaults_if_empty(conn: &Connection) -> Result<bool> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM bills", [], |r| r.get(0))?;
    if count > 0 {
        return Ok(false);
    }
    for b in default_bills() {
        insert_bill(conn, &b)?;
    }
    info!("seeded sample bills");
    Ok(true)
}

pub fn get_currency_symbol(conn: &Connection) -> Result<String> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key='currency_symbol'",
            [],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v.unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()))
}

pub fn set_currency_symbol(conn: &Connection, symbol: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('currency_symbol', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![symbol],
    )?;
    Ok(())
}
