// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budget_terminal::models::Bill;
use budget_terminal::{cli, commands::exporter, commands::importer, db};
use rusqlite::Connection;
use serde_json::json;
use tempfile::tempdir;

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    db::insert_bill(&conn, &Bill::new("Internet", Some(12), 70.0, true)).unwrap();
    db::insert_bill(&conn, &Bill::new("Misc", None, 5.0, false)).unwrap();
    db::insert_bill(&conn, &Bill::new("Rent", Some(1), 1200.0, false)).unwrap();
    conn
}

fn run_export(conn: &Connection, format: &str, out: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from([
        "budget-terminal",
        "export",
        "--format",
        format,
        "--out",
        out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_json_sorted_by_due_day() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("bills.json");
    run_export(&conn, "json", &out_path.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {"name": "Rent", "due": 1, "amount": 1200.0, "paid": false},
            {"name": "Internet", "due": 12, "amount": 70.0, "paid": true},
            {"name": "Misc", "due": "", "amount": 5.0, "paid": false}
        ])
    );
}

#[test]
fn exported_json_imports_back() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("bills.json");
    run_export(&conn, "json", &out_path.to_string_lossy()).unwrap();

    let mut other = Connection::open_in_memory().unwrap();
    db::init_schema(&other).unwrap();
    importer::import_file(&mut other, &out_path.to_string_lossy()).unwrap();
    let bills = db::load_bill_values(&other).unwrap();
    assert_eq!(bills.len(), 3);
    assert_eq!(bills[2], Bill::new("Misc", None, 5.0, false));
}

#[test]
fn export_csv_writes_header_and_rows() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("bills.csv");
    run_export(&conn, "CSV", &out_path.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        [
            "name,due,amount,paid",
            "Rent,1,1200.00,false",
            "Internet,12,70.00,true",
            "Misc,,5.00,false"
        ]
    );
}

#[test]
fn export_rejects_unknown_format() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("bills.xml");
    assert!(run_export(&conn, "xml", &out_path.to_string_lossy()).is_err());
    assert!(!out_path.exists());
}
