// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budget_terminal::calc::compute_calendar_grouping;
use budget_terminal::commands::{calendar, doctor};
use budget_terminal::models::Bill;
use budget_terminal::{cli, db};
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    db::seed_defaults_if_empty(&conn).unwrap();
    conn
}

#[test]
fn calendar_command_accepts_month_and_json() {
    let conn = setup();
    for args in [
        vec!["budget-terminal", "calendar", "--month", "2025-02"],
        vec!["budget-terminal", "calendar", "--month", "2025-02", "--json"],
    ] {
        let matches = cli::build_cli().get_matches_from(args);
        if let Some(("calendar", cal_m)) = matches.subcommand() {
            calendar::handle(&conn, cal_m).unwrap();
        } else {
            panic!("calendar command not parsed");
        }
    }
}

#[test]
fn calendar_command_rejects_bad_month() {
    let conn = setup();
    let matches =
        cli::build_cli().get_matches_from(["budget-terminal", "calendar", "--month", "2025-13"]);
    if let Some(("calendar", cal_m)) = matches.subcommand() {
        assert!(calendar::handle(&conn, cal_m).is_err());
    } else {
        panic!("calendar command not parsed");
    }
}

#[test]
fn seeded_bills_render_on_their_days() {
    let conn = setup();
    let bills = db::load_bill_values(&conn).unwrap();
    let g = compute_calendar_grouping(&bills, 2025, 2).unwrap();
    let rendered = calendar::render_grid(&g, "$").to_string();
    assert!(rendered.contains("Rent — $1,200.00"));
    assert!(rendered.contains("Streaming — $15.99"));
    assert!(rendered.contains("SUN"));
}

#[test]
fn doctor_flags_bills_that_skip_calendar_days() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    db::insert_bill(&conn, &Bill::new("Fine", Some(10), 20.0, false)).unwrap();
    db::insert_bill(&conn, &Bill::new("Undated", None, 20.0, false)).unwrap();
    db::insert_bill(&conn, &Bill::new("Late", Some(31), 20.0, false)).unwrap();
    db::insert_bill(&conn, &Bill::new("Bogus", Some(45), 0.0, false)).unwrap();

    let bills = db::load_bills(&conn).unwrap();
    let kinds: Vec<&str> = doctor::find_issues(&bills).iter().map(|i| i.1).collect();
    assert_eq!(
        kinds,
        [
            "no_due_day",
            "due_missing_some_months",
            "due_out_of_range",
            "non_positive_amount"
        ]
    );
    doctor::handle(&conn).unwrap();
}
