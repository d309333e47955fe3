// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budget_terminal::calc::{compute_cadence, compute_calendar_grouping, compute_status};
use budget_terminal::commands::check::{cadence_line, quick_check};
use budget_terminal::db;
use budget_terminal::models::{Bill, CoverageStatus, PurchaseStatus};
use rusqlite::Connection;

fn setup(bills: &[Bill]) -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    for b in bills {
        db::insert_bill(&conn, b).unwrap();
    }
    conn
}

fn mixed_bills() -> Vec<Bill> {
    vec![
        Bill::new("Rent", Some(1), 1200.0, false),
        Bill::new("Phone", Some(5), 65.25, true),
        Bill::new("Car", Some(18), 110.0, false),
        Bill::new("Water", Some(31), 40.5, false),
        Bill::new("Gym", Some(15), 30.0, false),
        Bill::new("Insurance", Some(28), 90.0, true),
    ]
}

#[test]
fn quick_check_reads_raw_text_inputs() {
    let conn = setup(&[
        Bill::new("Rent", Some(1), 100.0, false),
        Bill::new("Gym", Some(20), 50.0, true),
    ]);
    let qc = quick_check(&conn, "$150.00", "60").unwrap();
    assert_eq!(qc.balance, 150.0);
    assert_eq!(qc.status.total_unpaid, 100.0);
    assert_eq!(qc.status.left_after_bills, 50.0);
    assert_eq!(qc.status.left_after_purchase, -10.0);
    assert_eq!(qc.status.coverage, CoverageStatus::Ok);
    assert_eq!(qc.status.purchase, PurchaseStatus::Risky);
    assert_eq!(qc.cadence.early, 100.0);
    assert_eq!(qc.cadence.late, 0.0);
}

#[test]
fn quick_check_treats_garbage_balance_as_zero() {
    let conn = setup(&[Bill::new("Rent", Some(1), 10.0, false)]);
    let qc = quick_check(&conn, "abc", "").unwrap();
    assert_eq!(qc.balance, 0.0);
    assert_eq!(qc.status.left_after_bills, -10.0);
    assert_eq!(qc.status.purchase, PurchaseStatus::Blocked);
}

#[test]
fn quick_check_json_uses_upper_case_levels() {
    let conn = setup(&[]);
    let qc = quick_check(&conn, "10", "0").unwrap();
    let v = serde_json::to_value(&qc).unwrap();
    assert_eq!(v["coverage"], "OK");
    assert_eq!(v["purchase"], "SAFE");
    assert_eq!(v["total_unpaid"], 0.0);
}

#[test]
fn total_unpaid_ignores_order() {
    let bills = mixed_bills();
    let mut reversed = bills.clone();
    reversed.reverse();
    let mut rotated = bills.clone();
    rotated.rotate_left(2);
    let expected = compute_status(&bills, 0.0, 0.0).total_unpaid;
    assert_eq!(expected, 1380.5);
    assert_eq!(compute_status(&reversed, 0.0, 0.0).total_unpaid, expected);
    assert_eq!(compute_status(&rotated, 0.0, 0.0).total_unpaid, expected);
}

#[test]
fn cadence_partitions_unpaid_total() {
    let bills = mixed_bills();
    let c = compute_cadence(&bills);
    let total = compute_status(&bills, 0.0, 0.0).total_unpaid;
    assert_eq!(c.early, 1230.0);
    assert_eq!(c.late, 150.5);
    assert_eq!(c.early + c.late, total);
}

#[test]
fn status_arithmetic_and_levels_hold_across_inputs() {
    let bills = mixed_bills();
    for balance in [-100.0, 0.0, 1380.5, 1400.0, 5000.0] {
        for purchase in [0.0, 19.5, 20.0, 250.0] {
            let s = compute_status(&bills, balance, purchase);
            assert_eq!(s.left_after_bills, balance - s.total_unpaid);
            assert_eq!(s.left_after_purchase, s.left_after_bills - purchase);
            assert_eq!(s.coverage == CoverageStatus::Ok, s.left_after_bills >= 0.0);
            assert_eq!(s.purchase == PurchaseStatus::Blocked, s.left_after_bills < 0.0);
            if s.left_after_bills >= 0.0 {
                assert_eq!(s.purchase == PurchaseStatus::Risky, s.left_after_purchase < 0.0);
            }
        }
    }
}

#[test]
fn calendar_places_each_in_range_bill_once() {
    let bills = mixed_bills();
    for (year, month, expected) in [(2025, 2, 5), (2024, 2, 5), (2025, 4, 5), (2025, 1, 6)] {
        let g = compute_calendar_grouping(&bills, year, month).unwrap();
        let placed: Vec<&Bill> = g.days.iter().flat_map(|d| d.bills.iter()).collect();
        assert_eq!(placed.len(), expected, "{}-{:02}", year, month);
        for d in &g.days {
            for b in &d.bills {
                assert_eq!(b.due, Some(i64::from(d.day)));
            }
            let first_paid = d.bills.iter().position(|b| b.paid).unwrap_or(d.bills.len());
            assert!(d.bills[first_paid..].iter().all(|b| b.paid));
        }
    }
}

#[test]
fn cadence_line_uses_currency_symbol() {
    let c = compute_cadence(&[Bill::new("a", Some(1), 1234.5, false)]);
    assert_eq!(
        cadence_line(&c, "$"),
        "Bills grouped by pay period: By 1st: $1,234.50  By 15th: $0.00"
    );
}
