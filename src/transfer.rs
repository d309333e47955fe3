// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Bill list exchange format.
//!
//! Exports are a JSON array of `{name, due, amount, paid}` records. Imports
//! accept the same shape but repair each record field by field, so a file
//! written by hand or by an older build still loads. Only a payload that is
//! not an array at all is refused.

use crate::models::{Bill, normalize_due};
use crate::money::coerce_amount;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Import failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Import failed: expected a JSON array of bills, found {0}")]
    NotAnArray(&'static str),
}

pub fn bills_from_json(text: &str) -> Result<Vec<Bill>, ImportError> {
    let data: Value = serde_json::from_str(text)?;
    match data {
        Value::Array(items) => Ok(items.iter().enumerate().map(|(i, v)| repair(i, v)).collect()),
        other => Err(ImportError::NotAnArray(kind_of(&other))),
    }
}

pub fn bills_to_json(bills: &[Bill]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(bills)
}

fn repair(index: usize, item: &Value) -> Bill {
    let empty = Map::new();
    let obj = match item {
        Value::Object(o) => o,
        other => {
            warn!(index, kind = kind_of(other), "import record is not an object, using a blank bill");
            &empty
        }
    };
    Bill {
        name: coerce_name(field(obj, "name")),
        due: coerce_due(field(obj, "due")),
        amount: coerce_amount(field(obj, "amount")),
        paid: truthy(field(obj, "paid")),
    }
}

static NULL: Value = Value::Null;

fn field<'a>(obj: &'a Map<String, Value>, key: &str) -> &'a Value {
    obj.get(key).unwrap_or(&NULL)
}

fn coerce_name(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Read a due day the way a lenient integer parse would: numbers are
/// truncated, strings contribute their leading integer, anything else is
/// unset. Zero is unset too.
pub fn coerce_due(v: &Value) -> Option<i64> {
    let day = match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => leading_int(s),
        _ => None,
    };
    normalize_due(day)
}

/// Leading signed integer of `s`, ignoring leading whitespace.
pub fn leading_int(s: &str) -> Option<i64> {
    let t = s.trim_start();
    let (sign, rest) = match t.as_bytes().first() {
        Some(b'-') => (-1, &t[1..]),
        Some(b'+') => (1, &t[1..]),
        _ => (1, t),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|n| sign * n)
}

fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
