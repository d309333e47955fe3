// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

static NON_MONEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.\-]").unwrap());
static FLOAT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").unwrap());

/// Parse user-typed money text into a finite number.
///
/// Everything except digits, `.` and `-` is dropped first, so `"$1,234.56"`
/// and `"1,234.56abc"` both read as `1234.56`. The longest leading float is
/// taken from what remains; anything unparsable is `0.0`.
pub fn parse_money(raw: &str) -> f64 {
    let cleaned = NON_MONEY.replace_all(raw, "");
    let Some(m) = FLOAT_PREFIX.find(&cleaned) else {
        return 0.0;
    };
    let literal = m.as_str().trim_end_matches('.');
    match literal.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Numeric cast for values read back from an import payload.
///
/// Unlike [`parse_money`] the whole (trimmed) string must be a number, so
/// `"1,234"` is `0.0` here.
pub fn coerce_amount(value: &Value) -> f64 {
    let v = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let t = s.trim();
            if t.is_empty() {
                0.0
            } else {
                t.parse::<f64>().unwrap_or(0.0)
            }
        }
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    if v.is_finite() { v } else { 0.0 }
}

/// Two-decimal display form with thousands separators: `1234.5` -> `1,234.50`.
pub fn format_money(v: f64) -> String {
    let d = Decimal::from_f64(v)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = d.is_sign_negative() && !d.is_zero();
    let fixed = format!("{:.2}", d.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{}.{}", grouped, frac_part)
    } else {
        format!("{}.{}", grouped, frac_part)
    }
}

pub fn format_currency(v: f64, symbol: &str) -> String {
    let body = format_money(v);
    match body.strip_prefix('-') {
        Some(abs) => format!("-{}{}", symbol, abs),
        None => format!("{}{}", symbol, body),
    }
}
