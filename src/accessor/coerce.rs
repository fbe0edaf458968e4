// envvar-rs: Typed environment variable access
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Raw string coercion rules.
//!
//! ```text
//! boolean  "true" | "false"                  exact match
//! number   ws* literal ws*                   ws: Zs, TAB VT FF LF CR LS PS, BOM
//! one_of   member of allowed set             exact, case-sensitive
//!
//! literal  ""                                -> 0
//!          [+-]? Infinity
//!          0x.. | 0o.. | 0b..                unsigned, any length
//!          [+-]? (d+ (. d*)? | . d+) ([eE] [+-]? d+)?
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValueReason;

static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("valid regex")
});

/// Accepts exactly `"true"` or `"false"`.
pub(crate) fn boolean(raw: &str) -> Result<bool, ValueReason> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ValueReason::NotBoolean),
    }
}

/// Parses a numeric literal, rejecting anything that would be not-a-number.
pub(crate) fn number(raw: &str) -> Result<f64, ValueReason> {
    let text = raw.trim_matches(is_space);
    if text.is_empty() {
        return Ok(0.0);
    }

    match text {
        "Infinity" | "+Infinity" => return Ok(f64::INFINITY),
        "-Infinity" => return Ok(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = radix_literal(text) {
        return Ok(value);
    }

    if !DECIMAL_RE.is_match(text) {
        return Err(ValueReason::NotNumber);
    }
    text.parse::<f64>().map_err(|_| ValueReason::NotNumber)
}

/// Accepts `raw` if it is one of `allowed`.
pub(crate) fn one_of<S: AsRef<str>>(raw: String, allowed: &[S]) -> Result<String, ValueReason> {
    if allowed.iter().any(|candidate| candidate.as_ref() == raw) {
        Ok(raw)
    } else {
        Err(ValueReason::NotOneOf(
            allowed.iter().map(|s| s.as_ref().to_owned()).collect(),
        ))
    }
}

/// Whitespace and line terminators as recognised around numeric literals:
/// space separators (Zs) plus TAB, VT, FF, LF, CR, LS, PS and BOM.
/// Unlike [`char::is_whitespace`], NEL (U+0085) is not included.
const fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// `0x`/`0o`/`0b` prefixed integers. Returns `None` when `text` has no such prefix
/// or its digits do not belong to the radix.
fn radix_literal(text: &str) -> Option<f64> {
    let (prefix, digits) = text.split_at_checked(2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc.mul_add(f64::from(radix), f64::from(d)))
    })
}
