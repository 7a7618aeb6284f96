//! Display formatters for raw API scalars.
//!
//! Every formatter is total: any input, including missing or malformed
//! values, produces a display string. Malformed values either pass through
//! unchanged or collapse to the `"-"` sentinel, never an error.

use super::types::{Money, NumLike};
use chrono::NaiveDate;

/// Missing-data sentinel used across the whole record.
pub const MISSING: &str = "-";

/// Group an integer with a single space as the thousands separator,
/// independent of locale.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a monetary value as `"<grouped amount> <currency>"`.
///
/// Structured amounts render only when positive. Legacy strings are
/// re-grouped when the leading token is numeric; otherwise the original
/// text comes back unchanged rather than `"-"` (deliberate leniency).
pub fn format_money(value: Option<&Money>) -> String {
    let Some(value) = value else {
        return MISSING.to_string();
    };

    match value {
        Money::Detailed { value, currency } => match value {
            Some(amount) if *amount > 0 => {
                let currency = currency.as_deref().unwrap_or("USD");
                format!("{} {}", group_thousands(*amount), currency)
            }
            _ => MISSING.to_string(),
        },
        Money::Amount(0) => MISSING.to_string(),
        Money::Amount(amount) => {
            reformat_legacy(&amount.to_string()).unwrap_or_else(|| amount.to_string())
        }
        Money::Text(text) => {
            if text.is_empty() || text == MISSING {
                return MISSING.to_string();
            }
            reformat_legacy(text).unwrap_or_else(|| text.clone())
        }
    }
}

/// Parse the leading numeric token of a legacy `"<number> <currency>"`
/// string (spaces and commas stripped from the number) and regroup it.
/// Returns `None` when the string does not start with a number.
fn reformat_legacy(text: &str) -> Option<String> {
    let mut parts = text.split_whitespace().peekable();
    let mut digits = String::new();

    while let Some(part) = parts.peek() {
        let cleaned: String = part.chars().filter(|c| *c != ',').collect();
        if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
            break;
        }
        digits.push_str(&cleaned);
        parts.next();
    }

    if digits.is_empty() {
        return None;
    }

    let amount: i64 = digits.parse().ok()?;
    let currency = parts.next().unwrap_or("USD");

    Some(format!("{} {}", group_thousands(amount), currency))
}

/// Reformat the first 10 characters of an ISO-8601-like date string
/// (`YYYY-MM-DD`) as `DD.MM.YYYY`. Parse failures return the input
/// unchanged; empty or `"-"` input returns `"-"`.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() || raw == MISSING {
        return MISSING.to_string();
    }

    // Falls back to the whole string when it is shorter than 10 bytes or
    // the cut lands inside a multi-byte character; the parse then fails
    // and the original value comes back.
    let head = raw.get(..10).unwrap_or(raw);

    match NaiveDate::parse_from_str(head, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Duration in minutes as a bare integer string; `"-"` for missing,
/// non-positive, or unparsable input.
pub fn format_duration(value: Option<&NumLike>) -> String {
    let Some(value) = value else {
        return MISSING.to_string();
    };

    match value.as_int() {
        Some(minutes) if minutes > 0 => minutes.to_string(),
        _ => MISSING.to_string(),
    }
}

/// Vote count with thousands grouping; same coercion rule as duration.
pub fn format_vote_count(value: Option<&NumLike>) -> String {
    let Some(value) = value else {
        return MISSING.to_string();
    };

    match value.as_int() {
        Some(count) if count > 0 => group_thousands(count),
        _ => MISSING.to_string(),
    }
}
