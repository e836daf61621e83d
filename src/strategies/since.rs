use chrono::{Duration, Months, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::error::strategy_errors::StrategyConstructionError;

static RELATIVE_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(\d+)\s+(second|minute|hour|day|week|month|year)s?\s+ago$").unwrap()
});

/// resolves a human readable instant like `7 days ago` against `now`.
///
/// Understands `now`, `today`, `yesterday`, and `<n> <unit>(s) ago` for seconds through years, ignoring case.
/// Anything a day or longer lands on midnight, and months and years step by calendar month
pub fn parse_human_datetime(
    expr: &str,
    now: NaiveDateTime,
) -> Result<NaiveDateTime, StrategyConstructionError> {
    let trimmed = expr.trim();
    let invalid = || StrategyConstructionError::InvalidSince(expr.to_string());
    match trimmed.to_ascii_lowercase().as_str() {
        "now" => return Ok(now),
        "today" => return Ok(midnight(now)),
        "yesterday" => return days_ago(now, 1).ok_or_else(invalid),
        _ => {}
    }
    let captures = RELATIVE_EXPR.captures(trimmed).ok_or_else(invalid)?;
    let amount: u32 = captures[1].parse().map_err(|_| invalid())?;
    let resolved = match captures[2].to_ascii_lowercase().as_str() {
        "second" => now.checked_sub_signed(Duration::seconds(i64::from(amount))),
        "minute" => now.checked_sub_signed(Duration::minutes(i64::from(amount))),
        "hour" => now.checked_sub_signed(Duration::hours(i64::from(amount))),
        "day" => days_ago(now, i64::from(amount)),
        "week" => days_ago(now, i64::from(amount) * 7),
        "month" => months_ago(now, amount),
        "year" => amount.checked_mul(12).and_then(|months| months_ago(now, months)),
        _ => None,
    };
    resolved.ok_or_else(invalid)
}

fn midnight(instant: NaiveDateTime) -> NaiveDateTime {
    instant.date().and_time(NaiveTime::MIN)
}

fn days_ago(now: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    now.checked_sub_signed(Duration::days(days)).map(midnight)
}

fn months_ago(now: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    now.checked_sub_months(Months::new(months)).map(midnight)
}
