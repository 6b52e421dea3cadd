//! `timeParse` / `timeFormat`: strftime-style layouts, always in UTC.

use core::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::evaluator::RuntimeError;
use crate::values::ValueKind;

/// Unix seconds for `text` read with `layout`.
///
/// A layout with an offset (`%z`) is honoured; otherwise the time is taken
/// as UTC. Date-only layouts mean midnight.
pub(super) fn parse(layout: &str, text: &str) -> Result<i64, RuntimeError> {
    check_layout(layout)?;

    if let Ok(datetime) = DateTime::parse_from_str(text, layout) {
        return Ok(datetime.timestamp());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, layout) {
        return Ok(datetime.and_utc().timestamp());
    }
    match NaiveDate::parse_from_str(text, layout) {
        Ok(date) => Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp()),
        Err(_) => Err(RuntimeError::InvalidLiteral {
            target: ValueKind::Int,
            text: text.to_string(),
        }),
    }
}

/// Render Unix `seconds` with `layout`.
pub(super) fn format(layout: &str, seconds: i64) -> Result<String, RuntimeError> {
    check_layout(layout)?;

    let datetime = DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
        RuntimeError::internal(format!("timestamp {} is out of range", seconds))
    })?;
    let mut out = String::new();
    write!(out, "{}", datetime.format(layout))
        .map_err(|_| RuntimeError::pattern(format!("cannot format time with {:?}", layout)))?;
    Ok(out)
}

fn check_layout(layout: &str) -> Result<(), RuntimeError> {
    if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
        return Err(RuntimeError::pattern(format!(
            "invalid time layout {:?}",
            layout
        )));
    }
    Ok(())
}
