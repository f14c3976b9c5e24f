use super::require_arity;
use crate::error::Cause;
use crate::value::Value;
use jiff::{civil, Timestamp};

pub fn eval(name: &str, args: Vec<Value>) -> Result<Value, Cause> {
    match name {
        "now" => now(args),
        "datetime" => datetime(args),
        _ => unreachable!("date::eval called with non-date name {name}"),
    }
}

/// `now()` — current Unix timestamp in whole seconds, as `Int`.
fn now(args: Vec<Value>) -> Result<Value, Cause> {
    require_arity("now", &args, 0)?;
    Ok(Value::Int(Timestamp::now().as_second()))
}

/// `datetime(s)` — parses a string to a Unix timestamp, trying in order:
/// 1. RFC-3339 with an explicit offset ("2024-01-15T11:30:45Z")
/// 2. a local (offset-less) datetime, interpreted as UTC
/// 3. a bare date, interpreted as UTC midnight
///
/// An input that matches none of these is a `DomainError` (spec §9 open
/// question: datetime parsing follows this fallback order rather than
/// failing on anything but strict RFC-3339).
fn datetime(args: Vec<Value>) -> Result<Value, Cause> {
    require_arity("datetime", &args, 1)?;
    let s = match &args[0] {
        Value::Str(s) => s,
        other => {
            return Err(Cause::type_err(format!(
                "datetime() requires a string argument, got {}",
                other.type_name()
            )))
        }
    };

    if let Ok(ts) = s.parse::<Timestamp>() {
        return Ok(Value::Int(ts.as_second()));
    }
    if let Ok(dt) = s.parse::<civil::DateTime>() {
        if let Ok(zoned) = dt.to_zoned(jiff::tz::TimeZone::UTC) {
            return Ok(Value::Int(zoned.timestamp().as_second()));
        }
    }
    if let Ok(date) = s.parse::<civil::Date>() {
        if let Ok(zoned) = date.to_zoned(jiff::tz::TimeZone::UTC) {
            return Ok(Value::Int(zoned.timestamp().as_second()));
        }
    }

    Err(Cause::domain(format!("datetime() could not parse '{s}'")))
}
