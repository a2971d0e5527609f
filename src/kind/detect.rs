//! Kind detection for scalar values

use std::net::IpAddr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use super::registry::Kind;
use super::value::ScalarValue;

/// Canonical date layout
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical date-time layout
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Canonical time layout
pub const TIME_FORMAT: &str = "%H:%M:%S";

// Fixed-width shapes except the hour, which may be a single digit;
// chrono alone would accept single-digit fields everywhere
static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

static DATETIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{1,2}:\d{2}:\d{2}(\.\d+)?$").unwrap());

static TIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}:\d{2}:\d{2}(\.\d+)?$").unwrap());

/// Detect the kind of a scalar value
///
/// Native booleans, integers and floats are classified by type and
/// magnitude. Text is reported as [`Kind::String`] unless `sniff` is set,
/// in which case its content is run through [`sniff_kind`].
///
/// ```rust
/// use schema_toolkit_sdk::kind::{Kind, ScalarValue, detect_kind};
///
/// assert_eq!(detect_kind(&ScalarValue::from(300), false), Kind::Int16);
/// assert_eq!(detect_kind(&ScalarValue::from("300"), false), Kind::String);
/// assert_eq!(detect_kind(&ScalarValue::from("300"), true), Kind::Int16);
/// ```
pub fn detect_kind(value: &ScalarValue<'_>, sniff: bool) -> Kind {
    match value {
        ScalarValue::Bool(_) => Kind::Boolean,
        ScalarValue::Float(v) => float_kind(*v),
        ScalarValue::Int(v) => integer_kind(*v),
        ScalarValue::Text(text) if sniff => sniff_kind(text),
        ScalarValue::Text(_) => Kind::String,
        ScalarValue::Unsupported => Kind::Invalid,
    }
}

/// Float32 when the magnitude fits the 32-bit range, otherwise Float64
fn float_kind(v: f64) -> Kind {
    let max = f64::from(f32::MAX);
    if (-max..=max).contains(&v) {
        Kind::Float32
    } else {
        Kind::Float64
    }
}

/// Narrowest signed width containing `v`
fn integer_kind(v: i64) -> Kind {
    if i8::try_from(v).is_ok() {
        Kind::Int8
    } else if i16::try_from(v).is_ok() {
        Kind::Int16
    } else if i32::try_from(v).is_ok() {
        Kind::Int32
    } else {
        Kind::Int64
    }
}

/// Infer a kind from the textual content of a value
///
/// The text is trimmed and lower-cased, then tried against each format in
/// turn; the first that parses wins:
///
/// 1. signed integers, narrowest first (`Int8` .. `Int64`)
/// 2. `Float32`, then `Float64`
/// 3. boolean literals (`true`, `false`, `t`, `f`)
/// 4. `YYYY-MM-DD HH:MM:SS`, then `YYYY-MM-DD`, then `HH:MM:SS`
///    (the hour may be one digit, fractional seconds are optional and a
///    leap second `60` is rejected)
/// 5. UUID
/// 6. CIDR block or bare IPv4/IPv6 address
///
/// Anything else is [`Kind::String`].
pub fn sniff_kind(text: &str) -> Kind {
    let v = text.trim().to_lowercase();
    let v = v.as_str();

    let kind = if v.parse::<i8>().is_ok() {
        Kind::Int8
    } else if v.parse::<i16>().is_ok() {
        Kind::Int16
    } else if v.parse::<i32>().is_ok() {
        Kind::Int32
    } else if v.parse::<i64>().is_ok() {
        Kind::Int64
    } else if parses_as_f32(v) {
        Kind::Float32
    } else if parses_as_f64(v) {
        Kind::Float64
    } else if parses_as_bool(v) {
        Kind::Boolean
    } else if parses_as_datetime(v) {
        Kind::DateTime
    } else if parses_as_date(v) {
        Kind::Date
    } else if parses_as_time(v) {
        Kind::Time
    } else if Uuid::parse_str(v).is_ok() {
        Kind::Id
    } else if parses_as_inet(v) {
        Kind::Inet
    } else {
        Kind::String
    };

    tracing::trace!(value = %text, kind = %kind, "Sniffed value kind");
    kind
}

/// Explicit infinities are accepted; overflow to infinity is not
fn is_infinity_literal(v: &str) -> bool {
    let unsigned = v.strip_prefix(['+', '-']).unwrap_or(v);
    unsigned == "inf" || unsigned == "infinity"
}

fn parses_as_f32(v: &str) -> bool {
    match v.parse::<f32>() {
        Ok(f) if f.is_infinite() => is_infinity_literal(v),
        Ok(_) => true,
        Err(_) => false,
    }
}

fn parses_as_f64(v: &str) -> bool {
    match v.parse::<f64>() {
        Ok(f) if f.is_infinite() => is_infinity_literal(v),
        Ok(_) => true,
        Err(_) => false,
    }
}

/// `1` and `0` never reach this check; they sniff as integers first
fn parses_as_bool(v: &str) -> bool {
    matches!(v, "true" | "t" | "1" | "false" | "f" | "0")
}

/// chrono folds second 60 into the nanosecond field
fn is_leap_second<T: Timelike>(t: &T) -> bool {
    t.nanosecond() >= 1_000_000_000
}

fn parses_as_datetime(v: &str) -> bool {
    DATETIME_REGEX.is_match(v)
        && NaiveDateTime::parse_from_str(v, &format!("{}%.f", DATETIME_FORMAT))
            .is_ok_and(|dt| !is_leap_second(&dt))
}

fn parses_as_date(v: &str) -> bool {
    DATE_REGEX.is_match(v) && NaiveDate::parse_from_str(v, DATE_FORMAT).is_ok()
}

fn parses_as_time(v: &str) -> bool {
    TIME_REGEX.is_match(v)
        && NaiveTime::parse_from_str(v, &format!("{}%.f", TIME_FORMAT))
            .is_ok_and(|t| !is_leap_second(&t))
}

fn parses_as_inet(v: &str) -> bool {
    match v.split_once('/') {
        Some((addr, prefix)) => {
            let Ok(addr) = addr.parse::<IpAddr>() else {
                return false;
            };
            if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
                return false;
            }
            let max = if addr.is_ipv4() { 32 } else { 128 };
            prefix.parse::<u32>().map(|p| p <= max).unwrap_or(false)
        }
        None => v.parse::<IpAddr>().is_ok(),
    }
}
