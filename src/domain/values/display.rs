//! Number and time rendering shared by the CLI and anything else that shows
//! quotes to a person.

use chrono::{DateTime, Utc};

/// Render with exactly one leading sign: `+2.34`, `-1.23`, `+0.00`.
///
/// The sign is taken from the rounded value so `-0.001` renders as `+0.00`.
pub fn signed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    let sign = if rounded < 0.0 { '-' } else { '+' };
    format!("{sign}{:.*}", decimals, rounded.abs())
}

/// `+$2.34` / `-$1.23`.
pub fn signed_currency(value: f64) -> String {
    let s = signed(value, 2);
    let (sign, digits) = s.split_at(1);
    format!("{sign}${digits}")
}

/// `+1.30%` / `-0.97%`.
pub fn signed_percent(value: f64) -> String {
    format!("{}%", signed(value, 2))
}

/// `$125,420.50`, `-$1,000.00`.
pub fn currency(value: f64) -> String {
    let body = format!("{:.2}", value.abs());
    let (int_part, frac_part) = body.split_once('.').unwrap_or((&body, "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if value < 0.0 && body != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

/// Coarse "how long ago" label. Timestamps in the future render as `just now`.
pub fn relative_time(then: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let secs = (*now - *then).num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }
    let (n, unit) = if secs < 3600 {
        (secs / 60, "minute")
    } else if secs < 86_400 {
        (secs / 3600, "hour")
    } else {
        (secs / 86_400, "day")
    };
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}
