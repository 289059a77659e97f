//! Date helpers for the ISO-8601 strings the backend emits.
//!
//! Timestamps stay as strings end to end; the helpers here slice and
//! compare them without a full datetime stack. Day arithmetic uses the
//! proleptic Gregorian civil-day conversion, which is enough for expiry
//! checks and the dashboard's trailing-week series.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

const WEEKDAYS: [&str; 7] = ["Lun", "Mar", "Mer", "Jeu", "Ven", "Sam", "Dim"];

/// Extract the `YYYY-MM-DD` prefix of a timestamp.
#[must_use]
pub fn date_part(ts: &str) -> &str {
    match ts.split_once('T') {
        Some((date, _)) => date,
        None => ts.get(..10).unwrap_or(ts),
    }
}

fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut value: i64 = 0;
    for b in s.bytes() {
        value = value * 10 + i64::from(b - b'0');
    }
    Some(value)
}

fn split_ymd(date: &str) -> Option<(i64, i64, i64)> {
    let date = date_part(date);
    if date.len() != 10 {
        return None;
    }
    let y = parse_digits(date.get(..4)?)?;
    let m = parse_digits(date.get(5..7)?)?;
    let d = parse_digits(date.get(8..10)?)?;
    if !(1..=12).contains(&m) || !(1..=31).contains(&d) {
        return None;
    }
    Some((y, m, d))
}

// Civil-day conversions after Howard Hinnant's date algorithms.
fn days_from_civil(y: i64, m: i64, d: i64) -> i64 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i64::from(m <= 2);
    (y, m, d)
}

/// Render a timestamp as `JJ/MM/AAAA`. Unparseable input is returned as-is.
#[must_use]
pub fn format_date(ts: &str) -> String {
    match split_ymd(ts) {
        Some((y, m, d)) => format!("{d:02}/{m:02}/{y:04}"),
        None => ts.to_string(),
    }
}

/// Render a timestamp as `JJ/MM/AAAA HH:MM`, dropping seconds and zone.
#[must_use]
pub fn format_datetime(ts: &str) -> String {
    let date = format_date(ts);
    match ts.get(11..16) {
        Some(hm) if ts.len() > 10 => format!("{date} {hm}"),
        _ => date,
    }
}

/// Whether a timestamp falls on the given `YYYY-MM-DD` day.
#[must_use]
pub fn is_same_day(ts: &str, day: &str) -> bool {
    date_part(ts) == date_part(day)
}

/// The `count` days ending at `today` inclusive, oldest first.
///
/// Returns an empty vector when `today` is not a valid ISO date.
#[must_use]
pub fn previous_days(today: &str, count: usize) -> Vec<String> {
    let Some((y, m, d)) = split_ymd(today) else {
        return Vec::new();
    };
    let end = days_from_civil(y, m, d);
    let mut out = Vec::with_capacity(count);
    let span = i64::try_from(count).unwrap_or(i64::MAX);
    for offset in (0..span).rev() {
        let (y, m, d) = civil_from_days(end - offset);
        out.push(format!("{y:04}-{m:02}-{d:02}"));
    }
    out
}

/// French weekday abbreviation (`Lun` .. `Dim`) for an ISO date.
#[must_use]
pub fn weekday_label(date: &str) -> Option<&'static str> {
    let (y, m, d) = split_ymd(date)?;
    let days = days_from_civil(y, m, d);
    match usize::try_from((days + 3).rem_euclid(7)) {
        Ok(idx) => WEEKDAYS.get(idx).copied(),
        Err(_) => None,
    }
}
