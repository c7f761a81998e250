//! Approximate, human-readable rendering of elapsed time.

use chrono::TimeDelta;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_MONTH: f64 = 30.5;

/// Render `delta` as a natural-language approximation ("2 days", "an hour", "3 months").
///
/// Sub-day spans are reported in seconds, minutes or hours. Longer spans are
/// reported in days until they round to a whole month, then in months, then
/// years. Negative spans (a timestamp in the future) are treated as zero.
pub fn natural_delta(delta: TimeDelta) -> String {
    let total = delta.num_seconds().max(0);

    let years = total / SECONDS_PER_DAY / DAYS_PER_YEAR;
    let days = total / SECONDS_PER_DAY % DAYS_PER_YEAR;
    let seconds = total % SECONDS_PER_DAY;
    let months = (days as f64 / DAYS_PER_MONTH).round() as i64;

    match (years, days) {
        (0, 0) => seconds_delta(seconds),
        (0, 1) => "a day".to_string(),
        (0, _) => match months {
            0 => format!("{days} days"),
            1 => "a month".to_string(),
            _ => format!("{months} months"),
        },
        (1, _) => match (months, days) {
            (0, 0) => "a year".to_string(),
            (0, 1) => "1 year, 1 day".to_string(),
            (0, _) => format!("1 year, {days} days"),
            (1, _) => "1 year, 1 month".to_string(),
            _ => format!("1 year, {months} months"),
        },
        _ => format!("{years} years"),
    }
}

fn seconds_delta(seconds: i64) -> String {
    match seconds {
        0 => "a moment".to_string(),
        1 => "a second".to_string(),
        s if s < SECONDS_PER_MINUTE => format!("{s} seconds"),
        s if s < 2 * SECONDS_PER_MINUTE => "a minute".to_string(),
        s if s < SECONDS_PER_HOUR => format!("{} minutes", s / SECONDS_PER_MINUTE),
        s if s < 2 * SECONDS_PER_HOUR => "an hour".to_string(),
        s => format!("{} hours", s / SECONDS_PER_HOUR),
    }
}
