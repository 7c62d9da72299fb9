//! Autoclose interval arithmetic.
//!
//! Intervals are stored as whole minutes. Slash commands take them as separate
//! day, hour and minute options.

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::validation::ValidationError;

/// Longest accepted interval: ten years of minutes.
pub const MAX_MINUTES: i64 = 10 * 365 * 24 * 60;

/// Largest value each slash-command duration option accepts.
pub const MAX_DAYS: u64 = 10 * 365;
pub const MAX_HOURS: u64 = MAX_DAYS * 24;
pub const MAX_MINUTES_OPTION: u64 = MAX_HOURS * 60;

/// Combines day/hour/minute parts into minutes.
///
/// # Returns
/// - `Ok(None)` - All parts are zero, which disables the feature
/// - `Ok(Some(minutes))` - Positive total in minutes
/// - `Err(ValidationError::NegativeDuration)` - Any part is negative
/// - `Err(ValidationError::DurationTooLong)` - Total exceeds [`MAX_MINUTES`]
pub fn from_parts(days: i64, hours: i64, minutes: i64) -> Result<Option<i64>, ValidationError> {
    if days < 0 || hours < 0 || minutes < 0 {
        return Err(ValidationError::NegativeDuration);
    }

    let total = days
        .checked_mul(24 * 60)
        .and_then(|total| total.checked_add(hours.checked_mul(60)?))
        .and_then(|total| total.checked_add(minutes))
        .filter(|total| *total <= MAX_MINUTES)
        .ok_or(ValidationError::DurationTooLong {
            max_days: MAX_DAYS,
        })?;

    Ok((total > 0).then_some(total))
}

/// `at` plus `minutes`, or `None` when the result is out of range.
pub fn after(at: DateTime<Utc>, minutes: i64) -> Option<DateTime<Utc>> {
    at.checked_add_signed(TimeDelta::try_minutes(minutes)?)
}

/// `at` minus `minutes`, or `None` when the result is out of range.
pub fn before(at: DateTime<Utc>, minutes: i64) -> Option<DateTime<Utc>> {
    at.checked_sub_signed(TimeDelta::try_minutes(minutes)?)
}

/// Formats minutes as `N days, H:MM:00`, or `Disabled` for `None`.
pub fn format_minutes(minutes: Option<i64>) -> String {
    let Some(minutes) = minutes else {
        return "Disabled".to_string();
    };

    let days = minutes / (24 * 60);
    let hours = (minutes % (24 * 60)) / 60;
    let mins = minutes % 60;
    let clock = format!("{}:{:02}:00", hours, mins);

    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        _ => format!("{} days, {}", days, clock),
    }
}
