use std::time::Duration;
use thiserror::Error;

/// Parses a system uptime. Older firmware reports whole seconds (`"468117"`), newer firmware
/// reports `"015 days 22h:13m:57s"`. Seconds are tried first. An empty value is zero.
pub fn parse_uptime(s: &str) -> Result<Duration, UptimeError> {
    let value = s.trim();
    if value.is_empty() {
        return Ok(Duration::ZERO);
    }

    if let Ok(seconds) = value.parse::<u64>() {
        return Ok(Duration::from_secs(seconds));
    }

    parse_days_hms(value).ok_or_else(|| UptimeError::UnknownFormat { value: s.to_string() })
}

fn parse_days_hms(value: &str) -> Option<Duration> {
    let (days, hms) = value.split_once(" days ")?;
    let days: u64 = days.trim().parse().ok()?;

    let mut parts = hms.trim().split(':');
    let hours = component(parts.next()?, 'h')?;
    let minutes = component(parts.next()?, 'm')?;
    let seconds = component(parts.next()?, 's')?;
    if parts.next().is_some() {
        return None;
    }

    let total = days
        .checked_mul(24)?
        .checked_add(hours)?
        .checked_mul(60)?
        .checked_add(minutes)?
        .checked_mul(60)?
        .checked_add(seconds)?;

    Some(Duration::from_secs(total))
}

fn component(part: &str, unit: char) -> Option<u64> {
    let digits = part.strip_suffix(unit)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[derive(Error, Debug, PartialEq)]
pub enum UptimeError {
    #[error("unknown uptime format {value:?}, expected seconds or \"<d> days <h>h:<m>m:<s>s\"")]
    UnknownFormat { value: String },
}
