//! Duration token parsing

use crate::error::{Result, TimelogError};

/// Parse a duration token into a number of minutes.
///
/// Accepted forms:
/// - `90min`: minutes, given directly
/// - `2`: whole hours
/// - `1.5`: hours and minutes, so `1.5` is one hour and five minutes
///
/// # Examples
///
/// ```
/// use timelog::domain::parse_duration;
///
/// assert_eq!(parse_duration("90min").unwrap(), 90);
/// assert_eq!(parse_duration("1.5").unwrap(), 65);
/// assert_eq!(parse_duration("2").unwrap(), 120);
/// ```
pub fn parse_duration(token: &str) -> Result<i64> {
    if let Some(minutes) = token.strip_suffix("min") {
        return parse_int(minutes, token);
    }

    let parts: Vec<&str> = token.split('.').collect();
    let total = match parts.as_slice() {
        [hours] => parse_int(hours, token)?.checked_mul(60),
        [hours, minutes] => {
            let (hours, minutes) = (parse_int(hours, token)?, parse_int(minutes, token)?);
            hours.checked_mul(60).and_then(|h| h.checked_add(minutes))
        }
        _ => None,
    };
    total.ok_or_else(|| TimelogError::InvalidDuration(token.to_string()))
}

fn parse_int(text: &str, token: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| TimelogError::InvalidDuration(token.to_string()))
}
