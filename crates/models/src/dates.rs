use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::errors::ModelError;

/// Parse an ISO date for a due-date column.
///
/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD`, which is taken as
/// midnight UTC. The result is always normalized to UTC so stored values
/// compare correctly on every backend.
pub fn parse_due_date(raw: &str) -> Result<DateTimeWithTimeZone, ModelError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc).into());
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ModelError::Validation(format!("due_date: invalid date '{raw}'")))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| ModelError::Validation(format!("due_date: invalid date '{raw}'")))?;
    Ok(Utc.from_utc_datetime(&midnight).into())
}

/// `parse_due_date` for an optional payload field; absent stays absent.
pub fn parse_optional(raw: Option<&str>) -> Result<Option<DateTimeWithTimeZone>, ModelError> {
    raw.map(parse_due_date).transpose()
}
