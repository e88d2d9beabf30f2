use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "employee_id": 5,
    "start_date": "2024-01-01",
    "end_date": "2024-01-03",
    "duration": 3,
    "status": "pending",
    "reason": "Family trip",
    "leave_type": "annual"
}))]
pub struct Leave {
    pub id: u64,
    pub employee_id: u64,
    #[schema(value_type = String, format = "date")]
    pub start_date: NaiveDate,
    #[schema(value_type = String, format = "date")]
    pub end_date: NaiveDate,
    /// Inclusive day count, derived from the dates.
    pub duration: i64,
    pub status: String,
    pub reason: Option<String>,
    pub leave_type: Option<String>,
}

/// The persisted date pair read back during a partial update.
#[derive(Debug, Clone, Copy, PartialEq, sqlx::FromRow)]
pub struct LeaveDates {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Leave body for create and update. Every field is optional at the wire level;
/// create validates presence, update merges missing dates.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LeavePayload {
    #[schema(example = 5)]
    pub employee_id: Option<u64>,
    #[schema(example = "2024-01-01", format = "date")]
    pub start_date: Option<String>,
    #[schema(example = "2024-01-03", format = "date")]
    pub end_date: Option<String>,
    #[schema(example = "annual")]
    pub leave_type: Option<String>,
    #[schema(example = "pending")]
    pub status: Option<String>,
    pub reason: Option<String>,
}

/// Columns written by an insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLeave {
    pub employee_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration: i64,
    pub status: String,
    pub reason: Option<String>,
    pub leave_type: String,
}

/// Columns written by an update; every one is overwritten.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveChanges {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration: i64,
    pub status: String,
    pub reason: Option<String>,
    pub leave_type: Option<String>,
}

/// Parses `YYYY-MM-DD`, or an RFC 3339 timestamp truncated to its date.
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| ApiError::Validation(format!("{field} must be a date (YYYY-MM-DD)")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_dates_and_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(parse_date("end_date", "2024-01-03").unwrap(), expected);
        assert_eq!(
            parse_date("end_date", "2024-01-03T00:00:00.000Z").unwrap(),
            expected
        );
    }

    #[test]
    fn rejects_malformed_dates_with_field_name() {
        let err = parse_date("start_date", "03/01/2024").unwrap_err();
        assert_eq!(
            err,
            ApiError::Validation("start_date must be a date (YYYY-MM-DD)".into())
        );
    }
}
