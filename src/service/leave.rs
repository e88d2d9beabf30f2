//! Leave rules: required-field validation, inclusive duration, and the
//! merge applied when an update leaves out one or both dates.

use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::model::defaults::{self, or_default, present};
use crate::model::leave::{LeaveChanges, LeaveDates, LeavePayload, NewLeave, parse_date};
use crate::store::LeaveStore;

/// Inclusive day count between two dates; never negative.
///
/// A Monday to Wednesday leave is 3 days. An end date before the start
/// yields 0.
pub fn leave_duration(start: NaiveDate, end: NaiveDate) -> i64 {
    ((end - start).num_days() + 1).max(0)
}

/// Checks the fields a new leave must carry and builds the insert row.
pub fn validate_new_leave(payload: LeavePayload) -> Result<NewLeave, ApiError> {
    let employee_id = payload.employee_id.filter(|id| *id != 0);
    let start_date = present(payload.start_date);
    let end_date = present(payload.end_date);
    let leave_type = present(payload.leave_type);

    let mut missing = Vec::new();
    if employee_id.is_none() {
        missing.push("employee_id");
    }
    if start_date.is_none() {
        missing.push("start_date");
    }
    if end_date.is_none() {
        missing.push("end_date");
    }
    if leave_type.is_none() {
        missing.push("leave_type");
    }

    let (Some(employee_id), Some(start_date), Some(end_date), Some(leave_type)) =
        (employee_id, start_date, end_date, leave_type)
    else {
        return Err(ApiError::missing_fields(&missing));
    };

    let start_date = parse_date("start_date", &start_date)?;
    let end_date = parse_date("end_date", &end_date)?;

    Ok(NewLeave {
        employee_id,
        start_date,
        end_date,
        duration: leave_duration(start_date, end_date),
        status: or_default(payload.status, defaults::LEAVE_STATUS),
        reason: present(payload.reason),
        leave_type,
    })
}

/// Which dates an update request carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateUpdate {
    /// Both dates supplied: the row is replaced without reading it first.
    Full { start: NaiveDate, end: NaiveDate },
    /// At least one date missing: the persisted value fills the gap.
    Partial {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl DateUpdate {
    pub fn from_parts(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => DateUpdate::Full { start, end },
            (start, end) => DateUpdate::Partial { start, end },
        }
    }

    /// Completes the pair, taking omitted dates from `persisted`.
    pub fn resolve(self, persisted: &LeaveDates) -> (NaiveDate, NaiveDate) {
        match self {
            DateUpdate::Full { start, end } => (start, end),
            DateUpdate::Partial { start, end } => (
                start.unwrap_or(persisted.start_date),
                end.unwrap_or(persisted.end_date),
            ),
        }
    }
}

fn parse_optional_date(field: &str, raw: Option<String>) -> Result<Option<NaiveDate>, ApiError> {
    present(raw).map(|raw| parse_date(field, &raw)).transpose()
}

/// Applies an update to leave `id`, recomputing the duration from the
/// resulting dates.
///
/// The read of persisted dates and the write are separate statements, so two
/// concurrent partial updates of the same leave can race on the dates.
#[instrument(name = "leave.update", skip(store, payload))]
pub async fn update_leave(
    store: &dyn LeaveStore,
    id: u64,
    payload: LeavePayload,
) -> Result<LeaveChanges, ApiError> {
    let start = parse_optional_date("start_date", payload.start_date)?;
    let end = parse_optional_date("end_date", payload.end_date)?;

    let (start_date, end_date) = match DateUpdate::from_parts(start, end) {
        DateUpdate::Full { start, end } => (start, end),
        partial => {
            debug!(?partial, "Backfilling omitted dates from the stored leave");
            let persisted = store
                .find_leave_dates(id)
                .await?
                .ok_or_else(|| ApiError::NotFound("Leave not found".to_string()))?;
            partial.resolve(&persisted)
        }
    };

    let changes = LeaveChanges {
        start_date,
        end_date,
        duration: leave_duration(start_date, end_date),
        status: or_default(payload.status, defaults::LEAVE_STATUS),
        reason: present(payload.reason),
        leave_type: present(payload.leave_type),
    };

    if store.update_leave(id, &changes).await? == 0 {
        return Err(ApiError::NotFound("Leave not found".to_string()));
    }

    Ok(changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn annual_leave() -> LeavePayload {
        LeavePayload {
            employee_id: Some(5),
            start_date: Some("2024-01-01".into()),
            end_date: Some("2024-01-03".into()),
            leave_type: Some("annual".into()),
            ..Default::default()
        }
    }

    async fn seeded() -> (MemoryStore, u64) {
        let store = MemoryStore::new();
        let leave = validate_new_leave(annual_leave()).unwrap();
        let id = store.insert_leave(&leave).await.unwrap();
        (store, id)
    }

    #[test]
    fn duration_counts_both_endpoints() {
        assert_eq!(leave_duration(date(2024, 1, 1), date(2024, 1, 3)), 3);
        assert_eq!(leave_duration(date(2024, 1, 1), date(2024, 1, 1)), 1);
        assert_eq!(leave_duration(date(2024, 2, 28), date(2024, 3, 1)), 3);
        assert_eq!(leave_duration(date(2023, 12, 31), date(2024, 1, 1)), 2);
    }

    #[test]
    fn duration_is_clamped_when_end_precedes_start() {
        assert_eq!(leave_duration(date(2024, 1, 3), date(2024, 1, 2)), 0);
        assert_eq!(leave_duration(date(2024, 1, 10), date(2024, 1, 1)), 0);
    }

    #[test]
    fn new_leave_gets_defaults_and_duration() {
        let leave = validate_new_leave(annual_leave()).unwrap();
        assert_eq!(leave.duration, 3);
        assert_eq!(leave.status, "pending");
        assert_eq!(leave.reason, None);
        assert_eq!(leave.leave_type, "annual");
    }

    #[test]
    fn new_leave_names_missing_fields() {
        let err = validate_new_leave(LeavePayload {
            employee_id: Some(0),
            end_date: Some(String::new()),
            ..annual_leave()
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: employee_id, end_date"
        );

        let err = validate_new_leave(LeavePayload {
            leave_type: None,
            ..annual_leave()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: leave_type");
    }

    #[test]
    fn date_update_picks_path_from_supplied_dates() {
        let stored = LeaveDates {
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 3),
        };

        let full = DateUpdate::from_parts(Some(date(2024, 2, 1)), Some(date(2024, 2, 2)));
        assert!(matches!(full, DateUpdate::Full { .. }));
        assert_eq!(full.resolve(&stored), (date(2024, 2, 1), date(2024, 2, 2)));

        let only_end = DateUpdate::from_parts(None, Some(date(2024, 1, 5)));
        assert_eq!(only_end.resolve(&stored), (date(2024, 1, 1), date(2024, 1, 5)));

        let neither = DateUpdate::from_parts(None, None);
        assert_eq!(neither.resolve(&stored), (date(2024, 1, 1), date(2024, 1, 3)));
    }

    #[actix_web::test]
    async fn status_only_update_keeps_dates_and_duration() {
        let (store, id) = seeded().await;

        let changes = update_leave(
            &store,
            id,
            LeavePayload {
                status: Some("approved".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(changes.duration, 3);
        let stored = store.leave(id).unwrap();
        assert_eq!(stored.status, "approved");
        assert_eq!(stored.start_date, date(2024, 1, 1));
        assert_eq!(stored.end_date, date(2024, 1, 3));
        assert_eq!(stored.duration, 3);
    }

    #[actix_web::test]
    async fn end_date_only_update_uses_stored_start() {
        let (store, id) = seeded().await;

        let changes = update_leave(
            &store,
            id,
            LeavePayload {
                end_date: Some("2024-01-10".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(changes.start_date, date(2024, 1, 1));
        assert_eq!(changes.duration, 10);
        assert_eq!(store.leave(id).unwrap().duration, 10);
    }

    #[actix_web::test]
    async fn empty_date_strings_are_backfilled() {
        let (store, id) = seeded().await;

        let changes = update_leave(
            &store,
            id,
            LeavePayload {
                start_date: Some(String::new()),
                end_date: Some("2024-01-02".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(changes.start_date, date(2024, 1, 1));
        assert_eq!(changes.duration, 2);
    }

    #[actix_web::test]
    async fn full_update_replaces_every_column() {
        let (store, id) = seeded().await;

        update_leave(
            &store,
            id,
            LeavePayload {
                start_date: Some("2024-03-01".into()),
                end_date: Some("2024-03-05".into()),
                reason: Some("Conference".into()),
                leave_type: Some("sick".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let stored = store.leave(id).unwrap();
        assert_eq!(stored.duration, 5);
        assert_eq!(stored.status, "pending");
        assert_eq!(stored.reason.as_deref(), Some("Conference"));
        assert_eq!(stored.leave_type.as_deref(), Some("sick"));
    }

    #[actix_web::test]
    async fn partial_update_of_unknown_leave_is_not_found() {
        let store = MemoryStore::new();
        let err = update_leave(&store, 42, LeavePayload::default())
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::NotFound("Leave not found".into()));
    }

    #[actix_web::test]
    async fn full_update_of_unknown_leave_is_not_found() {
        let store = MemoryStore::new();
        let err = update_leave(
            &store,
            42,
            LeavePayload {
                start_date: Some("2024-01-01".into()),
                end_date: Some("2024-01-02".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err, ApiError::NotFound("Leave not found".into()));
    }

    #[actix_web::test]
    async fn store_failure_surfaces_as_store_error() {
        let (store, id) = seeded().await;
        store.fail("connection refused");

        let err = update_leave(&store, id, LeavePayload::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Store(msg) if msg.contains("connection refused")));
    }
}
