use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::AppError;
use crate::models::ScheduleRecord;

/// Lead time before the start instant during which a session can be joined.
fn join_window() -> Duration {
    Duration::hours(1)
}

/// Combines a record's `date` and `time` fields into its start instant.
///
/// Unparseable fields are a hard error for that record; the value is never
/// coerced to some fallback date.
pub fn effective_start(record: &ScheduleRecord) -> Result<NaiveDateTime, AppError> {
    let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").map_err(|e| {
        AppError::MalformedSchedule {
            schedule_id: record.schedule_id.clone(),
            detail: format!("bad date {:?}: {}", record.date, e),
        }
    })?;
    let time = NaiveTime::parse_from_str(&record.time, "%H:%M:%S").map_err(|e| {
        AppError::MalformedSchedule {
            schedule_id: record.schedule_id.clone(),
            detail: format!("bad time {:?}: {}", record.time, e),
        }
    })?;
    Ok(NaiveDateTime::new(date, time))
}

/// Records belonging to the given module, input order preserved.
pub fn filter_by_module(records: &[ScheduleRecord], module_id: &str) -> Vec<ScheduleRecord> {
    records
        .iter()
        .filter(|r| r.module_id == module_id)
        .cloned()
        .collect()
}

/// Whether the session can be joined at `now`: true iff the start instant is
/// strictly in the future and at most one hour away.
///
/// A session starting exactly at `now`, or already started, is not joinable.
/// The `valid` flag is intentionally not consulted here; only the upcoming
/// query gates on validity.
pub fn is_joinable(record: &ScheduleRecord, now: NaiveDateTime) -> Result<bool, AppError> {
    let start = effective_start(record)?;
    let delta = start - now;
    Ok(delta > Duration::zero() && delta <= join_window())
}

/// Valid records starting strictly after `now`, earliest first.
///
/// Every record's start instant is computed up front, so a single malformed
/// record fails the whole call with its `schedule_id` rather than being
/// silently dropped. Ties on the start instant keep their input order.
pub fn upcoming(
    records: &[ScheduleRecord],
    now: NaiveDateTime,
) -> Result<Vec<ScheduleRecord>, AppError> {
    let mut keyed: Vec<(NaiveDateTime, ScheduleRecord)> = Vec::with_capacity(records.len());
    for record in records {
        keyed.push((effective_start(record)?, record.clone()));
    }

    keyed.retain(|(start, record)| record.valid && *start > now);
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}
