use serde::Deserialize;

use crate::models::ScheduleRecord;

#[derive(Debug, Deserialize)]
pub struct ScheduleListResponse {
    pub schedules: Vec<ScheduleRecord>,
}

/// Best-effort shape of a backend error payload.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
