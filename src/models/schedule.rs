use serde::{Deserialize, Serialize};

/// One scheduled tutoring session as the backend reports it.
///
/// `date` and `time` arrive as separate strings ("YYYY-MM-DD" / "HH:MM:SS",
/// platform-local, no offset) and are kept verbatim; the start instant is
/// derived where it is consumed, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    pub schedule_id: String,
    pub module_id: String,
    pub date: String,
    pub time: String,
    pub duration_minutes: i64,
    pub week_number: i32,
    pub recurrent_type: String,
    pub module_name: String,
    pub tutor_name: String,
    pub valid: bool,
    pub schedule_type: String,
}
