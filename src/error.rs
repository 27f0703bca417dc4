use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed schedule {schedule_id}: {detail}")]
    MalformedSchedule { schedule_id: String, detail: String },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Bad request: {0}")]
    BadRequest(String),
}
