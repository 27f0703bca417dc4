pub mod clock;
pub mod schedule_service;
pub mod scheduler;

pub use clock::{Clock, FixedClock, SystemClock};
pub use schedule_service::ScheduleService;
