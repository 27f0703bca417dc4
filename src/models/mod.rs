pub mod schedule;

pub use schedule::ScheduleRecord;
