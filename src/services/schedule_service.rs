use std::sync::Arc;

use tracing::info;

use crate::backend::ScheduleRepository;
use crate::error::AppError;
use crate::models::ScheduleRecord;
use crate::services::clock::Clock;
use crate::services::scheduler;

/// UI-facing queries over the user's schedule: one repository fetch, then
/// pure computation at the clock's current instant.
pub struct ScheduleService {
    repository: Arc<dyn ScheduleRepository>,
    clock: Arc<dyn Clock>,
}

impl ScheduleService {
    pub fn new(repository: Arc<dyn ScheduleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Valid future sessions, earliest first.
    pub async fn upcoming_sessions(&self) -> Result<Vec<ScheduleRecord>, AppError> {
        let records = self.repository.fetch_my_schedules().await?;
        let upcoming = scheduler::upcoming(&records, self.clock.now())?;
        info!("{} of {} schedules are upcoming", upcoming.len(), records.len());
        Ok(upcoming)
    }

    /// Sessions inside the join window right now.
    pub async fn joinable_sessions(&self) -> Result<Vec<ScheduleRecord>, AppError> {
        let records = self.repository.fetch_my_schedules().await?;
        let now = self.clock.now();

        let mut joinable = Vec::new();
        for record in records {
            if scheduler::is_joinable(&record, now)? {
                joinable.push(record);
            }
        }
        info!("{} schedules are joinable", joinable.len());
        Ok(joinable)
    }

    /// All of the user's sessions for one module, in backend order.
    pub async fn sessions_for_module(
        &self,
        module_id: &str,
    ) -> Result<Vec<ScheduleRecord>, AppError> {
        let records = self.repository.fetch_my_schedules().await?;
        Ok(scheduler::filter_by_module(&records, module_id))
    }
}
