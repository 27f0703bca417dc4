use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tutorhub_client::backend::{
    BackendConfig, EnvCredentialProvider, HttpScheduleRepository,
};
use tutorhub_client::services::{ScheduleService, SystemClock};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "tutorhub_client=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = BackendConfig::new_from_env()?;
    let repository = HttpScheduleRepository::new(config, Box::new(EnvCredentialProvider))?;
    let service = ScheduleService::new(Arc::new(repository), Arc::new(SystemClock));

    for record in service.upcoming_sessions().await? {
        info!(
            "upcoming: {} with {} on {} {} ({})",
            record.module_name, record.tutor_name, record.date, record.time, record.schedule_type
        );
    }

    for record in service.joinable_sessions().await? {
        info!(
            "joinable now: {} with {} at {}",
            record.module_name, record.tutor_name, record.time
        );
    }

    Ok(())
}
