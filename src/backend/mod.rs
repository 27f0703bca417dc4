pub mod dto;

use std::env;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::error::AppError;
use crate::models::ScheduleRecord;

#[derive(Clone, Debug)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let base_url = env::var("TUTORHUB_API_URL")
            .map_err(|_| AppError::BadRequest("TUTORHUB_API_URL is not set".to_string()))?;

        Ok(Self { base_url })
    }
}

/// Single place the transport obtains the caller's token from. The engine
/// and service layers never see credentials.
pub trait CredentialProvider: Send + Sync {
    fn token(&self) -> Result<String, AppError>;
}

pub struct EnvCredentialProvider;

impl CredentialProvider for EnvCredentialProvider {
    fn token(&self) -> Result<String, AppError> {
        env::var("TUTORHUB_TOKEN")
            .map_err(|_| AppError::Auth("TUTORHUB_TOKEN is not set".to_string()))
    }
}

/// Fetches the authenticated user's full schedule list. One round trip, no
/// pagination; retries and caching are not this layer's concern.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn fetch_my_schedules(&self) -> Result<Vec<ScheduleRecord>, AppError>;
}

pub struct HttpScheduleRepository {
    client: Client,
    config: BackendConfig,
    credentials: Box<dyn CredentialProvider>,
}

impl HttpScheduleRepository {
    pub fn new(
        config: BackendConfig,
        credentials: Box<dyn CredentialProvider>,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::BadRequest(format!("Failed to build http client: {}", e)))?;
        Ok(Self {
            client,
            config,
            credentials,
        })
    }
}

#[async_trait]
impl ScheduleRepository for HttpScheduleRepository {
    async fn fetch_my_schedules(&self) -> Result<Vec<ScheduleRecord>, AppError> {
        let url = format!("{}/schedules/my", self.config.base_url);
        let token = self.credentials.token()?;

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AppError::Auth(format!("backend rejected token ({})", status)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<dto::ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(body);
            return Err(AppError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body_text = response.text().await.unwrap_or_default();
        let parsed: dto::ScheduleListResponse =
            serde_json::from_str(&body_text).map_err(|e| {
                tracing::error!("Failed to parse schedule list: {}", e);
                AppError::Server {
                    status: status.as_u16(),
                    message: format!("Unparseable schedule list: {}", e),
                }
            })?;

        Ok(parsed.schedules)
    }
}

/// Test stand-in: a user with an empty schedule.
pub struct NoopScheduleRepository;

#[async_trait]
impl ScheduleRepository for NoopScheduleRepository {
    async fn fetch_my_schedules(&self) -> Result<Vec<ScheduleRecord>, AppError> {
        Ok(Vec::new())
    }
}
