use async_trait::async_trait;
use common::{JobDetailsPayload, parse_response};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::LoaderConfig;
use crate::credentials::{AuthToken, JobId};
use crate::error::{LoadError, LoadResult};

/// Anything that can produce the details of one job.
#[async_trait]
pub trait JobDetailsSource: Send + Sync {
    async fn fetch(&self, job_id: &JobId, token: &AuthToken) -> LoadResult<JobDetailsPayload>;
}

/// Fetches job details from the jobs REST API.
pub struct HttpJobDetailsClient {
    client: Client,
    config: LoaderConfig,
}

impl HttpJobDetailsClient {
    pub fn new(config: LoaderConfig) -> LoadResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| LoadError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }
}

#[async_trait]
impl JobDetailsSource for HttpJobDetailsClient {
    /// One GET, no retries. Any non-2xx answer is an error.
    async fn fetch(&self, job_id: &JobId, token: &AuthToken) -> LoadResult<JobDetailsPayload> {
        let url = self.config.job_details_url(job_id)?;
        debug!(%job_id, %url, "requesting job details");

        let response = self
            .client
            .get(url)
            .bearer_auth(token.expose())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%job_id, status = status.as_u16(), "jobs API rejected request");
            return Err(LoadError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let payload = parse_response(&body)?;

        info!(
            %job_id,
            skills = payload.job_details.skills.len(),
            similar_jobs = payload.similar_jobs.len(),
            "loaded job details"
        );
        Ok(payload)
    }
}
