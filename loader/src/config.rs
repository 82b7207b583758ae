use std::time::Duration;

use url::Url;

use crate::credentials::JobId;
use crate::error::{LoadError, LoadResult};

pub const DEFAULT_BASE_URL: &str = "https://apis.ccbp.in";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "Jobby-Viewer/0.1";

pub const BASE_URL_ENV: &str = "JOBBY_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "JOBBY_HTTP_TIMEOUT_SECS";

/// Where and how the loader talks to the jobs API.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl LoaderConfig {
    /// Reads overrides from the process environment. Unset variables keep defaults.
    pub fn from_env() -> LoadResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> LoadResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_ENV) {
            config = config.with_base_url(&base_url)?;
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                LoadError::Config(format!("{} must be a number of seconds, got '{}'", TIMEOUT_ENV, raw))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> LoadResult<Self> {
        let url = Url::parse(base_url.trim())?;
        if url.cannot_be_a_base() {
            return Err(LoadError::Config(format!(
                "base URL '{}' cannot carry a path",
                base_url
            )));
        }
        self.base_url = url;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `{base}/login/{job_id}`, with the id pushed as a single encoded segment.
    pub fn job_details_url(&self, job_id: &JobId) -> LoadResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LoadError::Config("base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .push("login")
            .push(job_id.as_str());
        Ok(url)
    }
}
