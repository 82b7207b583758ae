use common::MappingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: server answered {status}")]
    Http { status: u16 },

    #[error("Parse error: {0}")]
    Parse(#[from] MappingError),

    #[error("Invalid job id: {0}")]
    InvalidJobId(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LoadError {
    /// Short label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Network(_) => "network",
            LoadError::Http { .. } => "http",
            LoadError::Parse(_) => "parse",
            LoadError::InvalidJobId(_) => "invalid_job_id",
            LoadError::Config(_) => "config",
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LoadError::Network("Request timeout".to_string())
        } else if err.is_connect() {
            LoadError::Network("Failed to connect to jobs API".to_string())
        } else if let Some(status) = err.status() {
            LoadError::Http {
                status: status.as_u16(),
            }
        } else {
            LoadError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for LoadError {
    fn from(err: url::ParseError) -> Self {
        LoadError::Config(format!("Invalid base URL: {}", err))
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
