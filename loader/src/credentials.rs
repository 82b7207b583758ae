use std::fmt;

use crate::error::{LoadError, LoadResult};

/// Identifier of the job whose details are requested. Never blank, and never
/// `.` or `..`, which a URL path would collapse instead of sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> LoadResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(LoadError::InvalidJobId(
                "job id cannot be empty".to_string(),
            ));
        }
        if id == "." || id == ".." {
            return Err(LoadError::InvalidJobId(format!(
                "'{}' is not a usable job id",
                id
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque bearer token. Its value never shows up in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}
