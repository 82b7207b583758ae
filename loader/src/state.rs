use common::{JobDetail, JobDetailsPayload, SimilarJob};
use serde::Serialize;

/// Lifecycle of the job details fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoadStatus {
    #[serde(rename = "INITIAL")]
    Idle,
    #[serde(rename = "IN_PROGRESS")]
    Loading,
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILURE")]
    Failure,
}

/// What the screen currently holds. Job data only exists alongside `Success`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Success(JobDetailsPayload),
    Failure,
}

impl ViewState {
    pub fn status(&self) -> LoadStatus {
        match self {
            ViewState::Idle => LoadStatus::Idle,
            ViewState::Loading => LoadStatus::Loading,
            ViewState::Success(_) => LoadStatus::Success,
            ViewState::Failure => LoadStatus::Failure,
        }
    }

    pub fn job_details(&self) -> Option<&JobDetail> {
        match self {
            ViewState::Success(payload) => Some(&payload.job_details),
            _ => None,
        }
    }

    pub fn similar_jobs(&self) -> &[SimilarJob] {
        match self {
            ViewState::Success(payload) => &payload.similar_jobs,
            _ => &[],
        }
    }
}
