//! Maps the current [`ViewState`] to the branch a renderer should draw.
//!
//! Selection is pure: it borrows the stored data and never triggers a fetch.

use common::{JobDetail, SimilarJob};

use crate::state::ViewState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderBranch<'a> {
    Idle,
    Loading,
    Success {
        job: &'a JobDetail,
        similar_jobs: &'a [SimilarJob],
    },
    Failure,
}

/// One entry of the similar jobs list. Carries the primary job's employment
/// type, which is what the list shows for every entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarJobCard<'a> {
    pub job: &'a SimilarJob,
    pub employment_type: &'a str,
}

pub fn select(state: &ViewState) -> RenderBranch<'_> {
    match state {
        ViewState::Idle => RenderBranch::Idle,
        ViewState::Loading => RenderBranch::Loading,
        ViewState::Success(payload) => RenderBranch::Success {
            job: &payload.job_details,
            similar_jobs: &payload.similar_jobs,
        },
        ViewState::Failure => RenderBranch::Failure,
    }
}

impl<'a> RenderBranch<'a> {
    /// Similar job entries in API order. Empty for every branch but `Success`.
    pub fn similar_job_cards(&self) -> Vec<SimilarJobCard<'a>> {
        match *self {
            RenderBranch::Success { job, similar_jobs } => similar_jobs
                .iter()
                .map(|similar| SimilarJobCard {
                    job: similar,
                    employment_type: &job.employment_type,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}
