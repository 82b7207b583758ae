//! snake_case wire shapes -> view models.
//!
//! Every function here is pure: the loader calls them after the body has been
//! read, and tests call them without any network at all.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{JobDetail, JobDetailsPayload, LifeAtCompany, SimilarJob, Skill};
use crate::wire::{JobDetailsResponse, JobDetailsWire, SimilarJobWire};

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("malformed job details body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("job {job_id} lists skill '{name}' more than once")]
    DuplicateSkill { job_id: String, name: String },
}

/// Parses a raw response body straight into view models.
pub fn parse_response(body: &[u8]) -> Result<JobDetailsPayload, MappingError> {
    let response: JobDetailsResponse = serde_json::from_slice(body)?;
    map_response(response)
}

pub fn map_response(response: JobDetailsResponse) -> Result<JobDetailsPayload, MappingError> {
    let job_details = map_job_detail(response.job_details)?;
    let similar_jobs = response
        .similar_jobs
        .into_iter()
        .map(map_similar_job)
        .collect();

    Ok(JobDetailsPayload {
        job_details,
        similar_jobs,
    })
}

/// Maps the primary job, rejecting repeated skill names.
pub fn map_job_detail(wire: JobDetailsWire) -> Result<JobDetail, MappingError> {
    let mut seen = HashSet::with_capacity(wire.skills.len());
    let mut skills = Vec::with_capacity(wire.skills.len());

    for skill in wire.skills {
        if !seen.insert(skill.name.clone()) {
            return Err(MappingError::DuplicateSkill {
                job_id: wire.id,
                name: skill.name,
            });
        }
        skills.push(Skill {
            name: skill.name,
            image_url: skill.image_url,
        });
    }

    Ok(JobDetail {
        id: wire.id,
        title: wire.title,
        rating: wire.rating,
        location: wire.location,
        employment_type: wire.employment_type,
        package_per_annum: wire.package_per_annum,
        job_description: wire.job_description,
        company_logo_url: wire.company_logo_url,
        company_website_url: wire.company_website_url,
        skills,
        life_at_company: LifeAtCompany {
            description: wire.life_at_company.description,
            image_url: wire.life_at_company.image_url,
        },
    })
}

pub fn map_similar_job(wire: SimilarJobWire) -> SimilarJob {
    SimilarJob {
        id: wire.id,
        title: wire.title,
        rating: wire.rating,
        location: wire.location,
        employment_type: wire.employment_type,
        job_description: wire.job_description,
        company_logo_url: wire.company_logo_url,
    }
}
