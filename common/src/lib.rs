//! Shared job-details types
//!
//! View models rendered by the job details screen, the snake_case wire
//! shapes returned by the jobs API, and the pure transform between them.

mod mapping;
mod model;
mod wire;

pub use mapping::{MappingError, map_job_detail, map_response, map_similar_job, parse_response};
pub use model::{JobDetail, JobDetailsPayload, LifeAtCompany, SimilarJob, Skill};
pub use wire::{JobDetailsResponse, JobDetailsWire, LifeAtCompanyWire, SimilarJobWire, SkillWire};
