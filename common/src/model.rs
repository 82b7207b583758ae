use serde::{Deserialize, Serialize};

/// A skill required by a job posting.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LifeAtCompany {
    pub description: String,
    pub image_url: String,
}

/// The primary record shown on the job details screen.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub id: String,
    pub title: String,
    pub rating: f64,
    pub location: String,
    pub employment_type: String,
    pub package_per_annum: String,
    pub job_description: String,
    pub company_logo_url: String,
    pub company_website_url: String,
    /// Ordered as returned by the API; names are unique.
    pub skills: Vec<Skill>,
    pub life_at_company: LifeAtCompany,
}

/// Abbreviated job record recommended next to the primary one.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimilarJob {
    pub id: String,
    pub title: String,
    pub rating: f64,
    pub location: String,
    pub employment_type: String,
    pub job_description: String,
    pub company_logo_url: String,
}

/// Everything one successful fetch produces. Replaced as a whole, never merged.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobDetailsPayload {
    pub job_details: JobDetail,
    pub similar_jobs: Vec<SimilarJob>,
}
