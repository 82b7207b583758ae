//! Response shapes of `GET /login/{id}`, keyed exactly as the API sends them.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct JobDetailsResponse {
    pub job_details: JobDetailsWire,
    pub similar_jobs: Vec<SimilarJobWire>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JobDetailsWire {
    pub id: String,
    pub title: String,
    pub rating: f64,
    pub location: String,
    pub employment_type: String,
    pub package_per_annum: String,
    pub job_description: String,
    pub company_logo_url: String,
    pub company_website_url: String,
    pub skills: Vec<SkillWire>,
    pub life_at_company: LifeAtCompanyWire,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SkillWire {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LifeAtCompanyWire {
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimilarJobWire {
    pub id: String,
    pub title: String,
    pub rating: f64,
    pub location: String,
    pub employment_type: String,
    pub job_description: String,
    pub company_logo_url: String,
}
