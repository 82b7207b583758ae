use common::{JobDetail, JobDetailsPayload, LifeAtCompany, SimilarJob, Skill};

pub(crate) fn sample_payload(title: &str) -> JobDetailsPayload {
    JobDetailsPayload {
        job_details: JobDetail {
            id: "42".to_string(),
            title: title.to_string(),
            rating: 4.0,
            location: "Hyderabad".to_string(),
            employment_type: "Full Time".to_string(),
            package_per_annum: "14 LPA".to_string(),
            job_description: "Own the payments backend".to_string(),
            company_logo_url: "https://example.com/logo.png".to_string(),
            company_website_url: "https://example.com".to_string(),
            skills: vec![
                Skill {
                    name: "Rust".to_string(),
                    image_url: "https://example.com/rust.png".to_string(),
                },
                Skill {
                    name: "SQL".to_string(),
                    image_url: "https://example.com/sql.png".to_string(),
                },
            ],
            life_at_company: LifeAtCompany {
                description: "Small teams, big problems".to_string(),
                image_url: "https://example.com/office.png".to_string(),
            },
        },
        similar_jobs: vec![SimilarJob {
            id: "7".to_string(),
            title: "Platform Engineer".to_string(),
            rating: 3.8,
            location: "Remote".to_string(),
            employment_type: "Part Time".to_string(),
            job_description: "Keep the lights on".to_string(),
            company_logo_url: "https://example.com/other.png".to_string(),
        }],
    }
}
