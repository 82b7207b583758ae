//! Terminal rendering of the job details screen.
//!
//! Each function draws exactly the branch picked by [`select`] and nothing
//! else; none of them can start a fetch.

use std::io::{self, Write};

use common::{JobDetail, SimilarJob};
use loader::{LoadStatus, RenderBranch, SimilarJobCard, ViewState, select};
use serde::Serialize;

pub const HEADER: &str = "💼 Jobby";
pub const FAILURE_IMAGE_URL: &str = "https://assets.ccbp.in/frontend/react-js/failure-img.png";
pub const FAILURE_HEADING: &str = "Oops! Something Went Wrong";
pub const FAILURE_MESSAGE: &str = "We cannot seem to find the page you are looking for.";
pub const LOADING_MESSAGE: &str = "⏳ Loading job details...";

const RULE: &str = "------------------------------------------------------------";

/// Machine-readable form of one state, written as a single JSON line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    status: LoadStatus,
    job_details: Option<&'a JobDetail>,
    similar_jobs: &'a [SimilarJob],
}

pub fn render_json<W: Write>(out: &mut W, state: &ViewState) -> io::Result<()> {
    let snapshot = Snapshot {
        status: state.status(),
        job_details: state.job_details(),
        similar_jobs: state.similar_jobs(),
    };
    serde_json::to_writer(&mut *out, &snapshot)?;
    writeln!(out)
}

pub fn render_text<W: Write>(out: &mut W, state: &ViewState) -> io::Result<()> {
    let branch = select(state);
    if branch == RenderBranch::Idle {
        return Ok(());
    }

    writeln!(out, "{}", HEADER)?;
    writeln!(out, "{}", RULE)?;

    match branch {
        RenderBranch::Idle => Ok(()),
        RenderBranch::Loading => writeln!(out, "{}", LOADING_MESSAGE),
        RenderBranch::Failure => render_failure(out),
        RenderBranch::Success { job, .. } => {
            render_job(out, job)?;
            render_similar_jobs(out, &branch.similar_job_cards())
        }
    }
}

fn render_job<W: Write>(out: &mut W, job: &JobDetail) -> io::Result<()> {
    writeln!(out, "{}  ⭐ {}", job.title, job.rating)?;
    writeln!(
        out,
        "📍 {} · {} · {}",
        job.location, job.employment_type, job.package_per_annum
    )?;
    writeln!(out, "Logo: {}", job.company_logo_url)?;
    writeln!(out)?;

    writeln!(out, "Description (visit: {})", job.company_website_url)?;
    writeln!(out, "{}", job.job_description)?;
    writeln!(out)?;

    writeln!(out, "Skills")?;
    for skill in &job.skills {
        writeln!(out, "  - {} ({})", skill.name, skill.image_url)?;
    }
    writeln!(out)?;

    writeln!(out, "Life at Company")?;
    writeln!(out, "{}", job.life_at_company.description)?;
    writeln!(out, "Image: {}", job.life_at_company.image_url)?;
    writeln!(out)
}

fn render_similar_jobs<W: Write>(out: &mut W, cards: &[SimilarJobCard<'_>]) -> io::Result<()> {
    writeln!(out, "Similar Jobs")?;
    if cards.is_empty() {
        return writeln!(out, "  (none)");
    }

    for card in cards {
        writeln!(out, "  - {}  ⭐ {}", card.job.title, card.job.rating)?;
        writeln!(out, "    📍 {} · {}", card.job.location, card.employment_type)?;
        writeln!(out, "    {}", card.job.job_description)?;
    }
    Ok(())
}

fn render_failure<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "[{}]", FAILURE_IMAGE_URL)?;
    writeln!(out, "{}", FAILURE_HEADING)?;
    writeln!(out, "{}", FAILURE_MESSAGE)
}
