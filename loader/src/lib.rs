//! Job details loader
//!
//! Fetches one job posting plus its similar jobs from the jobs API and keeps
//! the screen's load state as an explicit state machine:
//! `Idle -> Loading -> Success | Failure`, with retry from `Failure`.

pub mod client;
pub mod config;
pub mod controller;
pub mod credentials;
pub mod error;
pub mod machine;
pub mod selector;
pub mod state;

#[cfg(test)]
mod test_support;

pub use client::{HttpJobDetailsClient, JobDetailsSource};
pub use config::LoaderConfig;
pub use controller::JobDetailController;
pub use credentials::{AuthToken, JobId};
pub use error::{LoadError, LoadResult};
pub use machine::{Event, FetchTicket, JobDetailView};
pub use selector::{RenderBranch, SimilarJobCard, select};
pub use state::{LoadStatus, ViewState};
