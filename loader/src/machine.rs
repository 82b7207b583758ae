//! The job details state machine.
//!
//! `JobDetailView` owns the only mutable state of the screen. It changes in
//! response to [`Event`]s and hands back a [`FetchTicket`] whenever a fetch has
//! to happen; running the ticket yields the `Completed` event to feed back in.
//!
//! ```text
//! Idle --Activate--> Loading --Completed(Ok)--> Success
//!                       |
//!                       +--Completed(Err)--> Failure --Retry--> Loading
//! ```

use common::JobDetailsPayload;
use tracing::{debug, warn};

use crate::client::JobDetailsSource;
use crate::credentials::{AuthToken, JobId};
use crate::error::LoadResult;
use crate::state::{LoadStatus, ViewState};

#[derive(Debug)]
pub enum Event {
    /// The screen was shown.
    Activate,
    /// The user pressed retry on the failure view.
    Retry,
    /// A fetch finished.
    Completed {
        generation: u64,
        result: LoadResult<JobDetailsPayload>,
    },
}

/// Permission to run exactly one fetch for one generation.
#[derive(Debug)]
#[must_use = "a ticket does nothing until it is run"]
pub struct FetchTicket {
    generation: u64,
    job_id: JobId,
    token: AuthToken,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn job_id(&self) -> &JobId {
        &self.job_id
    }

    pub async fn run<S>(self, source: &S) -> Event
    where
        S: JobDetailsSource + ?Sized,
    {
        let result = source.fetch(&self.job_id, &self.token).await;
        Event::Completed {
            generation: self.generation,
            result,
        }
    }
}

#[derive(Debug)]
pub struct JobDetailView {
    job_id: JobId,
    token: AuthToken,
    state: ViewState,
    generation: u64,
}

impl JobDetailView {
    pub fn new(job_id: JobId, token: AuthToken) -> Self {
        Self {
            job_id,
            token,
            state: ViewState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn status(&self) -> LoadStatus {
        self.state.status()
    }

    /// Number of fetches started so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Applies one event. Returns a ticket when the event starts a fetch.
    pub fn handle(&mut self, event: Event) -> Option<FetchTicket> {
        match (event, self.status()) {
            (Event::Activate, LoadStatus::Idle) | (Event::Retry, LoadStatus::Failure) => {
                Some(self.begin_fetch())
            }
            (Event::Completed { generation, result }, LoadStatus::Loading)
                if generation == self.generation =>
            {
                self.complete(result);
                None
            }
            (Event::Completed { generation, .. }, status) => {
                debug!(
                    generation,
                    current = self.generation,
                    ?status,
                    "dropping stale fetch result"
                );
                None
            }
            (event, status) => {
                debug!(?event, ?status, "event ignored in current state");
                None
            }
        }
    }

    fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        // Entering Loading drops whatever the previous fetch produced.
        self.state = ViewState::Loading;
        debug!(job_id = %self.job_id, generation = self.generation, "fetch started");

        FetchTicket {
            generation: self.generation,
            job_id: self.job_id.clone(),
            token: self.token.clone(),
        }
    }

    fn complete(&mut self, result: LoadResult<JobDetailsPayload>) {
        self.state = match result {
            Ok(payload) => ViewState::Success(payload),
            Err(err) => {
                warn!(
                    job_id = %self.job_id,
                    kind = err.kind(),
                    error = %err,
                    "failed to load job details"
                );
                ViewState::Failure
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::test_support::sample_payload;

    fn view() -> JobDetailView {
        JobDetailView::new(JobId::new("42").unwrap(), AuthToken::new("jwt"))
    }

    fn ok(generation: u64, title: &str) -> Event {
        Event::Completed {
            generation,
            result: Ok(sample_payload(title)),
        }
    }

    fn failed(generation: u64) -> Event {
        Event::Completed {
            generation,
            result: Err(LoadError::Http { status: 404 }),
        }
    }

    #[test]
    fn test_starts_idle() {
        let view = view();
        assert_eq!(view.status(), LoadStatus::Idle);
        assert_eq!(view.generation(), 0);
        assert!(view.state().job_details().is_none());
    }

    #[test]
    fn test_activate_enters_loading_before_fetch() {
        let mut view = view();
        let ticket = view.handle(Event::Activate).expect("activation starts a fetch");

        assert_eq!(view.status(), LoadStatus::Loading);
        assert_eq!(ticket.generation(), 1);
        assert_eq!(ticket.job_id().as_str(), "42");
    }

    #[test]
    fn test_success_stores_payload() {
        let mut view = view();
        let ticket = view.handle(Event::Activate).unwrap();
        view.handle(ok(ticket.generation(), "SDE"));

        assert_eq!(view.status(), LoadStatus::Success);
        assert_eq!(view.state().job_details().unwrap().title, "SDE");
    }

    #[test]
    fn test_failure_holds_no_data() {
        let mut view = view();
        let ticket = view.handle(Event::Activate).unwrap();
        view.handle(failed(ticket.generation()));

        assert_eq!(view.status(), LoadStatus::Failure);
        assert!(view.state().job_details().is_none());
        assert!(view.state().similar_jobs().is_empty());
    }

    #[test]
    fn test_retry_after_failure_refetches_and_replaces() {
        let mut view = view();
        let first = view.handle(Event::Activate).unwrap();
        view.handle(failed(first.generation()));

        let second = view.handle(Event::Retry).expect("retry starts a fetch");
        assert_eq!(view.status(), LoadStatus::Loading);
        assert_eq!(second.generation(), 2);
        assert_eq!(second.job_id(), first.job_id());

        view.handle(ok(second.generation(), "Backend Engineer"));
        assert_eq!(view.status(), LoadStatus::Success);
        assert_eq!(view.state().job_details().unwrap().title, "Backend Engineer");
    }

    #[test]
    fn test_activate_only_once() {
        let mut view = view();
        let _ticket = view.handle(Event::Activate).unwrap();
        assert!(view.handle(Event::Activate).is_none());
        assert_eq!(view.generation(), 1);
    }

    #[test]
    fn test_retry_ignored_outside_failure() {
        let mut view = view();
        assert!(view.handle(Event::Retry).is_none());
        assert_eq!(view.status(), LoadStatus::Idle);

        let ticket = view.handle(Event::Activate).unwrap();
        assert!(view.handle(Event::Retry).is_none());
        assert_eq!(view.generation(), 1);

        view.handle(ok(ticket.generation(), "SDE"));
        assert!(view.handle(Event::Retry).is_none());
        assert_eq!(view.status(), LoadStatus::Success);
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut view = view();
        let first = view.handle(Event::Activate).unwrap();
        view.handle(failed(first.generation()));
        let second = view.handle(Event::Retry).unwrap();

        // The first fetch answering late must not overwrite the second one.
        view.handle(ok(first.generation(), "Old"));
        assert_eq!(view.status(), LoadStatus::Loading);

        view.handle(ok(second.generation(), "New"));
        assert_eq!(view.state().job_details().unwrap().title, "New");

        view.handle(ok(second.generation(), "Duplicate"));
        assert_eq!(view.state().job_details().unwrap().title, "New");
    }
}
