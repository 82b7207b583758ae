use tokio::sync::watch;

use crate::client::JobDetailsSource;
use crate::credentials::{AuthToken, JobId};
use crate::machine::{Event, JobDetailView};
use crate::state::{LoadStatus, ViewState};

/// Drives a [`JobDetailView`] against a [`JobDetailsSource`] and publishes
/// every state change to subscribers.
pub struct JobDetailController<S> {
    view: JobDetailView,
    source: S,
    publisher: watch::Sender<ViewState>,
}

impl<S: JobDetailsSource> JobDetailController<S> {
    pub fn new(source: S, job_id: JobId, token: AuthToken) -> Self {
        let (publisher, _) = watch::channel(ViewState::Idle);
        Self {
            view: JobDetailView::new(job_id, token),
            source,
            publisher,
        }
    }

    /// Receives `Loading` as soon as a fetch starts and the outcome when it ends.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.publisher.subscribe()
    }

    pub fn state(&self) -> &ViewState {
        self.view.state()
    }

    pub fn status(&self) -> LoadStatus {
        self.view.status()
    }

    /// Initial fetch. Does nothing unless the view is still idle.
    pub async fn load(&mut self) -> LoadStatus {
        self.dispatch(Event::Activate).await
    }

    /// Fetches again with the same job id and token. Only valid after a failure.
    pub async fn retry(&mut self) -> LoadStatus {
        self.dispatch(Event::Retry).await
    }

    async fn dispatch(&mut self, event: Event) -> LoadStatus {
        if let Some(ticket) = self.view.handle(event) {
            self.publish();
            let completed = ticket.run(&self.source).await;
            self.view.handle(completed);
            self.publish();
        }
        self.view.status()
    }

    fn publish(&self) {
        self.publisher.send_replace(self.view.state().clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LoadError, LoadResult};
    use crate::test_support::sample_payload;
    use async_trait::async_trait;
    use common::JobDetailsPayload;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    struct ScriptedSource {
        responses: Mutex<VecDeque<LoadResult<JobDetailsPayload>>>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedSource {
        fn new(responses: Vec<LoadResult<JobDetailsPayload>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::default(),
            }
        }
    }

    #[async_trait]
    impl JobDetailsSource for Arc<ScriptedSource> {
        async fn fetch(&self, job_id: &JobId, token: &AuthToken) -> LoadResult<JobDetailsPayload> {
            self.calls
                .lock()
                .unwrap()
                .push((job_id.to_string(), token.expose().to_string()));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(LoadError::Network("script exhausted".to_string())))
        }
    }

    struct GatedSource {
        gate: Arc<Notify>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl JobDetailsSource for GatedSource {
        async fn fetch(&self, _: &JobId, _: &AuthToken) -> LoadResult<JobDetailsPayload> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(sample_payload("SDE"))
        }
    }

    fn controller<S: JobDetailsSource>(source: S) -> JobDetailController<S> {
        JobDetailController::new(source, JobId::new("42").unwrap(), AuthToken::new("jwt"))
    }

    #[tokio::test]
    async fn test_loading_visible_while_fetch_outstanding() {
        let gate = Arc::new(Notify::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let mut controller = controller(GatedSource {
            gate: gate.clone(),
            calls: calls.clone(),
        });
        let mut updates = controller.subscribe();

        let task = tokio::spawn(async move { controller.load().await });

        updates.changed().await.unwrap();
        assert_eq!(updates.borrow_and_update().status(), LoadStatus::Loading);

        gate.notify_one();
        assert_eq!(task.await.unwrap(), LoadStatus::Success);
        assert_eq!(updates.borrow().status(), LoadStatus::Success);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_recovers_with_same_arguments() {
        let source = Arc::new(ScriptedSource::new(vec![
            Err(LoadError::Http { status: 404 }),
            Ok(sample_payload("SDE")),
        ]));
        let mut controller = controller(source.clone());

        assert_eq!(controller.load().await, LoadStatus::Failure);
        assert!(controller.state().job_details().is_none());

        assert_eq!(controller.retry().await, LoadStatus::Success);
        assert_eq!(controller.state().job_details().unwrap().title, "SDE");

        let calls = source.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(calls[0], ("42".to_string(), "jwt".to_string()));
    }

    #[tokio::test]
    async fn test_one_fetch_per_invocation() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(sample_payload("SDE"))]));
        let mut controller = controller(source.clone());

        assert_eq!(controller.load().await, LoadStatus::Success);
        // Already loaded: neither a second load nor a retry may hit the network.
        assert_eq!(controller.load().await, LoadStatus::Success);
        assert_eq!(controller.retry().await, LoadStatus::Success);

        assert_eq!(source.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_after_failure_stays_empty() {
        let source = Arc::new(ScriptedSource::new(vec![
            Err(LoadError::Network("connection reset".to_string())),
            Err(LoadError::Http { status: 500 }),
        ]));
        let mut controller = controller(source);
        let updates = controller.subscribe();

        controller.load().await;
        assert_eq!(controller.retry().await, LoadStatus::Failure);
        assert_eq!(*updates.borrow(), ViewState::Failure);
    }
}
