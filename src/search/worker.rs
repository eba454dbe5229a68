//! Background execution of catalog requests
//!
//! The UI loop must keep drawing and handling keys while a request is
//! outstanding, so every request runs on its own short-lived thread and
//! reports back over a channel. The loop drains that channel between frames.

use super::controller::{SearchOutcome, SearchTicket};
use crate::catalog::CatalogSource;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// Message posted by a background request
#[derive(Debug)]
pub enum WorkerEvent {
    /// A search finished
    Search(SearchOutcome),
    /// A cover probe finished
    CoverProbe { cover_id: i64, available: bool },
}

/// Runs catalog requests off the UI thread
pub struct SearchWorker {
    source: Arc<dyn CatalogSource>,
    tx: Sender<WorkerEvent>,
    rx: Receiver<WorkerEvent>,
}

impl SearchWorker {
    /// Create a worker for the given source
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { source, tx, rx }
    }

    /// Run a search in the background
    pub fn dispatch(&self, ticket: SearchTicket) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let outcome = SearchOutcome::run(source.as_ref(), &ticket);
            // The receiver is gone only when the UI has exited
            let _ = tx.send(WorkerEvent::Search(outcome));
        });
    }

    /// Check a cover URL in the background
    pub fn probe_cover(&self, cover_id: i64, url: String) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let available = match source.probe_cover(&url) {
                Ok(()) => true,
                Err(e) => {
                    log::info!("Cover {url} unavailable: {e}");
                    false
                }
            };
            let _ = tx.send(WorkerEvent::CoverProbe {
                cover_id,
                available,
            });
        });
    }

    /// Next finished request, if one is ready
    #[must_use]
    pub fn try_next(&self) -> Option<WorkerEvent> {
        self.rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next finished request
    #[must_use]
    pub fn next_timeout(&self, timeout: Duration) -> Option<WorkerEvent> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock::{MockCatalog, MockResponse};
    use crate::catalog::BookRecord;
    use crate::search::SearchController;

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn test_dispatch_round_trip() {
        let mock = Arc::new(MockCatalog::new(vec![MockResponse::Records(vec![
            BookRecord::titled("Dune"),
        ])]));
        let worker = SearchWorker::new(mock.clone());
        let mut controller = SearchController::new();
        controller.set_query_text("dune");

        worker.dispatch(controller.submit_search().unwrap());

        match worker.next_timeout(WAIT) {
            Some(WorkerEvent::Search(outcome)) => assert!(controller.complete(outcome)),
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(controller.view().results.len(), 1);
        assert_eq!(mock.requests()[0].query, "dune");
    }

    #[test]
    fn test_cover_probe_reports_broken() {
        let mock = MockCatalog::default().with_broken_cover("http://c/1-L.jpg");
        let worker = SearchWorker::new(Arc::new(mock));

        worker.probe_cover(1, "http://c/1-L.jpg".into());
        match worker.next_timeout(WAIT) {
            Some(WorkerEvent::CoverProbe {
                cover_id,
                available,
            }) => {
                assert_eq!(cover_id, 1);
                assert!(!available);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_try_next_empty() {
        let worker = SearchWorker::new(Arc::new(MockCatalog::default()));
        assert!(worker.try_next().is_none());
    }
}
