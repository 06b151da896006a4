//! Courier list data-fetch controller
//!
//! [`CourierListController`] owns the screen's [`CourierListState`] and issues
//! reads against a [`CourierSource`]. Failures never escape: they are logged,
//! turned into a single [`Notice`], and leave the current list in place.
//!
//! State lives in a `tokio::sync::watch` channel; hosts call
//! [`CourierListController::subscribe`] and re-render on every change.

use crate::couriers::{CourierListEvent, CourierListState, FetchKind, RequestId};
use courier_client::{ApiError, CourierFilter, CourierRecord, CourierSource};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// Message shown whenever a courier fetch fails
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch couriers";

/// Why a courier fetch failed
///
/// Every variant is surfaced to the user the same way; the distinction only
/// matters for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// Transport, status, timeout or decoding failure
    #[error("Courier request failed: {0}")]
    Transport(#[from] ApiError),

    /// The API answered with `success: false`
    #[error("API rejected courier request: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),
}

/// A blocking, user-facing alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Alert title
    pub title: String,
    /// Alert body
    pub message: String,
}

impl Notice {
    /// The notice raised for any failed courier fetch
    pub fn fetch_failed() -> Self {
        Self {
            title: "Error".to_string(),
            message: FETCH_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Host capability for presenting alerts
pub trait NoticePresenter: Send + Sync {
    /// Present a notice to the user
    fn present(&self, notice: Notice);
}

/// Result of a single fetch, as seen by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The list was replaced
    Updated {
        /// Number of couriers now listed
        count: usize,
    },
    /// The fetch failed and a notice was presented
    Failed(FetchFailure),
    /// A newer request was issued before this one finished; nothing applied
    Superseded,
}

/// Drives the courier list state
#[derive(Clone)]
pub struct CourierListController {
    source: Arc<dyn CourierSource>,
    notices: Arc<dyn NoticePresenter>,
    state: Arc<watch::Sender<CourierListState>>,
}

impl CourierListController {
    /// Create a controller with the default filter
    pub fn new(source: Arc<dyn CourierSource>, notices: Arc<dyn NoticePresenter>) -> Self {
        Self::with_filter(source, notices, CourierFilter::default())
    }

    /// Create a controller starting on `filter`
    pub fn with_filter(
        source: Arc<dyn CourierSource>,
        notices: Arc<dyn NoticePresenter>,
        filter: CourierFilter,
    ) -> Self {
        let (state, _) = watch::channel(CourierListState::new(filter));
        Self {
            source,
            notices,
            state: Arc::new(state),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> CourierListState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<CourierListState> {
        self.state.subscribe()
    }

    /// Initial load when the screen mounts
    pub async fn mount(&self) -> FetchOutcome {
        let (request, filter) = self.begin(FetchKind::Load);
        self.run(request, filter, FetchKind::Load).await
    }

    /// Select a filter and fetch for it
    ///
    /// Returns `None` without fetching when `filter` is already selected.
    pub async fn set_filter(&self, filter: CourierFilter) -> Option<FetchOutcome> {
        let mut issued = None;
        self.state.send_if_modified(|state| {
            if state.filter == filter {
                return false;
            }
            let request = state.latest_request.next();
            *state = state
                .apply(CourierListEvent::FilterChanged(filter))
                .apply(CourierListEvent::FetchStarted { request });
            issued = Some(request);
            true
        });

        let request = issued?;
        Some(self.run(request, filter, FetchKind::Load).await)
    }

    /// Pull-to-refresh with the current filter
    pub async fn refresh(&self) -> FetchOutcome {
        let (request, filter) = self.begin(FetchKind::Refresh);
        self.run(request, filter, FetchKind::Refresh).await
    }

    /// Issue a new request id and mark it in flight
    fn begin(&self, kind: FetchKind) -> (RequestId, CourierFilter) {
        let mut issued = (RequestId::default(), CourierFilter::default());
        self.state.send_modify(|state| {
            let request = state.latest_request.next();
            let event = match kind {
                FetchKind::Load => CourierListEvent::FetchStarted { request },
                FetchKind::Refresh => CourierListEvent::RefreshStarted { request },
            };
            *state = state.apply(event);
            issued = (request, state.filter);
        });
        issued
    }

    /// Apply a completion event; returns whether `request` was still current
    fn complete(&self, request: RequestId, event: CourierListEvent) -> bool {
        let mut current = false;
        self.state.send_modify(|state| {
            current = state.is_current(request);
            *state = state.apply(event);
        });
        current
    }

    async fn run(&self, request: RequestId, filter: CourierFilter, kind: FetchKind) -> FetchOutcome {
        let mut in_flight = InFlight::new(self, request);

        tracing::debug!(%request, %filter, ?kind, "Fetching couriers");

        let outcome = match self.read(filter).await {
            Ok(couriers) => {
                let count = couriers.len();
                if self.complete(request, CourierListEvent::FetchSucceeded { request, couriers }) {
                    tracing::debug!(%request, count, "Couriers updated");
                    FetchOutcome::Updated { count }
                } else {
                    tracing::debug!(%request, "Discarding superseded courier response");
                    FetchOutcome::Superseded
                }
            }
            Err(failure) => {
                tracing::error!(%request, %filter, "Error fetching couriers: {}", failure);
                if self.complete(request, CourierListEvent::FetchFailed { request }) {
                    self.notices.present(Notice::fetch_failed());
                    FetchOutcome::Failed(failure)
                } else {
                    FetchOutcome::Superseded
                }
            }
        };

        if kind == FetchKind::Refresh {
            self.complete(request, CourierListEvent::RefreshEnded { request });
        }

        in_flight.finish();
        outcome
    }

    async fn read(&self, filter: CourierFilter) -> Result<Vec<CourierRecord>, FetchFailure> {
        let envelope = self.source.list_couriers(filter).await?;
        if envelope.success {
            Ok(envelope.data.unwrap_or_default())
        } else {
            Err(FetchFailure::Rejected(envelope.message))
        }
    }
}

/// Releases the busy flags if a fetch future is dropped mid-flight
struct InFlight<'a> {
    controller: &'a CourierListController,
    request: RequestId,
    finished: bool,
}

impl<'a> InFlight<'a> {
    fn new(controller: &'a CourierListController, request: RequestId) -> Self {
        Self {
            controller,
            request,
            finished: false,
        }
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!(request = %self.request, "Courier fetch dropped before completion");
            self.controller.complete(
                self.request,
                CourierListEvent::FetchAbandoned {
                    request: self.request,
                },
            );
        }
    }
}
