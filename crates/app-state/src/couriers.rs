//! Courier list state
//!
//! The screen state is an immutable record advanced by a pure reducer
//! ([`CourierListState::apply`]). Every fetch is tagged with a [`RequestId`];
//! completion events for anything but the latest issued request are ignored,
//! so a slow response for an old filter can never overwrite newer data.

use courier_client::{CourierFilter, CourierRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonic fetch sequence number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl RequestId {
    /// The id following this one
    pub fn next(self) -> Self {
        RequestId(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a fetch was triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchKind {
    /// Mount or filter change; shows the spinner
    Load,
    /// Pull-to-refresh; keeps the list visible
    Refresh,
}

/// Events that advance [`CourierListState`]
#[derive(Debug, Clone, PartialEq)]
pub enum CourierListEvent {
    /// User selected a filter
    FilterChanged(CourierFilter),
    /// A load fetch was issued
    FetchStarted {
        /// Request sequence number
        request: RequestId,
    },
    /// A pull-to-refresh fetch was issued
    RefreshStarted {
        /// Request sequence number
        request: RequestId,
    },
    /// A fetch returned a successful envelope
    FetchSucceeded {
        /// Request sequence number
        request: RequestId,
        /// New list contents
        couriers: Vec<CourierRecord>,
    },
    /// A fetch failed or the API reported `success: false`
    FetchFailed {
        /// Request sequence number
        request: RequestId,
    },
    /// A pull-to-refresh fetch finished, on either path
    RefreshEnded {
        /// Request sequence number
        request: RequestId,
    },
    /// A fetch was dropped before completing
    FetchAbandoned {
        /// Request sequence number
        request: RequestId,
    },
}

/// Immutable courier list screen state
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CourierListState {
    /// A load fetch is in flight
    pub loading: bool,
    /// A pull-to-refresh fetch is in flight
    pub refreshing: bool,
    /// Last successfully fetched list
    pub couriers: Vec<CourierRecord>,
    /// Selected filter
    pub filter: CourierFilter,
    /// Most recently issued request
    pub latest_request: RequestId,
}

impl CourierListState {
    /// Initial state for a freshly mounted screen
    pub fn new(filter: CourierFilter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    /// Whether `request` is the latest issued request
    pub fn is_current(&self, request: RequestId) -> bool {
        self.latest_request == request
    }

    /// Whether any fetch for the latest request is in flight
    pub fn is_busy(&self) -> bool {
        self.loading || self.refreshing
    }

    /// Whether the empty-state placeholder should be shown
    pub fn shows_empty_placeholder(&self) -> bool {
        !self.loading && self.couriers.is_empty()
    }

    /// Apply an event, producing the next state
    pub fn apply(&self, event: CourierListEvent) -> Self {
        let mut next = self.clone();

        match event {
            CourierListEvent::FilterChanged(filter) => {
                next.filter = filter;
            }
            CourierListEvent::FetchStarted { request } => {
                next.latest_request = request;
                next.loading = true;
                next.refreshing = false;
            }
            CourierListEvent::RefreshStarted { request } => {
                next.latest_request = request;
                next.refreshing = true;
                next.loading = false;
            }
            CourierListEvent::FetchSucceeded { request, couriers } => {
                if self.is_current(request) {
                    next.couriers = couriers;
                    next.loading = false;
                }
            }
            CourierListEvent::FetchFailed { request } => {
                if self.is_current(request) {
                    next.loading = false;
                }
            }
            CourierListEvent::RefreshEnded { request } => {
                if self.is_current(request) {
                    next.refreshing = false;
                }
            }
            CourierListEvent::FetchAbandoned { request } => {
                if self.is_current(request) {
                    next.loading = false;
                    next.refreshing = false;
                }
            }
        }

        next
    }
}
