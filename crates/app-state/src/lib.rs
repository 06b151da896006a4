//! Application state management for the courier screens
//!
//! This crate provides the courier list state record, its reducer, and the
//! controller that fetches couriers and surfaces failures as user notices.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controller;
pub mod couriers;

pub use controller::{
    CourierListController, FetchFailure, FetchOutcome, Notice, NoticePresenter,
    FETCH_FAILED_MESSAGE,
};
pub use couriers::{CourierListEvent, CourierListState, FetchKind, RequestId};
