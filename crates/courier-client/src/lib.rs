//! Techfix API client
//!
//! This crate provides the courier data model and a typed HTTP client for the
//! Techfix REST API, including response envelopes and client configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod types;

pub use client::{
    courier_list_request, ApiClient, ApiClientConfig, ApiError, ApiRequest, ApiResponse,
    CourierSource,
};
pub use types::{
    Amount, ApiEnvelope, CourierFilter, CourierId, CourierListResponse, CourierRecord,
    CourierStatus, ParseFilterError, SentTime, Technician,
};
