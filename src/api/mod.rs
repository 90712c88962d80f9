//! HTTP client and entity models for the campaign platform REST API.

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiError};
