//! NexusLink backend API module.
//!
//! Contains the HTTP client and data models for the read-aggregation API.

pub mod client;
pub mod models;

pub use client::{BackendClient, FetchError};
pub use models::{CandidateRecord, IdeaRecord};
