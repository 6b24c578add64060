//! HTTP client for the candidate search backend

pub mod api;
pub mod types;
