//! REST types and the authenticated HTTP client.

pub mod api;
pub mod error;
pub mod types;
