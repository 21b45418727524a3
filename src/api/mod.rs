//! # API Module
//!
//! Client side of the job search backend.
//!
//! | Endpoint | Request | Response |
//! |----------|---------|----------|
//! | `POST /api/search` | [`SearchRequest`] | [`SearchResponse`] |
//! | `POST /api/summarize` | [`SummaryRequest`] | [`SummaryResponse`] |
//! | `GET /api/health` | none | [`HealthStatus`] |
//!
//! Non-2xx answers become an [`ApiError`]; see [`ApiError::from_status`].

pub mod client;
pub mod error;
pub mod types;

pub use client::{HttpJobBackend, JobBackend};
pub use error::{ApiError, Operation, RATE_LIMIT_MESSAGE};
pub use types::{
    ApplyLink, HealthStatus, JobHighlights, JobPosting, SearchRequest, SearchResponse,
    SummaryRequest, SummaryResponse,
};
