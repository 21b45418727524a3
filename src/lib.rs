//! jobscout - search job postings from the terminal and summarize them with AI
//!
//! This library holds the backend client, the result-set store and the
//! terminal UI state and rendering used by the `jobscout` binary.

pub mod api;
pub mod jobs;
pub mod ui;
