//! Client-side holding area for search results.

mod store;

pub use store::{JobRef, JobStore, ResultSetId};
