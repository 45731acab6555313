// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod fetch;
pub mod store;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::fetch::{FeedFetcher, HttpFeedFetcher};
pub use crate::store::{FeedItem, FeedStore};
