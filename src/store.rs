// src/store.rs
// Process-lifetime accumulation of fetched feed items.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// One normalized feed entry. No identity field; duplicates are allowed
/// and simply appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub image: String,
}

/// Append-only collection of every item successfully fetched since startup.
/// Created empty, grows until process exit, never pruned or persisted.
///
/// The handler is the sole owner of the mutating path; inject an `Arc` of
/// this into the router state rather than reaching for a global.
#[derive(Debug, Default)]
pub struct FeedStore {
    items: Mutex<Vec<FeedItem>>,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one request's entire contribution and serialize the full
    /// accumulated state, both under a single lock acquisition. Concurrent
    /// requests therefore never observe (or produce) a partial append, and
    /// the returned body is exactly the state at the moment of this append.
    pub fn append_and_serialize(&self, batch: Vec<FeedItem>) -> serde_json::Result<Vec<u8>> {
        let mut items = self.items.lock().expect("feed store mutex poisoned");
        items.extend(batch);
        serde_json::to_vec(&*items)
    }

    /// Point-in-time copy of the accumulated items.
    pub fn snapshot(&self) -> Vec<FeedItem> {
        self.items.lock().expect("feed store mutex poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.items.lock().expect("feed store mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
