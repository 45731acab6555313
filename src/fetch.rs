use anyhow::{Context, Result};
use async_trait::async_trait;
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::store::FeedItem;

/// Retrieval-and-parse capability for one feed address.
///
/// Failure is an `Err` value, distinguishable from a source that parses to
/// zero items; the aggregation handler drops failures silently and keeps
/// going, so nothing here should panic on bad input.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<FeedItem>>;
}

// Minimal RSS 2.0 document shape; everything beyond the per-item fields we
// normalize is ignored.
#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}
#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}
#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    enclosure: Option<Enclosure>,
}
#[derive(Debug, Deserialize)]
struct Enclosure {
    #[serde(rename = "@url")]
    url: Option<String>,
}

/// Parse an RSS document into normalized items, preserving document order.
/// Absent fields map to empty strings; a channel with no items is fine.
pub fn parse_rss(body: &str) -> Result<Vec<FeedItem>> {
    let rss: Rss = from_str(body).context("parsing rss feed xml")?;

    let items = rss
        .channel
        .item
        .into_iter()
        .map(|it| FeedItem {
            title: it.title.unwrap_or_default(),
            link: it.link.unwrap_or_default(),
            description: it.description.unwrap_or_default(),
            image: it.enclosure.and_then(|e| e.url).unwrap_or_default(),
        })
        .collect();

    Ok(items)
}

/// Production fetcher: GET the address and parse the body as RSS.
/// No retries; timeouts are whatever reqwest defaults to.
pub struct HttpFeedFetcher {
    client: reqwest::Client,
}

impl HttpFeedFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<FeedItem>> {
        let body = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("feed http get {url}"))?
            .text()
            .await
            .context("feed http .text()")?;
        parse_rss(&body)
    }
}
