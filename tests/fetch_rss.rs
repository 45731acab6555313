// tests/fetch_rss.rs
//
// Parser coverage against a realistic RSS 2.0 fixture, plus the offline
// failure path of the HTTP fetcher.

use rss_aggregator::fetch::{parse_rss, FeedFetcher, HttpFeedFetcher};

const SAMPLE_XML: &str = include_str!("fixtures/sample_rss.xml");

#[test]
fn sample_fixture_parses_all_items_in_document_order() {
    let items = parse_rss(SAMPLE_XML).expect("fixture should parse");
    assert_eq!(items.len(), 3, "fixture has three items");

    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Rust 1.80 released",
            "Async traits in practice",
            "Link roundup"
        ]
    );
}

#[test]
fn sample_fixture_maps_fields_and_defaults() {
    let items = parse_rss(SAMPLE_XML).expect("fixture should parse");

    // First item carries every field, including the enclosure image.
    assert_eq!(items[0].link, "https://example.com/posts/rust-1-80");
    assert_eq!(items[0].image, "https://example.com/img/rust-1-80.png");
    assert!(
        items[0].description.contains("Highlights"),
        "description should survive with markup intact"
    );

    // Second item has no enclosure: image is empty, not an error.
    assert_eq!(items[1].image, "");

    // Third item has no description at all.
    assert_eq!(items[2].description, "");
    assert_eq!(items[2].image, "");
}

#[tokio::test]
async fn unsupported_scheme_is_a_fetch_failure() {
    let fetcher = HttpFeedFetcher::new();
    let result = fetcher.fetch("bad://address").await;
    assert!(result.is_err(), "bad scheme must yield Err, not items");
}
