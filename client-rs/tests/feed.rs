//! Gateway client tests

use std::time::Duration;

use headline_client::{error::Error, FeedQuery};

use crate::common::setup;

mod common;

#[tokio::test]
async fn test_all_news() {
    let client = setup(38501).await.page_size(12);

    let page = client.all_news("", 2).await.unwrap();
    assert_eq!(page.total_results, 24);
    assert_eq!(page.articles.len(), 12);
    // the default query is used for a blank search
    assert_eq!(page.articles[0].title, "news 13");
}

#[tokio::test]
async fn test_top_headlines_and_country() {
    let client = setup(38502).await;

    let page = client.top_headlines("science", 1).await.unwrap();
    assert_eq!(page.total_results, 2);
    assert_eq!(page.articles[1].title, "science 2");

    let page = client.country_news("GB", 1).await.unwrap();
    assert_eq!(page.total_results, 5);
    assert_eq!(page.articles[0].title, "gb 1");

    let page = client.country_news("zz", 1).await.unwrap();
    assert_eq!(page.total_results, 0);
    assert!(page.articles.is_empty());
}

#[tokio::test]
async fn test_failure_envelope() {
    let client = setup(38503).await;

    let err = client.top_headlines("broken", 1).await.unwrap_err();
    match err {
        Error::Upstream { status, message } => {
            assert_eq!(status, Some(500));
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_query_is_not_sent() {
    // nothing listens there, an invalid query must fail before connecting
    let client = headline_client::Client::new("http://127.0.0.1:9");
    let err = client
        .get_feed(&FeedQuery::country_news("usa"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidQuery { .. }));
}

#[tokio::test]
async fn test_unreachable_gateway() {
    let client = headline_client::Client::new("http://127.0.0.1:9")
        .timeout(Duration::from_secs(2))
        .unwrap();
    let err = client.all_news("rust", 1).await.unwrap_err();
    assert!(matches!(err, Error::Network { .. }));
}
