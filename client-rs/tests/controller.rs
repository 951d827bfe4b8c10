//! Feed controller tests, end to end through the gateway

use headline_client::{
    error::FAILURE_MESSAGE, FeedController, FeedMode, FeedQuery, FeedState, Outcome,
};

use crate::common::setup;

mod common;

#[tokio::test]
async fn test_paging_through_gateway() {
    let client = setup(38511).await;
    let ctl = FeedController::new(client, FeedQuery::all_news("rust").page_size(12));

    assert_eq!(ctl.load().await, Outcome::Applied);
    let view = ctl.view();
    assert_eq!(view.page_indicator(), "1 of 2");
    // the redacted article is dropped, the total is not recomputed
    assert_eq!(view.articles().len(), 11);
    assert_eq!(view.total_results, Some(24));
    assert!(view.articles().iter().all(|a| a.title != "[Removed]"));

    assert_eq!(ctl.next().await, Some(Outcome::Applied));
    let view = ctl.view();
    assert_eq!(view.page_indicator(), "2 of 2");
    let titles = view
        .articles()
        .iter()
        .map(|a| a.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(titles.first(), Some(&"rust 13"));
    assert_eq!(titles.last(), Some(&"rust 24"));
    assert!(!view.has_next());
    assert_eq!(ctl.next().await, None);
}

#[tokio::test]
async fn test_single_page_through_gateway() {
    let client = setup(38512).await;
    let ctl = FeedController::new(client, FeedQuery::top_headlines("business"));

    ctl.load().await;
    let view = ctl.view();
    assert_eq!(view.page_indicator(), "1 of 1");
    assert!(!view.has_next());
    assert!(!view.has_prev());
}

#[tokio::test]
async fn test_failure_through_gateway() {
    let client = setup(38513).await;
    let ctl = FeedController::new(client, FeedQuery::top_headlines("science"));
    ctl.load().await;

    let outcome = ctl
        .select(FeedMode::TopHeadlines {
            category: "broken".to_string(),
        })
        .await;
    assert_eq!(outcome, Outcome::Applied);
    let view = ctl.view();
    assert_eq!(view.state, FeedState::Errored(FAILURE_MESSAGE.to_string()));
    assert!(view.articles().is_empty());
}

#[tokio::test]
async fn test_empty_country() {
    let client = setup(38514).await;
    let ctl = FeedController::new(client, FeedQuery::country_news("zz"));
    ctl.load().await;

    let view = ctl.view();
    assert!(matches!(view.state, FeedState::Loaded(_)));
    assert!(view.articles().is_empty());
    assert_eq!(view.page_indicator(), "1 of 1");
    assert!(!view.has_next());
}
