//! Gateway client and feed controller
//!
//! [Client] talks to the news gateway. [FeedController] drives a paged
//! view on top of any [FeedTransport]: it keeps the current selector and
//! page, drops redacted articles and discards responses that arrive after
//! the reader has moved on.

pub mod controller;
pub mod error;
pub mod filter;
pub mod query;

use std::time::Duration;

use async_trait::async_trait;
use error::Error;
use tracing::{debug, warn};

// Re-exports
pub use controller::{FeedController, FeedState, FeedView, Outcome};
pub use headline_api::mdl::{Article, FeedPage, FeedResponse, Source};
pub use query::{FeedMode, FeedQuery};

/// Source of feed pages
#[async_trait]
pub trait FeedTransport: Send + Sync {
    /// Fetches one page
    async fn fetch_page(&self, query: &FeedQuery) -> Result<FeedPage, Error>;
}

/// Validates a query, fetches the page and drops the redacted articles
pub async fn load_page<T>(transport: &T, query: &FeedQuery) -> Result<FeedPage, Error>
where
    T: FeedTransport + ?Sized,
{
    query.validate()?;
    let page = transport.fetch_page(query).await?;
    Ok(filter::redact(page))
}

/// API client
#[derive(Debug, Clone)]
pub struct Client {
    /// Base URL
    pub url: String,
    /// Page size sent with every request
    pub page_size: u32,
    /// HTTP client
    http: reqwest::Client,
}

impl Client {
    /// Creates a new API client
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            page_size: query::DEFAULT_PAGE_SIZE,
            http: reqwest::Client::new(),
        }
    }

    /// Sets the page size
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Result<Self, Error> {
        self.http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }
}

impl Client {
    /// Searches all news
    pub async fn all_news(&self, q: &str, page: u32) -> Result<FeedPage, Error> {
        let query = FeedQuery::all_news(q)
            .page(page)
            .page_size(self.page_size);
        self.get_feed(&query).await
    }

    /// Gets the top headlines of a category
    pub async fn top_headlines(&self, category: &str, page: u32) -> Result<FeedPage, Error> {
        let query = FeedQuery::top_headlines(category)
            .page(page)
            .page_size(self.page_size);
        self.get_feed(&query).await
    }

    /// Gets the top headlines of a country
    pub async fn country_news(&self, iso: &str, page: u32) -> Result<FeedPage, Error> {
        let query = FeedQuery::country_news(iso)
            .page(page)
            .page_size(self.page_size);
        self.get_feed(&query).await
    }

    /// Gets a feed page
    pub async fn get_feed(&self, query: &FeedQuery) -> Result<FeedPage, Error> {
        query.validate()?;
        let url = format!("{}{}", self.url, query.path());
        debug!(%url, page = query.page, "feed request");

        let res = self
            .http
            .get(&url)
            .query(&query.params())
            .send()
            .await?;

        let status = res.status();
        match res.json::<FeedResponse>().await {
            Ok(FeedResponse {
                success: true,
                data: Some(page),
                ..
            }) if status.is_success() => Ok(page),
            Ok(envelope) => {
                warn!(status = status.as_u16(), message = ?envelope.message, "feed failure");
                Err(Error::from_envelope(status.as_u16(), envelope))
            }
            Err(err) if !status.is_success() => Err(Error::Upstream {
                status: Some(status.as_u16()),
                message: err.to_string(),
            }),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl FeedTransport for Client {
    async fn fetch_page(&self, query: &FeedQuery) -> Result<FeedPage, Error> {
        self.get_feed(query).await
    }
}
