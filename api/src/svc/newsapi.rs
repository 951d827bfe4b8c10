//! NewsAPI provider

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, trace};

use crate::{
    config::ProviderConfig,
    error::Error,
    mdl::{Article, FeedPage},
};

use super::news::{FeedKind, FeedRequest, NewsProvider};

/// Header carrying the API key
const API_KEY_HEADER: &str = "X-Api-Key";

/// NewsAPI client
#[derive(Debug, Clone)]
pub struct NewsApiProvider {
    /// HTTP client (pooled)
    http: reqwest::Client,
    /// Base URL, without trailing slash
    base_url: String,
    /// API key
    key: String,
}

impl NewsApiProvider {
    /// Creates a new provider from the configuration
    pub fn new(cfg: &ProviderConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(cfg.timeout())
            // NB: NewsAPI rejects requests without a user agent
            .user_agent(concat!("headline-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| {
                Error::Internal("cannot build HTTP client".to_string(), Some(err.to_string()))
            })?;

        Ok(Self {
            http,
            base_url: cfg.url.trim_end_matches('/').to_string(),
            key: cfg.key.clone(),
        })
    }

    /// Returns the upstream URL and query for a request
    fn target(&self, req: &FeedRequest) -> (String, Vec<(&'static str, String)>) {
        let (path, selector) = match &req.kind {
            FeedKind::AllNews { q } => ("v2/everything", ("q", q.clone())),
            FeedKind::TopHeadlines { category } => {
                ("v2/top-headlines", ("category", category.clone()))
            }
            FeedKind::Country { iso } => ("v2/top-headlines", ("country", iso.clone())),
        };
        let query = vec![
            selector,
            ("page", req.page.to_string()),
            ("pageSize", req.page_size.to_string()),
        ];
        (format!("{}/{path}", self.base_url), query)
    }
}

/// Provider response body
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum ProviderBody {
    Ok {
        #[serde(rename = "totalResults", default)]
        total_results: u64,
        #[serde(default)]
        articles: Vec<Article>,
    },
    Error {
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
}

#[async_trait]
impl NewsProvider for NewsApiProvider {
    async fn fetch(&self, req: &FeedRequest) -> Result<FeedPage, Error> {
        let (url, query) = self.target(req);
        debug!(%url, ?query, "upstream request");

        let res = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.key)
            .query(&query)
            .send()
            .await?;

        let status = res.status();
        trace!(%status, "upstream response");

        if status.is_success() {
            return match res.json::<ProviderBody>().await? {
                ProviderBody::Ok {
                    total_results,
                    articles,
                } => Ok(FeedPage {
                    total_results,
                    articles,
                }),
                ProviderBody::Error { code, message } => Err(Error::Upstream(
                    None,
                    provider_message(code, message, status.as_u16()),
                )),
            };
        }

        // error bodies are not always JSON
        let text = res.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ProviderBody>(&text) {
            Ok(ProviderBody::Error { code, message }) => {
                provider_message(code, message, status.as_u16())
            }
            _ => format!("news provider answered with status {}", status.as_u16()),
        };
        Err(Error::Upstream(Some(status.as_u16()), message))
    }
}

/// Builds the message of a provider error
fn provider_message(code: Option<String>, message: Option<String>, status: u16) -> String {
    match (code, message) {
        (_, Some(message)) => message,
        (Some(code), None) => format!("news provider error ({code})"),
        (None, None) => format!("news provider answered with status {status}"),
    }
}
