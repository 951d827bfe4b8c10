//! News service

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use tracing::debug;

use crate::{error::Error, mdl::FeedPage};

/// Largest page size accepted upstream
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size used when the caller sends none
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Keyword used by `all-news` when the caller sends none
pub const DEFAULT_QUERY: &str = "news";

/// Category used by `top-headlines` when the caller sends none
pub const DEFAULT_CATEGORY: &str = "general";

/// Feed selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedKind {
    /// Keyword search
    AllNews {
        /// Keywords
        q: String,
    },
    /// Category-scoped headlines
    TopHeadlines {
        /// Category name
        category: String,
    },
    /// Country-scoped headlines
    Country {
        /// ISO 3166-1 alpha-2 code, lower case
        iso: String,
    },
}

/// A validated feed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    /// Selector
    pub kind: FeedKind,
    /// Page (1-based)
    pub page: u32,
    /// Page size
    pub page_size: u32,
}

impl FeedRequest {
    /// Builds a request, applying the defaults and checking the paging bounds
    pub fn new(kind: FeedKind, page: Option<u32>, page_size: Option<u32>) -> Result<Self, Error> {
        let page = page.unwrap_or(1);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page == 0 {
            return Err(Error::InvalidRequest(
                "page must be greater than 0".to_string(),
                None,
            ));
        }
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(Error::InvalidRequest(
                format!("pageSize must be between 1 and {MAX_PAGE_SIZE}"),
                None,
            ));
        }
        Ok(Self {
            kind,
            page,
            page_size,
        })
    }
}

impl FeedKind {
    /// Keyword search, blank keywords fall back to [DEFAULT_QUERY]
    pub fn all_news(q: Option<String>) -> Self {
        let q = q
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .unwrap_or_else(|| DEFAULT_QUERY.to_string());
        FeedKind::AllNews { q }
    }

    /// Category headlines, a blank category falls back to [DEFAULT_CATEGORY]
    pub fn top_headlines(category: Option<String>) -> Self {
        let category = category
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        FeedKind::TopHeadlines { category }
    }

    /// Country headlines
    ///
    /// The code must be two ASCII letters.
    pub fn country(iso: &str) -> Result<Self, Error> {
        let iso = iso.trim();
        if iso.len() != 2 || !iso.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::InvalidRequest(
                format!("invalid country code '{iso}'"),
                Some("expected an ISO 3166-1 alpha-2 code".to_string()),
            ));
        }
        Ok(FeedKind::Country {
            iso: iso.to_ascii_lowercase(),
        })
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedKind::AllNews { q } => write!(f, "all-news q={q}"),
            FeedKind::TopHeadlines { category } => write!(f, "top-headlines category={category}"),
            FeedKind::Country { iso } => write!(f, "country iso={iso}"),
        }
    }
}

/// Upstream news provider
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetches one page
    async fn fetch(&self, req: &FeedRequest) -> Result<FeedPage, Error>;
}

/// News service
///
/// Holds no state besides the provider: each call maps to one upstream request.
#[derive(Clone)]
pub struct NewsService {
    /// Provider
    provider: Arc<dyn NewsProvider>,
}

impl NewsService {
    /// Creates a new service instance
    pub fn new(provider: impl NewsProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }
}

impl NewsService {
    /// Forwards a feed request upstream
    #[tracing::instrument(skip_all, fields(feed = %req.kind, page = req.page, page_size = req.page_size))]
    pub async fn fetch(&self, req: &FeedRequest) -> Result<FeedPage, Error> {
        let page = self.provider.fetch(req).await?;
        debug!(
            total = page.total_results,
            count = page.articles.len(),
            "forwarded"
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_defaults() {
        let req = FeedRequest::new(FeedKind::all_news(None), None, None).unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(
            req.kind,
            FeedKind::AllNews {
                q: DEFAULT_QUERY.to_string()
            }
        );
    }

    #[test]
    fn test_paging_bounds() {
        let kind = FeedKind::top_headlines(None);
        assert!(FeedRequest::new(kind.clone(), Some(0), None).is_err());
        assert!(FeedRequest::new(kind.clone(), Some(1), Some(0)).is_err());
        assert!(FeedRequest::new(kind.clone(), Some(1), Some(MAX_PAGE_SIZE + 1)).is_err());
        assert!(FeedRequest::new(kind, Some(7), Some(MAX_PAGE_SIZE)).is_ok());
    }

    #[test]
    fn test_selectors() {
        assert_eq!(
            FeedKind::all_news(Some("  ".to_string())),
            FeedKind::AllNews {
                q: DEFAULT_QUERY.to_string()
            }
        );
        assert_eq!(
            FeedKind::top_headlines(Some("Sports".to_string())),
            FeedKind::TopHeadlines {
                category: "sports".to_string()
            }
        );
        assert_eq!(
            FeedKind::country("US").unwrap(),
            FeedKind::Country {
                iso: "us".to_string()
            }
        );
        assert!(FeedKind::country("usa").is_err());
        assert!(FeedKind::country("u1").is_err());
    }
}
