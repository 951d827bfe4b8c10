//! Feed queries

use std::fmt;

pub use headline_api::svc::news::{DEFAULT_QUERY, MAX_PAGE_SIZE};

use crate::error::Error;

/// Page size used by the reader
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// What the view is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedMode {
    /// Keyword search
    AllNews {
        /// Keywords, blank for the default search
        query: String,
    },
    /// Headlines of a category
    TopHeadlines {
        /// Category name
        category: String,
    },
    /// Headlines of a country
    CountryNews {
        /// ISO 3166-1 alpha-2 code
        iso: String,
    },
}

impl fmt::Display for FeedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedMode::AllNews { query } if query.trim().is_empty() => write!(f, "All news"),
            FeedMode::AllNews { query } => write!(f, "All news: {query}"),
            FeedMode::TopHeadlines { category } => write!(f, "Top headlines: {category}"),
            FeedMode::CountryNews { iso } => write!(f, "Country: {}", iso.to_uppercase()),
        }
    }
}

/// Pagination and selector state of a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    /// Selector
    pub mode: FeedMode,
    /// Page (1-based)
    pub page: u32,
    /// Page size, fixed for the session
    pub page_size: u32,
}

impl FeedQuery {
    /// Creates a query on the first page
    pub fn new(mode: FeedMode) -> Self {
        Self {
            mode,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Keyword search
    pub fn all_news(query: impl Into<String>) -> Self {
        Self::new(FeedMode::AllNews {
            query: query.into(),
        })
    }

    /// Category headlines
    pub fn top_headlines(category: impl Into<String>) -> Self {
        Self::new(FeedMode::TopHeadlines {
            category: category.into(),
        })
    }

    /// Country headlines
    pub fn country_news(iso: impl Into<String>) -> Self {
        Self::new(FeedMode::CountryNews { iso: iso.into() })
    }

    /// Sets the page
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Checks the query can be sent
    pub fn validate(&self) -> Result<(), Error> {
        if self.page == 0 {
            return Err(Error::InvalidQuery {
                message: "page must be greater than 0".to_string(),
            });
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(Error::InvalidQuery {
                message: format!("page size must be between 1 and {MAX_PAGE_SIZE}"),
            });
        }
        match &self.mode {
            FeedMode::AllNews { .. } => Ok(()),
            FeedMode::TopHeadlines { category } if category.trim().is_empty() => {
                Err(Error::InvalidQuery {
                    message: "missing category".to_string(),
                })
            }
            FeedMode::TopHeadlines { .. } => Ok(()),
            FeedMode::CountryNews { iso }
                if iso.len() != 2 || !iso.chars().all(|c| c.is_ascii_alphabetic()) =>
            {
                Err(Error::InvalidQuery {
                    message: format!("invalid country code '{iso}'"),
                })
            }
            FeedMode::CountryNews { .. } => Ok(()),
        }
    }

    /// Returns the gateway path
    pub fn path(&self) -> String {
        match &self.mode {
            FeedMode::AllNews { .. } => "/all-news".to_string(),
            FeedMode::TopHeadlines { .. } => "/top-headlines".to_string(),
            FeedMode::CountryNews { iso } => format!("/country/{}", iso.to_ascii_lowercase()),
        }
    }

    /// Returns the gateway query parameters
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = match &self.mode {
            FeedMode::AllNews { query } => {
                let query = query.trim();
                let query = if query.is_empty() { DEFAULT_QUERY } else { query };
                vec![("q", query.to_string())]
            }
            FeedMode::TopHeadlines { category } => vec![("category", category.trim().to_string())],
            FeedMode::CountryNews { .. } => vec![],
        };
        params.push(("page", self.page.to_string()));
        params.push(("pageSize", self.page_size.to_string()));
        params
    }
}

/// Number of pages needed for `total_results`
pub fn page_count(total_results: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_results.div_ceil(u64::from(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(24, 12), 2);
        assert_eq!(page_count(25, 12), 3);
        assert_eq!(page_count(2, 10), 1);
        assert_eq!(page_count(0, 10), 0);
    }

    #[test]
    fn test_params() {
        let q = FeedQuery::all_news("").page(3);
        assert_eq!(q.path(), "/all-news");
        assert_eq!(
            q.params(),
            vec![
                ("q", DEFAULT_QUERY.to_string()),
                ("page", "3".to_string()),
                ("pageSize", "10".to_string())
            ]
        );

        let q = FeedQuery::country_news("US").page_size(20);
        assert_eq!(q.path(), "/country/us");
        assert_eq!(
            q.params(),
            vec![("page", "1".to_string()), ("pageSize", "20".to_string())]
        );

        let q = FeedQuery::top_headlines("science");
        assert_eq!(q.params()[0], ("category", "science".to_string()));
    }

    #[test]
    fn test_validate() {
        assert!(FeedQuery::all_news("").validate().is_ok());
        assert!(FeedQuery::all_news("x").page(0).validate().is_err());
        assert!(FeedQuery::all_news("x").page_size(0).validate().is_err());
        assert!(FeedQuery::top_headlines(" ").validate().is_err());
        assert!(FeedQuery::country_news("usa").validate().is_err());
        assert!(FeedQuery::country_news("gb").validate().is_ok());
    }
}
