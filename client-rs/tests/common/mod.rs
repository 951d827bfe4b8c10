//! Shared utilities

use async_trait::async_trait;
use fake::{faker::company::en::CompanyName, Fake};
use headline_api::{
    error::Error,
    http::init_service_with,
    mdl::{Article, FeedPage, Source},
    svc::news::{FeedKind, FeedRequest, NewsProvider, NewsService},
};
use headline_client::Client;
use salvo::prelude::*;

/// Provider serving numbered articles
///
/// - all news: 24 results, the 3rd one redacted
/// - top headlines: 2 results, the `broken` category fails with a 500
/// - country: 5 results, none for `zz`
pub struct NumberedProvider;

impl NumberedProvider {
    fn total(kind: &FeedKind) -> u64 {
        match kind {
            FeedKind::AllNews { .. } => 24,
            FeedKind::TopHeadlines { .. } => 2,
            FeedKind::Country { iso } if iso == "zz" => 0,
            FeedKind::Country { .. } => 5,
        }
    }

    fn label(kind: &FeedKind) -> &str {
        match kind {
            FeedKind::AllNews { q } => q,
            FeedKind::TopHeadlines { category } => category,
            FeedKind::Country { iso } => iso,
        }
    }
}

#[async_trait]
impl NewsProvider for NumberedProvider {
    async fn fetch(&self, req: &FeedRequest) -> Result<FeedPage, Error> {
        if let FeedKind::TopHeadlines { category } = &req.kind {
            if category == "broken" {
                return Err(Error::Upstream(Some(500), "upstream exploded".to_string()));
            }
        }
        let total = Self::total(&req.kind);
        let start = u64::from(req.page - 1) * u64::from(req.page_size);
        let end = (start + u64::from(req.page_size)).min(total);
        let label = Self::label(&req.kind);
        let articles = (start + 1..=end)
            .map(|n| {
                let title = if n == 3 && matches!(req.kind, FeedKind::AllNews { .. }) {
                    "[Removed]".to_string()
                } else {
                    format!("{label} {n}")
                };
                Article {
                    source: Source {
                        id: None,
                        name: CompanyName().fake(),
                    },
                    author: None,
                    title,
                    description: None,
                    url: format!("https://example.com/{label}/{n}"),
                    image_url: None,
                    published_at: "2024-10-01T00:00:00Z".to_string(),
                    content: None,
                }
            })
            .collect();
        Ok(FeedPage {
            total_results: total,
            articles,
        })
    }
}

/// Starts a gateway on a fixed local port and returns a client for it
pub async fn setup(port: u16) -> Client {
    let service = init_service_with(NewsService::new(NumberedProvider), "*");
    let acceptor = TcpListener::new(format!("127.0.0.1:{port}")).bind().await;
    tokio::spawn(async move {
        Server::new(acceptor).serve(service).await;
    });
    Client::new(&format!("http://127.0.0.1:{port}/"))
}
