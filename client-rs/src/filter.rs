//! Redaction filter
//!
//! The provider keeps deleted articles in its results with their fields
//! replaced by a placeholder. Those never reach the view.

use headline_api::mdl::{Article, FeedPage};

/// Placeholder text of a redacted article
pub const REDACTED_MARKER: &str = "[Removed]";

/// Checks if an article was redacted by the provider
pub fn is_redacted(article: &Article) -> bool {
    article.title.contains(REDACTED_MARKER)
        || article
            .description
            .as_deref()
            .is_some_and(|d| d.contains(REDACTED_MARKER))
}

/// Drops the redacted articles of a page
///
/// `total_results` is left untouched, it stays the upstream count.
pub fn redact(mut page: FeedPage) -> FeedPage {
    page.articles.retain(|article| !is_redacted(article));
    page
}

#[cfg(test)]
mod tests {
    use headline_api::mdl::Source;

    use super::*;

    fn article(title: &str, description: Option<&str>) -> Article {
        Article {
            source: Source {
                id: None,
                name: "Source".to_string(),
            },
            author: None,
            title: title.to_string(),
            description: description.map(str::to_string),
            url: format!("https://example.com/{title}"),
            image_url: None,
            published_at: "2024-10-01".to_string(),
            content: None,
        }
    }

    #[test]
    fn test_is_redacted() {
        assert!(is_redacted(&article("[Removed]", Some("[Removed]"))));
        assert!(is_redacted(&article("[Removed] News", None)));
        assert!(is_redacted(&article("News", Some("a [Removed] description"))));
        assert!(!is_redacted(&article("News", Some("Removed from office"))));
        assert!(!is_redacted(&article("", None)));
    }

    #[test]
    fn test_redact_keeps_order_and_total() {
        let page = FeedPage {
            total_results: 4,
            articles: vec![
                article("News 1", Some("Description 1")),
                article("[Removed] News", Some("[Removed] Description")),
                article("News 2", None),
                article("News 3", Some("[Removed]")),
            ],
        };
        let page = redact(page);
        assert_eq!(page.total_results, 4);
        let titles = page
            .articles
            .iter()
            .map(|a| a.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["News 1", "News 2"]);
    }
}
