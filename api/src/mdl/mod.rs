//! Models
//!
//! JSON shapes follow the upstream provider (camelCase keys), so a page can be
//! relayed to the reader without reshaping.

use salvo::prelude::ToSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// A news article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Source
    #[serde(default)]
    pub source: Source,
    /// Author
    #[serde(default)]
    pub author: Option<String>,
    /// Title (may be empty)
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Canonical link
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Image URL
    #[serde(default, rename = "urlToImage")]
    pub image_url: Option<String>,
    /// Publication timestamp, as sent by the provider
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_at: String,
    /// Truncated content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Article {
    /// Returns the provider-assigned source label
    pub fn source_name(&self) -> &str {
        &self.source.name
    }
}

/// Article source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Source {
    /// Provider source ID
    #[serde(default)]
    pub id: Option<String>,
    /// Source label
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// One page of articles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    /// Total number of results reported upstream
    ///
    /// This is the unfiltered count over all pages, not `articles.len()`.
    pub total_results: u64,
    /// Articles, in provider order
    pub articles: Vec<Article>,
}

/// Feed response envelope
///
/// Every gateway route answers with this shape, on success and on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeedResponse {
    /// Whether the upstream call succeeded
    pub success: bool,
    /// Page, on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<FeedPage>,
    /// Explanation, on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FeedResponse {
    /// Wraps a page
    pub fn ok(page: FeedPage) -> Self {
        Self {
            success: true,
            data: Some(page),
            message: None,
        }
    }

    /// Builds a failure envelope
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Decodes `null` as the type default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_provider_article() {
        let json = r#"{
            "source": { "id": null, "name": "Source 1" },
            "author": "Author 1",
            "title": "Test Title 1",
            "description": "Test Description 1",
            "url": "https://example.com/1",
            "urlToImage": "test-image-1.jpg",
            "publishedAt": "2024-10-23",
            "content": null
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "Test Title 1");
        assert_eq!(article.source_name(), "Source 1");
        assert_eq!(article.image_url.as_deref(), Some("test-image-1.jpg"));
        assert_eq!(article.published_at, "2024-10-23");
        assert_eq!(article.content, None);
    }

    #[test]
    fn test_decode_null_title() {
        let json = r#"{ "title": null, "url": "u", "source": { "name": null } }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "");
        assert_eq!(article.source_name(), "");
        assert_eq!(article.description, None);
    }

    #[test]
    fn test_envelope_shape() {
        let ok = serde_json::to_value(FeedResponse::ok(FeedPage {
            total_results: 3,
            articles: vec![],
        }))
        .unwrap();
        assert_eq!(
            ok,
            serde_json::json!({ "success": true, "data": { "totalResults": 3, "articles": [] } })
        );

        let ko = serde_json::to_value(FeedResponse::failure("boom")).unwrap();
        assert_eq!(ko, serde_json::json!({ "success": false, "message": "boom" }));
    }
}
