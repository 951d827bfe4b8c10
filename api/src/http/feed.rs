//! Feed endpoints

use salvo::prelude::*;
use tracing::trace;

use crate::{
    error::Error,
    mdl::FeedResponse,
    svc::news::{FeedKind, FeedRequest, NewsService},
};

/// Fetches news matching keywords
///
/// Query: `q`, `page`, `pageSize`.
#[endpoint]
#[tracing::instrument(skip_all)]
pub async fn get_all_news(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<FeedResponse>, Error> {
    trace!("received request");
    let kind = FeedKind::all_news(query_str(req, "q"));
    forward(req, depot, kind).await
}

/// Fetches the top headlines of a category
///
/// Query: `category`, `page`, `pageSize`.
#[endpoint]
#[tracing::instrument(skip_all)]
pub async fn get_top_headlines(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<FeedResponse>, Error> {
    trace!("received request");
    let kind = FeedKind::top_headlines(query_str(req, "category"));
    forward(req, depot, kind).await
}

/// Fetches the top headlines of a country
///
/// Path: ISO country code. Query: `page`, `pageSize`.
#[endpoint]
#[tracing::instrument(skip_all)]
pub async fn get_country_news(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<FeedResponse>, Error> {
    trace!("received request");
    let iso = req
        .param::<String>("iso")
        .ok_or_else(|| Error::InvalidRequest("missing country code".to_string(), None))?;
    let kind = FeedKind::country(&iso)?;
    forward(req, depot, kind).await
}

/// Forwards the request to the news service
async fn forward(
    req: &mut Request,
    depot: &mut Depot,
    kind: FeedKind,
) -> Result<Json<FeedResponse>, Error> {
    let news = depot
        .obtain::<NewsService>()
        .ok_or_else(|| Error::Internal("news service not configured".to_string(), None))?;

    let page = query_u32(req, "page")?;
    let page_size = query_u32(req, "pageSize")?;
    let feed_req = FeedRequest::new(kind, page, page_size)?;

    let page = news.fetch(&feed_req).await?;
    Ok(Json(FeedResponse::ok(page)))
}

/// Reads a string query parameter
fn query_str(req: &mut Request, key: &str) -> Option<String> {
    req.query::<String>(key)
}

/// Reads a positive integer query parameter
fn query_u32(req: &mut Request, key: &str) -> Result<Option<u32>, Error> {
    match req.query::<String>(key) {
        None => Ok(None),
        Some(value) if value.is_empty() => Ok(None),
        Some(value) => value.parse::<u32>().map(Some).map_err(|err| {
            Error::InvalidRequest(
                format!("{key} must be a positive integer"),
                Some(err.to_string()),
            )
        }),
    }
}
