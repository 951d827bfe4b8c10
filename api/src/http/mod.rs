//! REST API

use salvo::{
    cors::{Any, Cors},
    http::Method,
    prelude::*,
};
use tracing::trace;

use crate::{config::AppConfig, error::Error, svc::news::NewsService, svc::newsapi::NewsApiProvider};

pub mod feed;

/// Initializes the router
pub fn init_router(news_service: NewsService) -> Router {
    Router::new()
        .hoop(salvo::affix::inject(news_service))
        .get(root)
        .push(Router::with_path("/health").get(healthcheck))
        .push(Router::with_path("/all-news").get(feed::get_all_news))
        .push(Router::with_path("/top-headlines").get(feed::get_top_headlines))
        .push(Router::with_path("/country/<iso>").get(feed::get_country_news))
}

/// Initializes the service
pub fn init_service(cfg: &AppConfig) -> Result<Service, Error> {
    let provider = NewsApiProvider::new(&cfg.provider)?;
    Ok(init_service_with(NewsService::new(provider), &cfg.cors.origin))
}

/// Initializes the service around a given news service
pub fn init_service_with(news_service: NewsService, cors_origin: &str) -> Service {
    let router = init_router(news_service);

    // add the OpenAPI routes
    let openapi = gen_openapi_specs(&router);
    let router = router
        .push(openapi.into_router("/openapi"))
        .push(SwaggerUi::new("/openapi").into_router("/openapi/ui"));

    // the reader runs in a browser, on another origin
    let cors = if cors_origin == "*" {
        Cors::new().allow_origin(Any)
    } else {
        Cors::new().allow_origin(cors_origin)
    };
    let cors = cors.allow_methods(vec![Method::GET, Method::OPTIONS]).into_handler();

    Service::new(router).hoop(cors)
}

/// Generates the OpenAPI specs
pub fn gen_openapi_specs(router: &Router) -> OpenApi {
    let version = env!("CARGO_PKG_VERSION");
    OpenApi::new("Headline gateway", version).merge_router(router)
}

/// Serves the root path
#[endpoint]
#[tracing::instrument(skip_all)]
pub async fn root() -> &'static str {
    trace!("root");
    "Headline news gateway"
}

/// Performs a health check
#[endpoint]
#[tracing::instrument(skip_all)]
pub async fn healthcheck() -> &'static str {
    trace!("healthcheck");
    "API is up"
}
