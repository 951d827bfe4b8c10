//! Generates the OpenAPI documentation

use headline_api::{
    http::{gen_openapi_specs, init_router},
    svc::news::{FeedRequest, NewsProvider, NewsService},
};

/// Provider placeholder, the router is only inspected
struct NoProvider;

#[async_trait::async_trait]
impl NewsProvider for NoProvider {
    async fn fetch(
        &self,
        _req: &FeedRequest,
    ) -> Result<headline_api::mdl::FeedPage, headline_api::error::Error> {
        Err(headline_api::error::Error::Internal(
            "no provider".to_string(),
            None,
        ))
    }
}

fn main() {
    let router = init_router(NewsService::new(NoProvider));
    let openapi = gen_openapi_specs(&router);
    match openapi.to_yaml() {
        Ok(openapi_str) => println!("{openapi_str}"),
        Err(err) => {
            eprintln!("cannot serialize the OpenAPI specs: {err}");
            std::process::exit(1);
        }
    }
}
