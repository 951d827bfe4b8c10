//! Server

use headline_api::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // NB: the provider key usually lives in a local .env file
    dotenv::dotenv().ok();

    let cfg = AppConfig::load()?;
    headline_api::start_server(cfg).await
}
