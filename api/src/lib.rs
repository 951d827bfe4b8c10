//! This crate contains the news gateway.
//!
//! The gateway forwards feed requests (keyword search, category headlines,
//! country headlines) to the upstream news provider, adds the provider key
//! server-side and answers with a uniform envelope.
//!
//! # Other binaries
//!
//! - **openapi**: prints the OpenAPI documentation.

#![deny(missing_docs)]

use crate::config::AppConfig;
use salvo::prelude::*;

pub mod config;
pub mod error;
pub mod http;
pub mod mdl;
pub mod svc;
pub mod trace;

/// Starts the server
pub async fn start_server(cfg: AppConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // init the tracing framework
    trace::init_tracer(&cfg);

    // create the HTTP service
    let service = http::init_service(&cfg)?;

    // start the server
    let addr = cfg.server.addr()?;
    let acceptor = TcpListener::new(addr).bind().await;
    tracing::info!(provider = %cfg.provider.url, "listening on http://{}", addr);
    Server::new(acceptor).serve(service).await;
    Ok(())
}
