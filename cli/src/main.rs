//! Terminal news reader

use tracing_subscriber::EnvFilter;

use crate::util::ResultExt;

mod cmd;
mod config;
mod pager;
mod util;

#[tokio::main]
async fn main() {
    // logs go to stderr, out of the way of the pager
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    println!();
    cmd::run().await.unwrap_or_exit();
}
