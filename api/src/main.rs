use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use firstbites_api::application::http::server::http_server;
use firstbites_api::args::Args;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();
    let args = Arc::new(Args::parse());

    let filter = EnvFilter::try_new(&args.log.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    if args.log.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let state = http_server::state(args.clone()).await?;
    let router = http_server::router(state)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], args.server.port));
    info!("listening on {}", addr);

    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
