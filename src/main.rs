mod api;
mod config;
mod meili;
mod search;
mod secret;
mod translate;

pub const USER_AGENT: &str = concat!("sanctions-search/", env!("CARGO_PKG_VERSION"));

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use reqwest::Client;
use tokio::net::TcpListener;
use tracing::info;

use config::Config;
use meili::MeiliClient;
use search::SanctionsSearch;
use translate::TranslateClient;

/// TCP connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Global HTTP client timeout covering connect + response body.
const HTTP_TIMEOUT: Duration = Duration::from_secs(25);

/// Sanctions watch-list name search service.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sanctions_search=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config =
        Config::from_env().inspect_err(|e| tracing::error!("invalid configuration: {e}"))?;

    let http = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(HTTP_TIMEOUT)
        .build()?;
    let index = MeiliClient::new(http.clone(), &config.meili_url, config.meili_api_key);
    let translator = TranslateClient::new(http, &config.translate_url, config.translate_api_key);

    info!(
        index = %config.search.index,
        entities_index = %config.search.entities_index,
        scheme = ?config.search.scheme,
        "starting sanctions search"
    );

    let engine = Arc::new(SanctionsSearch::new(index, translator, config.search));
    let listener = TcpListener::bind(args.bind)
        .await
        .inspect_err(|e| tracing::error!("failed to bind {}: {e}", args.bind))?;
    info!(addr = %args.bind, "listening");

    axum::serve(listener, api::router(engine))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
    }
}
